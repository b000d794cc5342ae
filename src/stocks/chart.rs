use crate::core::request::{normalize_opt_date, quote_symbols, require_symbol, validate_sort};
use crate::core::{DateArg, IexError, Query, RequestSpec};

/// Chart ranges accepted in the path, besides `1d`.
pub const CHART_RANGES: [&str; 13] = [
    "max", "5y", "2y", "1y", "ytd", "6m", "3m", "1m", "1mm", "5d", "5dm", "date", "dynamic",
];

/// Historical and intraday price/volume request.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct ChartOptions {
    pub symbol: String,
    /// Timeframe such as `1m` or `5y`. Ignored when a date is given.
    pub range: String,
    /// Single trading day to fetch.
    pub date: Option<DateArg>,
    /// Same as `date`; takes precedence when both are set.
    pub exact_date: Option<DateArg>,
    /// Return only the last N points of the range.
    pub last: Option<i64>,
    pub close_only: bool,
    /// Daily OHLCV instead of minute bars for a single date.
    pub by_day: bool,
    pub simplify: bool,
    /// Return every Nth point.
    pub interval: Option<i64>,
    pub change_from_close: bool,
    pub display_percent: bool,
    /// `asc` or `desc`.
    pub sort: Option<String>,
    pub include_today: bool,
}

impl ChartOptions {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            range: "1m".to_string(),
            date: None,
            exact_date: None,
            last: None,
            close_only: false,
            by_day: false,
            simplify: false,
            interval: None,
            change_from_close: false,
            display_percent: false,
            sort: None,
            include_today: false,
        }
    }

    pub fn range(mut self, range: impl Into<String>) -> Self {
        self.range = range.into();
        self
    }

    pub fn date(mut self, date: impl Into<DateArg>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn exact_date(mut self, date: impl Into<DateArg>) -> Self {
        self.exact_date = Some(date.into());
        self
    }

    pub fn last(mut self, n: i64) -> Self {
        self.last = Some(n);
        self
    }

    pub fn close_only(mut self, yes: bool) -> Self {
        self.close_only = yes;
        self
    }

    pub fn by_day(mut self, yes: bool) -> Self {
        self.by_day = yes;
        self
    }

    pub fn simplify(mut self, yes: bool) -> Self {
        self.simplify = yes;
        self
    }

    pub fn interval(mut self, n: i64) -> Self {
        self.interval = Some(n);
        self
    }

    pub fn change_from_close(mut self, yes: bool) -> Self {
        self.change_from_close = yes;
        self
    }

    pub fn display_percent(mut self, yes: bool) -> Self {
        self.display_percent = yes;
        self
    }

    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn include_today(mut self, yes: bool) -> Self {
        self.include_today = yes;
        self
    }
}

/// Builds the chart request.
///
/// A date switches the path to `stock/{symbol}/chart/date/{YYYYMMDD}`.
///
/// # Errors
///
/// Returns [`IexError::Validation`] for an empty symbol, an unknown range or
/// sort direction, or an unparsable date.
pub fn chart_request(opts: &ChartOptions) -> Result<RequestSpec, IexError> {
    let symbol = quote_symbols(require_symbol(&opts.symbol)?);

    let range = match opts.range.trim() {
        "" => "1m",
        r => r,
    };
    if range != "1d" && !CHART_RANGES.contains(&range) {
        return Err(IexError::validation(format!("Range not recognized: {range}")));
    }

    let date = match normalize_opt_date(opts.exact_date.as_ref())? {
        Some(d) => Some(d),
        None => normalize_opt_date(opts.date.as_ref())?,
    };

    let sort = opts
        .sort
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(validate_sort)
        .transpose()?;

    let mut q = Query::new();
    q.positive("chartLast", opts.last)
        .flag("chartCloseOnly", opts.close_only)
        .flag("chartByDay", opts.by_day)
        .flag("chartSimplify", opts.simplify)
        .positive("chartInterval", opts.interval)
        .flag("changeFromClose", opts.change_from_close)
        .flag("displayPercent", opts.display_percent)
        .text("sort", sort.as_deref())
        .flag("includeToday", opts.include_today);

    let path = match date {
        Some(d) => format!("stock/{symbol}/chart/date/{d}"),
        None => format!("stock/{symbol}/chart/{range}"),
    };

    Ok(RequestSpec::new(path).with_query(q))
}
