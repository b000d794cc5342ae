//! Request targets: paths, sparse query parameters and argument normalization.

use chrono::NaiveDate;
use url::form_urlencoded;

use crate::core::{IexError, OutputFormat};

/// Per-call overrides merged into every request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StandardOptions {
    /// Comma separated list of response fields to keep.
    pub filter: Option<String>,
    /// Overrides the client's default output format.
    pub format: Option<OutputFormat>,
}

impl StandardOptions {
    pub fn filter(filter: impl Into<String>) -> Self {
        Self {
            filter: Some(filter.into()),
            format: None,
        }
    }

    pub fn format(format: OutputFormat) -> Self {
        Self {
            filter: None,
            format: Some(format),
        }
    }
}

/// Ordered query parameters that only records values that are actually set.
///
/// The API treats an absent parameter differently from an explicit default, so
/// `false`, non-positive numbers and empty strings are never emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Included only when `value` is true.
    pub fn flag(&mut self, key: &str, value: bool) -> &mut Self {
        if value {
            self.pairs.push((key.to_string(), "true".to_string()));
        }
        self
    }

    /// Included only when `value` is present and greater than zero.
    pub fn positive(&mut self, key: &str, value: Option<i64>) -> &mut Self {
        if let Some(v) = value
            && v > 0
        {
            self.pairs.push((key.to_string(), v.to_string()));
        }
        self
    }

    /// Included only when `value` is present and non-empty.
    pub fn text(&mut self, key: &str, value: Option<&str>) -> &mut Self {
        if let Some(v) = value
            && !v.is_empty()
        {
            self.pairs.push((key.to_string(), v.to_string()));
        }
        self
    }

    /// Always included.
    pub fn raw(&mut self, key: &str, value: impl ToString) -> &mut Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// A fully built REST call, minus the credentials the client adds on dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    path: String,
    query: Query,
    filter: Option<String>,
    format: Option<OutputFormat>,
}

impl RequestSpec {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Query::new(),
            filter: None,
            format: None,
        }
    }

    pub fn with_query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    /// Merges per-call options; an empty filter is treated as unset.
    pub fn with_options(mut self, opts: &StandardOptions) -> Self {
        if let Some(f) = opts.filter.as_deref().filter(|f| !f.is_empty()) {
            self.filter = Some(f.to_string());
        }
        if opts.format.is_some() {
            self.format = opts.format;
        }
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    pub fn format(&self) -> Option<OutputFormat> {
        self.format
    }

    /// `key=value` pairs joined with `&`, in insertion order.
    pub fn query_string(&self) -> String {
        self.query
            .pairs()
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// The path with its query string, e.g. `stock/AAPL/chart/1m?chartLast=5`.
    pub fn target(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query_string())
        }
    }
}

/// A date given either as text or as a calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateArg {
    Text(String),
    Date(NaiveDate),
}

impl DateArg {
    /// Normalizes to the compact `YYYYMMDD` form used in paths and queries.
    ///
    /// # Errors
    ///
    /// Returns [`IexError::Validation`] for text that is not a recognizable date.
    pub fn normalize(&self) -> Result<String, IexError> {
        match self {
            DateArg::Date(d) => Ok(d.format("%Y%m%d").to_string()),
            DateArg::Text(s) => {
                let s = s.trim();
                ["%Y%m%d", "%Y-%m-%d", "%Y/%m/%d"]
                    .iter()
                    .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
                    .map(|d| d.format("%Y%m%d").to_string())
                    .ok_or_else(|| IexError::validation(format!("Date not recognized: {s}")))
            }
        }
    }
}

impl From<&str> for DateArg {
    fn from(s: &str) -> Self {
        DateArg::Text(s.to_string())
    }
}

impl From<String> for DateArg {
    fn from(s: String) -> Self {
        DateArg::Text(s)
    }
}

impl From<NaiveDate> for DateArg {
    fn from(d: NaiveDate) -> Self {
        DateArg::Date(d)
    }
}

/// Normalizes an optional date, treating empty text as unset.
pub(crate) fn normalize_opt_date(date: Option<&DateArg>) -> Result<Option<String>, IexError> {
    match date {
        Some(DateArg::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(d) => d.normalize().map(Some),
        None => Ok(None),
    }
}

/// Rejects empty symbols before they reach a path.
pub fn require_symbol(symbol: &str) -> Result<&str, IexError> {
    let trimmed = symbol.trim();
    if trimmed.is_empty() {
        return Err(IexError::validation("symbol must be a non-empty string"));
    }
    Ok(trimmed)
}

/// Rejects an empty required string argument, naming it in the error.
pub(crate) fn require_arg<'a>(name: &str, value: &'a str) -> Result<&'a str, IexError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(IexError::validation(format!("{name} must be a non-empty string")));
    }
    Ok(trimmed)
}

/// Percent-encodes each comma separated symbol; commas are kept as separators.
pub fn quote_symbols(symbols: &str) -> String {
    symbols
        .split(',')
        .map(|s| {
            form_urlencoded::byte_serialize(s.trim().as_bytes())
                .collect::<String>()
                .replace('+', "%20")
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Splits, trims and uppercases tickers, dropping empties and repeats but keeping order.
pub fn normalize_symbols<I, S>(symbols: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for entry in symbols {
        for sym in entry.as_ref().split(',') {
            let sym = sym.trim().to_uppercase();
            if !sym.is_empty() && !out.contains(&sym) {
                out.push(sym);
            }
        }
    }
    out
}

/// Checks a sort direction, returning it lowercased.
pub fn validate_sort(sort: &str) -> Result<String, IexError> {
    let lower = sort.to_lowercase();
    if lower != "asc" && lower != "desc" {
        return Err(IexError::validation(format!("Sort not recognized: {sort}")));
    }
    Ok(lower)
}
