//! Generic keyed time series.
//!
//! Many data sets are served from the same `time-series/{id}/{key}/{subkey}`
//! endpoint and differ only in their `id`.

use crate::core::request::{normalize_opt_date, quote_symbols, require_arg, validate_sort};
use crate::core::{DateArg, IexClient, IexError, Payload, Query, RequestSpec, StandardOptions};

/// Identifies one time series.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeSeriesArgs {
    pub id: String,
    pub key: Option<String>,
    pub subkey: Option<String>,
}

impl TimeSeriesArgs {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            key: None,
            subkey: None,
        }
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn subkey(mut self, subkey: impl Into<String>) -> Self {
        self.subkey = Some(subkey.into());
        self
    }
}

/// Range, pagination and sort options shared by every time series.
///
/// Unset, `false` and non-positive values are omitted from the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeSeriesOptions {
    /// Relative range such as `1m`, `last-week` or `next-2-days`.
    pub range: Option<String>,
    /// Treat `range` as calendar rather than trading days.
    pub calendar: bool,
    pub limit: Option<i64>,
    pub subattribute: Option<String>,
    pub date_field: Option<String>,
    pub from: Option<DateArg>,
    pub to: Option<DateArg>,
    pub on: Option<DateArg>,
    pub last: Option<i64>,
    pub first: Option<i64>,
    /// `asc` or `desc`.
    pub sort: Option<String>,
    pub interval: Option<i64>,
}

/// Builds the request for a time series.
///
/// # Errors
///
/// Returns [`IexError::Validation`] if `id` is empty, a date cannot be
/// normalized or `sort` is not `asc`/`desc`.
pub fn time_series_request(
    args: &TimeSeriesArgs,
    opts: &TimeSeriesOptions,
) -> Result<RequestSpec, IexError> {
    let id = require_arg("id", &args.id)?;

    let mut path = format!("time-series/{id}");
    if let Some(key) = args.key.as_deref().filter(|k| !k.is_empty()) {
        path.push('/');
        path.push_str(&quote_symbols(key));
        if let Some(subkey) = args.subkey.as_deref().filter(|s| !s.is_empty()) {
            path.push('/');
            path.push_str(&quote_symbols(subkey));
        }
    }

    let sort = opts.sort.as_deref().filter(|s| !s.is_empty()).map(validate_sort).transpose()?;
    let from = normalize_opt_date(opts.from.as_ref())?;
    let to = normalize_opt_date(opts.to.as_ref())?;
    let on = normalize_opt_date(opts.on.as_ref())?;

    let mut q = Query::new();
    q.text("range", opts.range.as_deref())
        .flag("calendar", opts.calendar)
        .positive("limit", opts.limit)
        .text("subattribute", opts.subattribute.as_deref())
        .text("dateField", opts.date_field.as_deref())
        .text("from", from.as_deref())
        .text("to", to.as_deref())
        .text("on", on.as_deref())
        .positive("last", opts.last)
        .positive("first", opts.first)
        .text("sort", sort.as_deref())
        .positive("interval", opts.interval);

    Ok(RequestSpec::new(path).with_query(q))
}

impl IexClient {
    /// Fetches a keyed time series.
    ///
    /// # Errors
    ///
    /// Validation errors are raised before the request is sent; see
    /// [`time_series_request`] and [`IexClient::execute`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self, args, opts, std_opts), err, fields(id = %args.id))
    )]
    pub async fn time_series(
        &self,
        args: &TimeSeriesArgs,
        opts: &TimeSeriesOptions,
        std_opts: &StandardOptions,
    ) -> Result<Payload, IexError> {
        let spec = time_series_request(args, opts)?.with_options(std_opts);
        self.execute(&spec).await
    }
}
