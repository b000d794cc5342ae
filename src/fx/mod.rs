//! Foreign exchange rates over REST. Live rates are under [`crate::stream`].

use crate::core::request::{normalize_opt_date, normalize_symbols};
use crate::core::{DateArg, IexClient, IexError, Payload, Query, RequestSpec, StandardOptions};

fn require_pairs<S: AsRef<str>>(symbols: &[S]) -> Result<String, IexError> {
    let pairs = normalize_symbols(symbols);
    if pairs.is_empty() {
        return Err(IexError::validation("symbols must contain at least one currency pair"));
    }
    Ok(pairs.join(","))
}

/// Latest rates for currency pairs such as `EURUSD`.
pub fn latest_fx_request<S: AsRef<str>>(symbols: &[S]) -> Result<RequestSpec, IexError> {
    let mut q = Query::new();
    q.raw("symbols", require_pairs(symbols)?);
    Ok(RequestSpec::new("fx/latest").with_query(q))
}

/// Converts `amount` at the latest rate; without an amount the rate alone is returned.
pub fn convert_fx_request<S: AsRef<str>>(
    symbols: &[S],
    amount: Option<f64>,
) -> Result<RequestSpec, IexError> {
    let mut q = Query::new();
    q.raw("symbols", require_pairs(symbols)?);
    if let Some(a) = amount
        && a > 0.0
    {
        q.raw("amount", a);
    }
    Ok(RequestSpec::new("fx/convert").with_query(q))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoricalFxOptions {
    pub from: Option<DateArg>,
    pub to: Option<DateArg>,
    pub on: Option<DateArg>,
    pub last: Option<i64>,
    pub first: Option<i64>,
}

pub fn historical_fx_request<S: AsRef<str>>(
    symbols: &[S],
    opts: &HistoricalFxOptions,
) -> Result<RequestSpec, IexError> {
    let pairs = require_pairs(symbols)?;
    let from = normalize_opt_date(opts.from.as_ref())?;
    let to = normalize_opt_date(opts.to.as_ref())?;
    let on = normalize_opt_date(opts.on.as_ref())?;

    let mut q = Query::new();
    q.raw("symbols", pairs)
        .text("from", from.as_deref())
        .text("to", to.as_deref())
        .text("on", on.as_deref())
        .positive("last", opts.last)
        .positive("first", opts.first);
    Ok(RequestSpec::new("fx/historical").with_query(q))
}

impl IexClient {
    /// # Errors
    ///
    /// Fails when no pair is given or the request is unsuccessful.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, symbols, std_opts), err))]
    pub async fn latest_fx<S: AsRef<str>>(
        &self,
        symbols: &[S],
        std_opts: &StandardOptions,
    ) -> Result<Payload, IexError> {
        self.execute(&latest_fx_request(symbols)?.with_options(std_opts))
            .await
    }

    /// # Errors
    ///
    /// Fails when no pair is given or the request is unsuccessful.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, symbols, std_opts), err))]
    pub async fn convert_fx<S: AsRef<str>>(
        &self,
        symbols: &[S],
        amount: Option<f64>,
        std_opts: &StandardOptions,
    ) -> Result<Payload, IexError> {
        self.execute(&convert_fx_request(symbols, amount)?.with_options(std_opts))
            .await
    }

    /// # Errors
    ///
    /// Fails when no pair is given, a date is unparsable or the request is unsuccessful.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, symbols, std_opts), err))]
    pub async fn historical_fx<S: AsRef<str>>(
        &self,
        symbols: &[S],
        opts: &HistoricalFxOptions,
        std_opts: &StandardOptions,
    ) -> Result<Payload, IexError> {
        self.execute(&historical_fx_request(symbols, opts)?.with_options(std_opts))
            .await
    }
}
