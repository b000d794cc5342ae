//! Equity endpoints: charts, previous day prices, insider activity and
//! regulation SHO reports.

mod chart;

pub use chart::{CHART_RANGES, ChartOptions, chart_request};

use crate::core::request::{normalize_opt_date, quote_symbols, require_symbol};
use crate::core::{DateArg, IexClient, IexError, Payload, RequestSpec, StandardOptions};
use crate::timeseries::{TimeSeriesArgs, TimeSeriesOptions, time_series_request};

/// Previous day adjusted prices for one symbol.
pub fn previous_request(symbol: &str) -> Result<RequestSpec, IexError> {
    let symbol = quote_symbols(require_symbol(symbol)?);
    Ok(RequestSpec::new(format!("stock/{symbol}/previous")))
}

/// Previous day adjusted prices for the whole market.
pub fn market_previous_request() -> RequestSpec {
    RequestSpec::new("stock/market/previous")
}

pub fn insider_transactions_request(symbol: &str) -> Result<RequestSpec, IexError> {
    let symbol = quote_symbols(require_symbol(symbol)?);
    Ok(RequestSpec::new(format!("stock/{symbol}/insider-transactions")))
}

/// IEX-listed threshold securities, optionally for a given day.
pub fn threshold_request(date: Option<&DateArg>) -> Result<RequestSpec, IexError> {
    Ok(match normalize_opt_date(date)? {
        Some(d) => RequestSpec::new(format!("stock/market/threshold-securities/{d}")),
        None => RequestSpec::new("stock/market/threshold-securities"),
    })
}

pub fn short_interest_request(
    symbol: &str,
    date: Option<&DateArg>,
) -> Result<RequestSpec, IexError> {
    let symbol = quote_symbols(require_symbol(symbol)?);
    Ok(match normalize_opt_date(date)? {
        Some(d) => RequestSpec::new(format!("stock/{symbol}/short-interest/{d}")),
        None => RequestSpec::new(format!("stock/{symbol}/short-interest")),
    })
}

/// Fundamental valuations, served through the time series endpoint.
pub fn fundamental_valuations_request(
    symbol: &str,
    frequency: Option<&str>,
    opts: &TimeSeriesOptions,
) -> Result<RequestSpec, IexError> {
    let symbol = require_symbol(symbol)?;
    let mut args = TimeSeriesArgs::new("fundamental_valuations").key(symbol);
    if let Some(f) = frequency.filter(|f| !f.is_empty()) {
        args = args.subkey(f);
    }
    time_series_request(&args, opts)
}

impl IexClient {
    /// Historical price/volume data, daily and intraday.
    ///
    /// # Errors
    ///
    /// See [`chart_request`] and [`IexClient::execute`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self, opts, std_opts), err, fields(symbol = %opts.symbol))
    )]
    pub async fn chart(
        &self,
        opts: &ChartOptions,
        std_opts: &StandardOptions,
    ) -> Result<Payload, IexError> {
        let spec = chart_request(opts)?.with_options(std_opts);
        self.execute(&spec).await
    }

    /// Previous day adjusted price data for `symbol`.
    ///
    /// # Errors
    ///
    /// Fails on an empty symbol or an unsuccessful request.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, std_opts), err))]
    pub async fn previous(
        &self,
        symbol: &str,
        std_opts: &StandardOptions,
    ) -> Result<Payload, IexError> {
        let spec = previous_request(symbol)?.with_options(std_opts);
        self.execute(&spec).await
    }

    /// Alias of [`IexClient::previous`].
    ///
    /// # Errors
    ///
    /// Fails on an empty symbol or an unsuccessful request.
    pub async fn yesterday(
        &self,
        symbol: &str,
        std_opts: &StandardOptions,
    ) -> Result<Payload, IexError> {
        self.previous(symbol, std_opts).await
    }

    /// # Errors
    ///
    /// Fails on an unsuccessful request.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, std_opts), err))]
    pub async fn market_previous(&self, std_opts: &StandardOptions) -> Result<Payload, IexError> {
        let spec = market_previous_request().with_options(std_opts);
        self.execute(&spec).await
    }

    /// # Errors
    ///
    /// Fails on an empty symbol or an unsuccessful request.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, std_opts), err))]
    pub async fn insider_transactions(
        &self,
        symbol: &str,
        std_opts: &StandardOptions,
    ) -> Result<Payload, IexError> {
        let spec = insider_transactions_request(symbol)?.with_options(std_opts);
        self.execute(&spec).await
    }

    /// # Errors
    ///
    /// Fails on an unparsable date or an unsuccessful request.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, std_opts), err))]
    pub async fn threshold(
        &self,
        date: Option<&DateArg>,
        std_opts: &StandardOptions,
    ) -> Result<Payload, IexError> {
        let spec = threshold_request(date)?.with_options(std_opts);
        self.execute(&spec).await
    }

    /// # Errors
    ///
    /// Fails on an empty symbol, an unparsable date or an unsuccessful request.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, std_opts), err))]
    pub async fn short_interest(
        &self,
        symbol: &str,
        date: Option<&DateArg>,
        std_opts: &StandardOptions,
    ) -> Result<Payload, IexError> {
        let spec = short_interest_request(symbol, date)?.with_options(std_opts);
        self.execute(&spec).await
    }

    /// # Errors
    ///
    /// Fails on an empty symbol, invalid time series options or an unsuccessful request.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, opts, std_opts), err))]
    pub async fn fundamental_valuations(
        &self,
        symbol: &str,
        frequency: Option<&str>,
        opts: &TimeSeriesOptions,
        std_opts: &StandardOptions,
    ) -> Result<Payload, IexError> {
        let spec = fundamental_valuations_request(symbol, frequency, opts)?.with_options(std_opts);
        self.execute(&spec).await
    }
}
