//! Reference data: the symbol universes supported by the API.

use serde::Deserialize;

use crate::core::request::require_arg;
use crate::core::{IexClient, IexError, OutputFormat, Payload, RequestSpec, StandardOptions};

pub fn symbols_request() -> RequestSpec {
    RequestSpec::new("ref-data/symbols")
}

pub fn otc_symbols_request() -> RequestSpec {
    RequestSpec::new("ref-data/otc/symbols")
}

pub fn mutual_fund_symbols_request() -> RequestSpec {
    RequestSpec::new("ref-data/mutual-funds/symbols")
}

/// Where to look up international symbols. `region` wins over `exchange`;
/// with neither, the US region is used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InternationalSymbolsOptions {
    /// ISO 3166-1 alpha-2 country code, case insensitive.
    pub region: Option<String>,
    /// Exchange code from the supported exchanges list, case insensitive.
    pub exchange: Option<String>,
}

pub fn international_symbols_request(
    opts: &InternationalSymbolsOptions,
) -> Result<RequestSpec, IexError> {
    if let Some(region) = opts.region.as_deref().filter(|r| !r.is_empty()) {
        let region = require_arg("region", region)?;
        return Ok(RequestSpec::new(format!("ref-data/region/{region}/symbols")));
    }
    if let Some(exchange) = opts.exchange.as_deref().filter(|e| !e.is_empty()) {
        let exchange = require_arg("exchange", exchange)?;
        return Ok(RequestSpec::new(format!("ref-data/exchange/{exchange}/symbols")));
    }
    Ok(RequestSpec::new("ref-data/region/us/symbols"))
}

#[derive(Deserialize)]
struct SymbolRow {
    symbol: String,
}

/// Narrows a listing request to the `symbol` field, as JSON.
fn listing(spec: RequestSpec) -> RequestSpec {
    spec.with_options(&StandardOptions {
        filter: Some("symbol".to_string()),
        format: Some(OutputFormat::Json),
    })
}

impl IexClient {
    /// # Errors
    ///
    /// Fails on an unsuccessful request.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, std_opts), err))]
    pub async fn symbols(&self, std_opts: &StandardOptions) -> Result<Payload, IexError> {
        self.execute(&symbols_request().with_options(std_opts)).await
    }

    /// # Errors
    ///
    /// Fails on an unsuccessful request.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, std_opts), err))]
    pub async fn otc_symbols(&self, std_opts: &StandardOptions) -> Result<Payload, IexError> {
        self.execute(&otc_symbols_request().with_options(std_opts)).await
    }

    /// # Errors
    ///
    /// Fails on an unsuccessful request.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, std_opts), err))]
    pub async fn mutual_fund_symbols(
        &self,
        std_opts: &StandardOptions,
    ) -> Result<Payload, IexError> {
        self.execute(&mutual_fund_symbols_request().with_options(std_opts))
            .await
    }

    /// # Errors
    ///
    /// Fails on an unsuccessful request.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, std_opts), err))]
    pub async fn international_symbols(
        &self,
        opts: &InternationalSymbolsOptions,
        std_opts: &StandardOptions,
    ) -> Result<Payload, IexError> {
        let spec = international_symbols_request(opts)?.with_options(std_opts);
        self.execute(&spec).await
    }

    /// Tickers only.
    ///
    /// # Errors
    ///
    /// Fails on an unsuccessful request or an unexpected payload.
    pub async fn symbols_list(&self) -> Result<Vec<String>, IexError> {
        self.fetch_symbol_list(symbols_request()).await
    }

    /// # Errors
    ///
    /// Fails on an unsuccessful request or an unexpected payload.
    pub async fn otc_symbols_list(&self) -> Result<Vec<String>, IexError> {
        self.fetch_symbol_list(otc_symbols_request()).await
    }

    /// # Errors
    ///
    /// Fails on an unsuccessful request or an unexpected payload.
    pub async fn mutual_fund_symbols_list(&self) -> Result<Vec<String>, IexError> {
        self.fetch_symbol_list(mutual_fund_symbols_request()).await
    }

    /// # Errors
    ///
    /// Fails on an unsuccessful request or an unexpected payload.
    pub async fn international_symbols_list(
        &self,
        opts: &InternationalSymbolsOptions,
    ) -> Result<Vec<String>, IexError> {
        self.fetch_symbol_list(international_symbols_request(opts)?).await
    }

    async fn fetch_symbol_list(&self, spec: RequestSpec) -> Result<Vec<String>, IexError> {
        let rows: Vec<SymbolRow> = self.execute(&listing(spec)).await?.deserialize()?;
        Ok(rows.into_iter().map(|r| r.symbol).collect())
    }
}
