//! Listed options: expirations and end-of-day chains.

use std::str::FromStr;

use crate::core::request::{quote_symbols, require_arg, require_symbol};
use crate::core::{IexClient, IexError, Payload, RequestSpec, StandardOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionSide {
    Call,
    Put,
}

impl OptionSide {
    pub fn as_str(self) -> &'static str {
        match self {
            OptionSide::Call => "call",
            OptionSide::Put => "put",
        }
    }
}

impl FromStr for OptionSide {
    type Err = IexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "call" => Ok(OptionSide::Call),
            "put" => Ok(OptionSide::Put),
            _ => Err(IexError::validation(format!("Option side not recognized: {s}"))),
        }
    }
}

/// Expiration dates available for `symbol`.
pub fn option_expirations_request(symbol: &str) -> Result<RequestSpec, IexError> {
    let symbol = quote_symbols(require_symbol(symbol)?);
    Ok(RequestSpec::new(format!("stock/{symbol}/options")))
}

/// The chain for one expiration (`YYYYMM` or `YYYYMMDD`), optionally one side only.
pub fn stock_options_request(
    symbol: &str,
    expiration: &str,
    side: Option<OptionSide>,
) -> Result<RequestSpec, IexError> {
    let symbol = quote_symbols(require_symbol(symbol)?);
    let expiration = require_arg("expiration", expiration)?;
    Ok(match side {
        Some(side) => RequestSpec::new(format!(
            "stock/{symbol}/options/{expiration}/{}",
            side.as_str()
        )),
        None => RequestSpec::new(format!("stock/{symbol}/options/{expiration}")),
    })
}

impl IexClient {
    /// # Errors
    ///
    /// Fails on an empty symbol or an unsuccessful request.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, std_opts), err))]
    pub async fn option_expirations(
        &self,
        symbol: &str,
        std_opts: &StandardOptions,
    ) -> Result<Payload, IexError> {
        self.execute(&option_expirations_request(symbol)?.with_options(std_opts))
            .await
    }

    /// # Errors
    ///
    /// Fails on an empty symbol or expiration, or an unsuccessful request.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, std_opts), err))]
    pub async fn stock_options(
        &self,
        symbol: &str,
        expiration: &str,
        side: Option<OptionSide>,
        std_opts: &StandardOptions,
    ) -> Result<Payload, IexError> {
        self.execute(&stock_options_request(symbol, expiration, side)?.with_options(std_opts))
            .await
    }
}
