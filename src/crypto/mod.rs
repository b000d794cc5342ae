//! Cryptocurrency book, price and quote snapshots.

use crate::core::request::{quote_symbols, require_symbol};
use crate::core::{IexClient, IexError, Payload, RequestSpec, StandardOptions};

fn crypto_request(symbol: &str, endpoint: &str) -> Result<RequestSpec, IexError> {
    let symbol = quote_symbols(require_symbol(symbol)?);
    Ok(RequestSpec::new(format!("crypto/{symbol}/{endpoint}")))
}

pub fn crypto_book_request(symbol: &str) -> Result<RequestSpec, IexError> {
    crypto_request(symbol, "book")
}

pub fn crypto_price_request(symbol: &str) -> Result<RequestSpec, IexError> {
    crypto_request(symbol, "price")
}

pub fn crypto_quote_request(symbol: &str) -> Result<RequestSpec, IexError> {
    crypto_request(symbol, "quote")
}

impl IexClient {
    /// Current snapshot of the book for a cryptocurrency, e.g. `BTCUSD`.
    ///
    /// # Errors
    ///
    /// Fails on an empty symbol or an unsuccessful request.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, std_opts), err))]
    pub async fn crypto_book(
        &self,
        symbol: &str,
        std_opts: &StandardOptions,
    ) -> Result<Payload, IexError> {
        self.execute(&crypto_book_request(symbol)?.with_options(std_opts))
            .await
    }

    /// # Errors
    ///
    /// Fails on an empty symbol or an unsuccessful request.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, std_opts), err))]
    pub async fn crypto_price(
        &self,
        symbol: &str,
        std_opts: &StandardOptions,
    ) -> Result<Payload, IexError> {
        self.execute(&crypto_price_request(symbol)?.with_options(std_opts))
            .await
    }

    /// # Errors
    ///
    /// Fails on an empty symbol or an unsuccessful request.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, std_opts), err))]
    pub async fn crypto_quote(
        &self,
        symbol: &str,
        std_opts: &StandardOptions,
    ) -> Result<Payload, IexError> {
        self.execute(&crypto_quote_request(symbol)?.with_options(std_opts))
            .await
    }
}
