//! Upcoming estimates, dividends, splits and IPOs.

use crate::core::request::{normalize_opt_date, normalize_symbols, quote_symbols};
use crate::core::{DateArg, IexClient, IexError, Payload, Query, RequestSpec, StandardOptions};
use crate::stream::Scheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpcomingEvent {
    /// Every event kind.
    #[default]
    Events,
    Earnings,
    Dividends,
    Splits,
    Ipos,
}

impl UpcomingEvent {
    pub fn as_str(self) -> &'static str {
        match self {
            UpcomingEvent::Events => "events",
            UpcomingEvent::Earnings => "earnings",
            UpcomingEvent::Dividends => "dividends",
            UpcomingEvent::Splits => "splits",
            UpcomingEvent::Ipos => "ipos",
        }
    }
}

/// Builds an upcoming-events request for zero, one or many symbols.
///
/// - none: `stock/market/upcoming-{event}`
/// - one: `stock/{symbol}/upcoming-{event}`
/// - many: `stock/market/upcoming-{event}?symbols=A,B`
///
/// `exact_date` is appended after `symbols` when present, otherwise it is the
/// first query parameter.
///
/// # Errors
///
/// Returns [`IexError::Validation`] for an unparsable date.
pub fn upcoming_request<S: AsRef<str>>(
    event: UpcomingEvent,
    symbols: &[S],
    exact_date: Option<&DateArg>,
) -> Result<RequestSpec, IexError> {
    let symbols = normalize_symbols(symbols);
    let exact_date = normalize_opt_date(exact_date)?;
    let event = event.as_str();
    let joined = quote_symbols(&symbols.join(","));

    let mut q = Query::new();
    let path = match Scheme::for_count(symbols.len()) {
        Scheme::FullMarket => format!("stock/market/upcoming-{event}"),
        Scheme::SingleSymbol => format!("stock/{joined}/upcoming-{event}"),
        Scheme::MultiSymbol => {
            q.raw("symbols", &joined);
            format!("stock/market/upcoming-{event}")
        }
    };
    q.text("exactDate", exact_date.as_deref());

    Ok(RequestSpec::new(path).with_query(q))
}

impl IexClient {
    /// Upcoming events of one kind for the given symbols, or the whole market.
    ///
    /// # Errors
    ///
    /// Fails on an unparsable date or an unsuccessful request.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, symbols, std_opts), err))]
    pub async fn upcoming<S: AsRef<str>>(
        &self,
        event: UpcomingEvent,
        symbols: &[S],
        exact_date: Option<&DateArg>,
        std_opts: &StandardOptions,
    ) -> Result<Payload, IexError> {
        let spec = upcoming_request(event, symbols, exact_date)?.with_options(std_opts);
        self.execute(&spec).await
    }

    /// # Errors
    ///
    /// See [`IexClient::upcoming`].
    pub async fn upcoming_events<S: AsRef<str>>(
        &self,
        symbols: &[S],
        exact_date: Option<&DateArg>,
        std_opts: &StandardOptions,
    ) -> Result<Payload, IexError> {
        self.upcoming(UpcomingEvent::Events, symbols, exact_date, std_opts).await
    }

    /// # Errors
    ///
    /// See [`IexClient::upcoming`].
    pub async fn upcoming_earnings<S: AsRef<str>>(
        &self,
        symbols: &[S],
        exact_date: Option<&DateArg>,
        std_opts: &StandardOptions,
    ) -> Result<Payload, IexError> {
        self.upcoming(UpcomingEvent::Earnings, symbols, exact_date, std_opts).await
    }

    /// # Errors
    ///
    /// See [`IexClient::upcoming`].
    pub async fn upcoming_dividends<S: AsRef<str>>(
        &self,
        symbols: &[S],
        exact_date: Option<&DateArg>,
        std_opts: &StandardOptions,
    ) -> Result<Payload, IexError> {
        self.upcoming(UpcomingEvent::Dividends, symbols, exact_date, std_opts).await
    }

    /// # Errors
    ///
    /// See [`IexClient::upcoming`].
    pub async fn upcoming_splits<S: AsRef<str>>(
        &self,
        symbols: &[S],
        exact_date: Option<&DateArg>,
        std_opts: &StandardOptions,
    ) -> Result<Payload, IexError> {
        self.upcoming(UpcomingEvent::Splits, symbols, exact_date, std_opts).await
    }

    /// # Errors
    ///
    /// See [`IexClient::upcoming`].
    pub async fn upcoming_ipos<S: AsRef<str>>(
        &self,
        symbols: &[S],
        exact_date: Option<&DateArg>,
        std_opts: &StandardOptions,
    ) -> Result<Payload, IexError> {
        self.upcoming(UpcomingEvent::Ipos, symbols, exact_date, std_opts).await
    }
}
