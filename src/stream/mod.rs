//! Server-sent-event feeds.
//!
//! A subscription is described with a [`StreamBuilder`], validated and
//! resolved into a [`StreamTarget`], and then opened as a background task that
//! hands each event to a channel or a callback.
//!
//! ```no_run
//! # use iex_rs::IexClient;
//! # #[tokio::main]
//! # async fn main() -> Result<(), iex_rs::IexError> {
//! let client = IexClient::builder().token("pk_xxx").build()?;
//! let (handle, mut rx) = client.tops_sse(["AAPL", "MSFT"]).no_snapshot(true).start()?;
//! while let Some(ev) = rx.recv().await {
//!     println!("{}", ev.data);
//! }
//! handle.stop().await?;
//! # Ok(())
//! # }
//! ```

mod session;
mod sse;
mod target;

pub use session::{StreamBuilder, StreamHandle};
pub use sse::{MAX_LINE_BYTES, SseDecoder, StreamEvent};
pub use target::{DEEP, DeepChannel, Scheme, SseEndpoints, StreamTarget, resolve_stream_target};

use crate::core::IexClient;

/// Feed names accepted by [`IexClient::stream`].
pub mod feeds {
    pub const TOPS: &str = "tops";
    pub const LAST: &str = "last";
    pub const DEEP: &str = super::DEEP;
    pub const AUCTION: &str = "auction";
    pub const BOOK: &str = "book";
    pub const OP_HALT_STATUS: &str = "op-halt-status";
    pub const OFFICIAL_PRICE: &str = "official-price";
    pub const SECURITY_EVENT: &str = "security-event";
    pub const SSR_STATUS: &str = "ssr-status";
    pub const SYSTEM_EVENT: &str = "system-event";
    pub const TRADE_BREAKS: &str = "trade-breaks";
    pub const TRADING_STATUS: &str = "trading-status";
    pub const FOREX: &str = "forex";
    pub const FOREX_1_SECOND: &str = "forex1Second";
    pub const FOREX_5_SECOND: &str = "forex5Second";
    pub const FOREX_1_MINUTE: &str = "forex1Minute";
}

/// Update cadence of the foreign exchange feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FxFeed {
    #[default]
    RealTime,
    OneSecond,
    FiveSecond,
    OneMinute,
}

impl FxFeed {
    pub fn as_str(self) -> &'static str {
        match self {
            FxFeed::RealTime => feeds::FOREX,
            FxFeed::OneSecond => feeds::FOREX_1_SECOND,
            FxFeed::FiveSecond => feeds::FOREX_5_SECOND,
            FxFeed::OneMinute => feeds::FOREX_1_MINUTE,
        }
    }
}

impl IexClient {
    /// A subscription to any flat feed by name, e.g. `"tops"`.
    pub fn stream(&self, method: impl Into<String>) -> StreamBuilder {
        StreamBuilder::new(self, method)
    }

    fn flat_feed<I, S>(&self, method: &str, symbols: I) -> StreamBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StreamBuilder::new(self, method).symbols(symbols)
    }

    /// Aggregated best bid and offer plus last sale.
    pub fn tops_sse<I, S>(&self, symbols: I) -> StreamBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.flat_feed(feeds::TOPS, symbols)
    }

    /// Last sale price, size and time.
    pub fn last_sse<I, S>(&self, symbols: I) -> StreamBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.flat_feed(feeds::LAST, symbols)
    }

    /// Depth of book over the multiplexed feed, restricted to `channels`.
    pub fn deep_sse<I, S, C, T>(&self, symbols: I, channels: C) -> StreamBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        C: IntoIterator<Item = T>,
        T: Into<String>,
    {
        StreamBuilder::new(self, DEEP)
            .symbols(symbols)
            .channels(channels)
    }

    /// Trade reports, delivered over the `deep` feed's `trades` channel.
    pub fn trades_sse<I, S>(&self, symbols: I) -> StreamBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.deep_sse(symbols, [DeepChannel::Trades.as_str()])
    }

    pub fn auction_sse<I, S>(&self, symbols: I) -> StreamBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.flat_feed(feeds::AUCTION, symbols)
    }

    pub fn book_sse<I, S>(&self, symbols: I) -> StreamBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.flat_feed(feeds::BOOK, symbols)
    }

    pub fn op_halt_status_sse<I, S>(&self, symbols: I) -> StreamBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.flat_feed(feeds::OP_HALT_STATUS, symbols)
    }

    pub fn official_price_sse<I, S>(&self, symbols: I) -> StreamBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.flat_feed(feeds::OFFICIAL_PRICE, symbols)
    }

    pub fn security_event_sse<I, S>(&self, symbols: I) -> StreamBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.flat_feed(feeds::SECURITY_EVENT, symbols)
    }

    pub fn ssr_status_sse<I, S>(&self, symbols: I) -> StreamBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.flat_feed(feeds::SSR_STATUS, symbols)
    }

    pub fn system_event_sse<I, S>(&self, symbols: I) -> StreamBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.flat_feed(feeds::SYSTEM_EVENT, symbols)
    }

    pub fn trade_breaks_sse<I, S>(&self, symbols: I) -> StreamBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.flat_feed(feeds::TRADE_BREAKS, symbols)
    }

    pub fn trading_status_sse<I, S>(&self, symbols: I) -> StreamBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.flat_feed(feeds::TRADING_STATUS, symbols)
    }

    /// Real-time currency exchange rates at the given cadence.
    pub fn fx_sse<I, S>(&self, symbols: I, feed: FxFeed) -> StreamBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.flat_feed(feed.as_str(), symbols)
    }
}
