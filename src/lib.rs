//! iex-rs: a client for the IEX Cloud REST and streaming APIs.
//!
//! Every REST endpoint has two halves: a pure `*_request` function that
//! validates its arguments and produces a [`RequestSpec`], and an async method
//! on [`IexClient`] that sends it. The pure half is handy for inspecting the
//! exact path and query a call will use.
//!
//! ```no_run
//! use iex_rs::{IexClient, StandardOptions};
//! use iex_rs::stocks::ChartOptions;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), iex_rs::IexError> {
//! let client = IexClient::builder().token("pk_xxx").build()?;
//! let bars = client
//!     .chart(&ChartOptions::new("AAPL").range("5d"), &StandardOptions::default())
//!     .await?;
//! println!("{:?}", bars.as_json());
//! # Ok(())
//! # }
//! ```
//!
//! Live data is delivered over server-sent events; see [`stream`].

pub mod core;

/// Cryptocurrency snapshots.
pub mod crypto;
/// Upcoming corporate events.
pub mod events;
/// Foreign exchange rates.
pub mod fx;
/// Listed options.
pub mod options;
/// Premium data sets.
pub mod premium;
/// Reference data.
pub mod refdata;
/// Equity endpoints: charts, previous day, short interest and more.
pub mod stocks;
/// Server-sent-event subscriptions.
pub mod stream;
/// Generic time series access.
pub mod timeseries;

pub use crate::core::{
    ApiVersion, ClientConfig, ConfigOptions, DateArg, IexClient, IexClientBuilder, IexError,
    OutputFormat, Payload, Query, RequestSpec, StandardOptions, coerce_version_for_token,
};
pub use premium::{Premium, WallStreetHorizon};
pub use stream::{
    DeepChannel, FxFeed, Scheme, StreamBuilder, StreamEvent, StreamHandle, StreamTarget,
};
pub use timeseries::{TimeSeriesArgs, TimeSeriesOptions};

/// Installs a `fmt` subscriber honoring `RUST_LOG`, for tests and examples.
///
/// Calling it more than once is harmless.
#[cfg(feature = "tracing-subscriber")]
pub fn init_tracing_for_tests() {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
