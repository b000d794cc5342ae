//! Centralized constants for default endpoints and UA.

pub(crate) const USER_AGENT: &str = concat!("iex-rs/", env!("CARGO_PKG_VERSION"));

/// Production REST host; the version segment is appended per call.
pub(crate) const DEFAULT_BASE_URL: &str = "https://cloud.iexapis.com/";

/// Sandbox REST prefix. The sandbox only serves the `stable` version.
pub(crate) const DEFAULT_SANDBOX_URL: &str = "https://sandbox.iexapis.com/stable/";

/// Production SSE host; the version segment is appended per subscription.
pub(crate) const DEFAULT_SSE_BASE_URL: &str = "https://cloud-sse.iexapis.com/";

/// Sandbox SSE prefix.
pub(crate) const DEFAULT_SSE_SANDBOX_URL: &str = "https://sandbox-sse.iexapis.com/stable/";
