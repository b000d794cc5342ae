//! Core components of the `iex-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`IexClient`] and its builder.
//! - Configuration resolution and the sandbox token policy.
//! - The URL / query builder and the REST dispatcher.
//! - The primary [`IexError`] type.

/// The main client (`IexClient`) and builder.
pub mod client;
/// Token, version and output-format resolution.
pub mod config;
/// The primary error type (`IexError`) for the crate.
pub mod error;
/// Decoded response bodies.
pub mod models;
/// Request paths, sparse query parameters and argument normalization.
pub mod request;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::IexClient`
pub use client::{IexClient, IexClientBuilder};
pub use config::{ApiVersion, ClientConfig, ConfigOptions, OutputFormat, coerce_version_for_token};
pub use error::IexError;
pub use models::Payload;
pub use request::{DateArg, Query, RequestSpec, StandardOptions};
