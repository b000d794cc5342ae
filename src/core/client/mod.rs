//! Public client surface + builder.
//! Default endpoints and UA live in `constants`.

pub(crate) mod constants;

use std::time::Duration;

use crate::core::config::{ClientConfig, ConfigOptions, OutputFormat, VERSION_ENV};
use crate::core::{ApiVersion, IexError};
use crate::stream::SseEndpoints;
use constants::{
    DEFAULT_BASE_URL, DEFAULT_SANDBOX_URL, DEFAULT_SSE_BASE_URL, DEFAULT_SSE_SANDBOX_URL,
    USER_AGENT,
};
use reqwest::Client;
use url::Url;

/// Holds a configured HTTP client, the resolved [`ClientConfig`] and the API hosts.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct IexClient {
    http: Client,
    config: ClientConfig,
    base_url: Url,
    sandbox_url: Url,
    sse: SseEndpoints,
}

impl IexClient {
    /// Create a new builder.
    pub fn builder() -> IexClientBuilder {
        IexClientBuilder::default()
    }

    /// Builds a client from `IEX_TOKEN` and, if set, `IEX_VERSION`.
    ///
    /// # Errors
    ///
    /// Returns [`IexError::Config`] if the token is missing or the version is unknown.
    pub fn from_env() -> Result<Self, IexError> {
        let mut builder = Self::builder();
        if let Ok(v) = std::env::var(VERSION_ENV) {
            builder = builder.version(v);
        }
        builder.build()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn version(&self) -> ApiVersion {
        self.config.version()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn sse_endpoints(&self) -> &SseEndpoints {
        &self.sse
    }

    /// REST prefix for the configured version, ending in `/`.
    pub(crate) fn rest_prefix(&self) -> Result<Url, IexError> {
        if self.config.version().is_sandbox() {
            Ok(self.sandbox_url.clone())
        } else {
            Ok(self
                .base_url
                .join(&format!("{}/", self.config.version().as_str()))?)
        }
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct IexClientBuilder {
    token: Option<String>,
    version: Option<String>,
    output_format: Option<OutputFormat>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    base_url: Option<Url>,
    sandbox_url: Option<Url>,
    sse_base_url: Option<Url>,
    sse_sandbox_url: Option<Url>,
}

impl IexClientBuilder {
    /// API token. If not set, `IEX_TOKEN` is read at build time.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// One of `beta`, `stable`, `v1`, `sandbox`. Validated at build time.
    pub fn version(mut self, version: impl AsRef<str>) -> Self {
        self.version = Some(version.as_ref().to_string());
        self
    }

    /// Default response format for calls that do not override it.
    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    ///
    /// This also bounds the lifetime of streaming sessions, so leave it unset
    /// for clients that subscribe to SSE feeds.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Override the production REST host (e.g., `https://cloud.iexapis.com/`).
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Override the sandbox REST prefix (e.g., `https://sandbox.iexapis.com/stable/`).
    pub fn sandbox_url(mut self, url: Url) -> Self {
        self.sandbox_url = Some(url);
        self
    }

    /// Override the production SSE host (e.g., `https://cloud-sse.iexapis.com/`).
    pub fn sse_base_url(mut self, url: Url) -> Self {
        self.sse_base_url = Some(url);
        self
    }

    /// Override the sandbox SSE prefix (e.g., `https://sandbox-sse.iexapis.com/stable/`).
    pub fn sse_sandbox_url(mut self, url: Url) -> Self {
        self.sse_sandbox_url = Some(url);
        self
    }

    /// Resolves the configuration and builds the HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`IexError::Config`] for a missing token or unknown version, and
    /// [`IexError::Request`] if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<IexClient, IexError> {
        let config = ClientConfig::resolve(ConfigOptions {
            api_token: self.token,
            version: self.version,
            output_format: self.output_format,
        })?;

        let base_url = with_trailing_slash(self.base_url.unwrap_or(Url::parse(DEFAULT_BASE_URL)?));
        let sandbox_url =
            with_trailing_slash(self.sandbox_url.unwrap_or(Url::parse(DEFAULT_SANDBOX_URL)?));
        let sse = SseEndpoints {
            base: with_trailing_slash(
                self.sse_base_url
                    .unwrap_or(Url::parse(DEFAULT_SSE_BASE_URL)?),
            ),
            sandbox: with_trailing_slash(
                self.sse_sandbox_url
                    .unwrap_or(Url::parse(DEFAULT_SSE_SANDBOX_URL)?),
            ),
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(IexClient {
            http,
            config,
            base_url,
            sandbox_url,
            sse,
        })
    }
}

/// `Url::join` replaces the last segment unless the base ends in `/`.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
