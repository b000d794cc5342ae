//! Resolution of token, API version and output format.
//!
//! Every client call is made against one immutable [`ClientConfig`] that is
//! resolved once, when the client is built.

use std::fmt;
use std::str::FromStr;

use crate::core::IexError;

/// Environment variable consulted when no token is passed explicitly.
pub const TOKEN_ENV: &str = "IEX_TOKEN";

/// Environment variable consulted by [`crate::IexClient::from_env`] for the API version.
pub const VERSION_ENV: &str = "IEX_VERSION";

/// Tokens issued for the sandbox environment start with this prefix.
pub const SANDBOX_TOKEN_PREFIX: &str = "T";

/// The API version segment requests are routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ApiVersion {
    Beta,
    Stable,
    #[default]
    V1,
    /// The non-production environment paired with test tokens.
    Sandbox,
}

impl ApiVersion {
    pub fn as_str(self) -> &'static str {
        match self {
            ApiVersion::Beta => "beta",
            ApiVersion::Stable => "stable",
            ApiVersion::V1 => "v1",
            ApiVersion::Sandbox => "sandbox",
        }
    }

    pub fn is_sandbox(self) -> bool {
        self == ApiVersion::Sandbox
    }
}

impl FromStr for ApiVersion {
    type Err = IexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beta" => Ok(ApiVersion::Beta),
            "stable" => Ok(ApiVersion::Stable),
            "v1" => Ok(ApiVersion::V1),
            "sandbox" => Ok(ApiVersion::Sandbox),
            other => Err(IexError::config(format!("Unrecognized api version: {other}"))),
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for ApiVersion {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Response encoding requested from the API.
///
/// `Json` bodies are decoded; `Csv` and `Binary` bodies are passed through as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
    Binary,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Binary => "binary",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = IexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "binary" => Ok(OutputFormat::Binary),
            other => Err(IexError::validation(format!(
                "Output format not recognized: {other}"
            ))),
        }
    }
}

/// Raw configuration input, before validation.
#[derive(Debug, Clone, Default)]
pub struct ConfigOptions {
    /// API token. Falls back to the `IEX_TOKEN` environment variable.
    pub api_token: Option<String>,
    /// One of `beta`, `stable`, `v1`, `sandbox`. Defaults to `v1`.
    pub version: Option<String>,
    /// Default response format for calls that do not override it.
    pub output_format: Option<OutputFormat>,
}

/// Validated, immutable configuration shared by every call of a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    token: String,
    version: ApiVersion,
    format: OutputFormat,
}

impl ClientConfig {
    /// Resolves options, falling back to `IEX_TOKEN` for a missing token.
    ///
    /// # Errors
    ///
    /// Returns [`IexError::Config`] if no token is available or the version is unknown.
    pub fn resolve(options: ConfigOptions) -> Result<Self, IexError> {
        Self::resolve_with_env(options, std::env::var(TOKEN_ENV).ok())
    }

    /// Same as [`ClientConfig::resolve`] with the environment token passed in explicitly.
    ///
    /// # Errors
    ///
    /// Returns [`IexError::Config`] if no token is available or the version is unknown.
    pub fn resolve_with_env(
        options: ConfigOptions,
        env_token: Option<String>,
    ) -> Result<Self, IexError> {
        let token = options
            .api_token
            .filter(|t| !t.is_empty())
            .or(env_token)
            .unwrap_or_default();
        if token.is_empty() {
            return Err(IexError::config(format!(
                "API Token missing or not in environment ({TOKEN_ENV})"
            )));
        }

        let requested = match options.version.as_deref() {
            Some(v) => v.parse::<ApiVersion>()?,
            None => ApiVersion::default(),
        };

        let version = coerce_version_for_token(&token, requested);
        if version != requested {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                requested = %requested,
                "Using test key but attempting to connect to non-sandbox environment. \
                 Switching to sandbox"
            );
        }

        Ok(Self {
            token,
            version,
            format: options.output_format.unwrap_or_default(),
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn version(&self) -> ApiVersion {
        self.version
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

/// Test tokens may only talk to the sandbox; any other requested version is replaced.
pub fn coerce_version_for_token(token: &str, requested: ApiVersion) -> ApiVersion {
    if token.starts_with(SANDBOX_TOKEN_PREFIX) && !requested.is_sandbox() {
        ApiVersion::Sandbox
    } else {
        requested
    }
}
