use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum IexError {
    /// The client could not be configured (missing token, unknown API version).
    #[error("configuration error: {0}")]
    Config(String),

    /// A call was rejected locally before any request was sent.
    #[error("invalid argument: {0}")]
    Validation(String),

    /// The server returned a non-success HTTP status code.
    #[error("unexpected response status {status} at {url}: {body}")]
    Http {
        /// The HTTP status code.
        status: u16,
        /// The raw response body.
        body: String,
        /// The requested URL, with the token redacted.
        url: String,
    },

    /// A streaming connection failed or was cut off by the transport.
    #[error("stream transport error: {0}")]
    Transport(String),

    /// An error occurred while sending an HTTP request.
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The payload could not be decoded into the requested shape.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),
}

impl IexError {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        IexError::Validation(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        IexError::Config(msg.into())
    }
}
