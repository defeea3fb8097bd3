//! Error types for the Questrade API client.
//!
//! Every operation returns [`Result`]. A failed query is always an [`Error`]
//! naming the resource path it was issued against; it never degrades into an
//! empty success.

use serde_json::Value;
use thiserror::Error;

use crate::client::TransportError;

/// A specialized `Result` type for Questrade operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request never produced an HTTP response.
    Transport,
    /// The server answered with a status other than 200.
    Protocol,
    /// The response body could not be decoded.
    Decode,
    /// The client was misconfigured or given unusable input.
    Config,
}

/// The main error type for all Questrade API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Connection could not be established or was interrupted
    #[error("Transport error on {path}: {source}")]
    Transport {
        /// Resource path of the failed request
        path: String,
        /// Underlying transport failure
        #[source]
        source: TransportError,
    },

    /// API returned a non-200 response
    #[error("API error on {path}: status={status}, code={code:?}, message={message}")]
    Api {
        /// Resource path of the failed request
        path: String,
        /// HTTP status code
        status: u16,
        /// Questrade error code, when the body carries one
        code: Option<i64>,
        /// Human-readable error message
        message: String,
        /// Raw response body for debugging
        body: String,
    },

    /// Response body was not the expected JSON shape
    #[error("Decode error on {path}: {source}")]
    Decode {
        /// Resource path of the failed request
        path: String,
        /// Parse failure
        #[source]
        source: serde_json::Error,
        /// Raw response body for debugging
        body: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl Error {
    /// Classify this error.
    ///
    /// # Example
    ///
    /// ```
    /// use questrade_rs::{Error, ErrorKind};
    ///
    /// fn describe(err: &Error) -> &'static str {
    ///     match err.kind() {
    ///         ErrorKind::Transport => "server unreachable",
    ///         ErrorKind::Protocol => "server rejected the request",
    ///         ErrorKind::Decode => "unexpected response",
    ///         ErrorKind::Config => "client misconfigured",
    ///     }
    /// }
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Transport { .. } => ErrorKind::Transport,
            Error::Api { .. } => ErrorKind::Protocol,
            Error::Decode { .. } => ErrorKind::Decode,
            Error::Config(_) | Error::InvalidInput(_) | Error::UrlParse(_) => ErrorKind::Config,
        }
    }

    /// The resource path the failed request targeted, if one was issued.
    pub fn path(&self) -> Option<&str> {
        match self {
            Error::Transport { path, .. } | Error::Api { path, .. } | Error::Decode { path, .. } => {
                Some(path)
            }
            _ => None,
        }
    }

    /// The HTTP status code, for protocol errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if the server refused the access token.
    pub fn is_auth_error(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }

    /// Returns `true` if this error indicates a client-side issue
    /// (bad request, misconfiguration, etc.).
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => (400..500).contains(status),
            Error::Config(_) | Error::InvalidInput(_) | Error::UrlParse(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Create an API error from a non-200 response.
    ///
    /// Questrade reports failures as `{"code": 1017, "message": "..."}`;
    /// other bodies are kept verbatim with a generic message.
    pub(crate) fn from_api_response(path: impl Into<String>, status: u16, body: String) -> Self {
        let parsed: Option<Value> = serde_json::from_str(&body).ok();

        let code = parsed
            .as_ref()
            .and_then(|b| b.get("code"))
            .and_then(|c| c.as_i64());

        let message = parsed
            .as_ref()
            .and_then(|b| b.get("message"))
            .and_then(|m| m.as_str())
            .unwrap_or("Unknown API error")
            .to_string();

        Error::Api {
            path: path.into(),
            status,
            code,
            message,
            body,
        }
    }
}
