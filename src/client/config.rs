//! Client configuration options.

use std::env;
use std::time::Duration;

use reqwest::header::HeaderValue;
use secrecy::SecretString;
use url::Url;

use crate::{Error, Result};

/// Environment variable holding the API server base URL.
pub const API_SERVER_VAR: &str = "QT_API_SERVER";
/// Environment variable holding the bearer access token.
pub const ACCESS_TOKEN_VAR: &str = "QT_ACCESS_TOKEN";
/// Optional environment variable overriding the User-Agent header.
pub const USER_AGENT_VAR: &str = "QT_USER_AGENT";

/// Configuration for the Questrade client.
///
/// Immutable once handed to a [`QuestradeClient`](crate::QuestradeClient).
/// The access token is kept in a [`SecretString`] and never appears in
/// `Debug` output.
///
/// # Example
///
/// ```
/// use questrade_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new("https://api01.iq.questrade.com/", "access-token")?
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// # Ok::<(), questrade_rs::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: Url,
    access_token: SecretString,
    /// User-Agent header value
    pub user_agent: String,
    /// Request timeout; `None` leaves the transport default in place
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Create a configuration from the API server URL and access token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UrlParse`] if `base_url` is not a URL, and
    /// [`Error::Config`] if it cannot carry a path, or if the token is empty or
    /// cannot be sent in an `Authorization` header.
    pub fn new(base_url: impl AsRef<str>, access_token: impl Into<String>) -> Result<Self> {
        let base_url = Url::parse(base_url.as_ref().trim())?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "API server URL cannot be used as a base: {}",
                base_url
            )));
        }

        let access_token = access_token.into();
        if access_token.trim().is_empty() {
            return Err(Error::Config("Access token is empty".to_string()));
        }
        if HeaderValue::from_str(&format!("Bearer {}", access_token)).is_err() {
            return Err(Error::Config(
                "Access token is not a valid header value".to_string(),
            ));
        }

        Ok(Self {
            base_url,
            access_token: SecretString::from(access_token),
            user_agent: format!("questrade-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
            timeout: None,
        })
    }

    /// Create configuration from environment variables.
    ///
    /// Expected environment variables:
    /// - `QT_API_SERVER`: API server base URL
    /// - `QT_ACCESS_TOKEN`: bearer access token
    /// - `QT_USER_AGENT` (optional)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Create configuration from a `.env` file and environment variables.
    ///
    /// A missing file is not an error; the process environment is used as is.
    #[cfg(feature = "env-file")]
    pub fn from_env_file(env_file_path: &str) -> Result<Self> {
        match dotenv::from_path(env_file_path) {
            Ok(()) => {}
            Err(dotenv::Error::Io(io_err)) if io_err.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(Error::Config(format!(
                    "Failed to load .env file '{}': {}",
                    env_file_path, e
                )));
            }
        }

        Self::from_env()
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |name: &str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| Error::Config(format!("Missing environment variable {}", name)))
        };

        let mut config = Self::new(required(API_SERVER_VAR)?, required(ACCESS_TOKEN_VAR)?)?;
        if let Some(user_agent) = lookup(USER_AGENT_VAR) {
            config.user_agent = user_agent;
        }
        Ok(config)
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// The API server base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn access_token(&self) -> &SecretString {
        &self.access_token
    }
}
