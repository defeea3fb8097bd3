//! Transport seam between the request core and the network.
//!
//! The core builds a complete [`HttpRequest`] (URL and credentials included)
//! and hands it to a [`Transport`]. [`ReqwestTransport`] is the production
//! implementation; tests plug in their own.

use std::fmt;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::Method;
use thiserror::Error;
use url::Url;

use super::config::ClientConfig;
use crate::{Error, Result};

/// A fully built outbound request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute request URL
    pub url: Url,
    /// Request headers, including `Authorization`
    pub headers: HeaderMap,
}

/// A response as seen by the request core: status and raw body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body
    pub body: String,
}

impl HttpResponse {
    /// Create a response from a status code and body.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Failure to obtain any HTTP response at all.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Lower-level HTTP client failure (TLS, protocol, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Connection could not be established (refused, DNS failure)
    #[error("Connection failed: {0}")]
    Connect(String),

    /// Request timed out
    #[error("Request timeout")]
    Timeout,
}

impl TransportError {
    fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Connect(error_chain(&err))
        } else {
            TransportError::Http(err)
        }
    }
}

// reqwest's own Display hides the OS-level cause ("Connection refused").
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Executes requests built by the client.
///
/// Implementations must not retry, cache, or alter the request; the core
/// relies on one call producing exactly one attempt.
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    /// Send `request` and return the status and body of the response.
    async fn execute(
        &self,
        request: HttpRequest,
    ) -> std::result::Result<HttpResponse, TransportError>;
}

/// [`Transport`] backed by a [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport using the user agent and timeout from `config`.
    ///
    /// Without an explicit timeout the reqwest default applies.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { http })
    }

    /// Wrap an existing [`reqwest::Client`].
    pub fn from_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(
        &self,
        request: HttpRequest,
    ) -> std::result::Result<HttpResponse, TransportError> {
        let response = self
            .http
            .request(request.method, request.url)
            .headers(request.headers)
            .send()
            .await
            .map_err(TransportError::from_reqwest)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(TransportError::from_reqwest)?;
        Ok(HttpResponse { status, body })
    }
}
