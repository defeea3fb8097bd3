//! HTTP client implementation for the Questrade API.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Method;
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::api::{AccountsService, TimeService};
use crate::{Error, Result};

use super::config::ClientConfig;
use super::transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};

const API_VERSION: &str = "v1";
const ACCOUNTS_ROOT: &str = "accounts";

/// The main client for interacting with the Questrade API.
///
/// Cloning is cheap; clones share the same configuration and transport and
/// may be used from concurrent tasks.
///
/// # Example
///
/// ```no_run
/// use questrade_rs::{QuestradeClient, ClientConfig, AccountNumber};
///
/// # async fn example() -> questrade_rs::Result<()> {
/// let config = ClientConfig::new("https://api01.iq.questrade.com/", "access-token")?;
/// let client = QuestradeClient::new(config)?;
///
/// let response = client.accounts().list().await?;
/// if let Some(account) = response.accounts.first() {
///     let positions = client.accounts().positions(&account.number).await?;
///     println!("{} positions", positions.positions.len());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct QuestradeClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    transport: Arc<dyn Transport>,
    config: ClientConfig,
}

impl QuestradeClient {
    /// Create a client that talks to the network through reqwest.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(config, transport))
    }

    /// Create a client configured from `QT_API_SERVER` and `QT_ACCESS_TOKEN`.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Create a client with a custom [`Transport`].
    pub fn with_transport(config: ClientConfig, transport: impl Transport + 'static) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                transport: Arc::new(transport),
                config,
            }),
        }
    }

    /// Get the accounts service.
    pub fn accounts(&self) -> AccountsService {
        AccountsService::new(self.inner.clone())
    }

    /// Get the server time service.
    pub fn time(&self) -> TimeService {
        TimeService::new(self.inner.clone())
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }
}

impl ClientInner {
    /// Build the absolute URL for `segments` under `/v1/`.
    ///
    /// Empty, `.` and `..` segments are rejected: the URL would collapse them
    /// and silently address a different resource.
    fn endpoint_url(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Url> {
        if let Some(segment) = segments.iter().find(|s| matches!(**s, "" | "." | "..")) {
            return Err(Error::InvalidInput(format!(
                "'{}' cannot be used as a path segment",
                segment
            )));
        }

        let mut url = self.config.base_url().clone();
        url.path_segments_mut()
            .map_err(|_| Error::Config("API server URL cannot be used as a base".to_string()))?
            .pop_if_empty()
            .push(API_VERSION)
            .extend(segments);

        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }

    /// Build request headers with authentication.
    fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        let mut auth = HeaderValue::from_str(&format!(
            "Bearer {}",
            self.config.access_token().expose_secret()
        ))
        .map_err(|_| Error::Config("Access token is not a valid header value".to_string()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Ok(headers)
    }

    /// Issue an authenticated GET for `segments` and return the body of a
    /// 200 response.
    #[tracing::instrument(level = "debug", skip(self, segments, query), fields(path = %segments.join("/")))]
    async fn fetch(&self, segments: &[&str], query: &[(&str, String)]) -> Result<String> {
        let path = segments.join("/");
        let request = HttpRequest {
            method: Method::GET,
            url: self.endpoint_url(segments, query)?,
            headers: self.build_headers()?,
        };

        match self.transport.execute(request).await {
            Ok(response) => check_status(path, response),
            Err(source) => {
                tracing::warn!(path = %path, error = %source, "Questrade request failed");
                Err(Error::Transport { path, source })
            }
        }
    }

    /// Issue an authenticated GET for `segments` and classify the outcome.
    ///
    /// Only a 200 response is a success; its body is returned as parsed JSON
    /// without further inspection.
    pub(crate) async fn perform_query(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<Value> {
        self.get(segments, query).await
    }

    /// Issue a query against the `accounts` resource root.
    pub(crate) async fn perform_account_query(
        &self,
        relative: &[&str],
        query: &[(&str, String)],
    ) -> Result<Value> {
        self.perform_query(&account_segments(relative), query).await
    }

    /// Make a GET request and decode the payload.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<T> {
        let body = self.fetch(segments, query).await?;
        decode(segments, body)
    }

    /// Make a GET request under `accounts` and decode the payload.
    pub(crate) async fn get_account<T: DeserializeOwned>(
        &self,
        relative: &[&str],
        query: &[(&str, String)],
    ) -> Result<T> {
        self.get(&account_segments(relative), query).await
    }
}

fn account_segments<'a>(relative: &[&'a str]) -> Vec<&'a str> {
    let mut segments = Vec::with_capacity(relative.len() + 1);
    segments.push(ACCOUNTS_ROOT);
    segments.extend_from_slice(relative);
    segments
}

fn check_status(path: String, response: HttpResponse) -> Result<String> {
    if response.status != 200 {
        tracing::warn!(
            path = %path,
            status = response.status,
            body = %response.body,
            "Questrade API returned an error status"
        );
        return Err(Error::from_api_response(path, response.status, response.body));
    }
    Ok(response.body)
}

fn decode<T: DeserializeOwned>(segments: &[&str], body: String) -> Result<T> {
    serde_json::from_str(&body).map_err(|source| {
        let path = segments.join("/");
        tracing::warn!(path = %path, error = %source, "Questrade response could not be decoded");
        Error::Decode { path, source, body }
    })
}

impl std::fmt::Debug for QuestradeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuestradeClient")
            .field("config", &self.inner.config)
            .field("transport", &self.inner.transport)
            .finish()
    }
}
