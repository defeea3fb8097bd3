//! HTTP client and request core for the Questrade API.
//!
//! This module provides the main entry point [`QuestradeClient`], its
//! [`ClientConfig`], and the [`Transport`] seam requests are sent through.
//!
//! # Example
//!
//! ```no_run
//! use questrade_rs::QuestradeClient;
//!
//! # async fn example() -> questrade_rs::Result<()> {
//! // Reads QT_API_SERVER and QT_ACCESS_TOKEN
//! let client = QuestradeClient::from_env()?;
//!
//! let time = client.time().server_time().await?;
//! println!("Server time: {}", time);
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
mod transport;

pub use config::{ClientConfig, ACCESS_TOKEN_VAR, API_SERVER_VAR, USER_AGENT_VAR};
pub use http::QuestradeClient;
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport, TransportError};
pub(crate) use http::ClientInner;
