//! Server time service.

use std::sync::Arc;

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use crate::client::ClientInner;
use crate::models::ServerTime;
use crate::Result;

const TIME_PATH: &str = "time";

#[derive(Deserialize)]
struct ParsedServerTime {
    time: DateTime<FixedOffset>,
}

/// Service for the server clock.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: questrade_rs::QuestradeClient) -> questrade_rs::Result<()> {
/// let time = client.time().server_time().await?;
/// println!("Server time: {}", time);
/// # Ok(())
/// # }
/// ```
pub struct TimeService {
    inner: Arc<ClientInner>,
}

impl TimeService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the server time response.
    pub async fn get(&self) -> Result<ServerTime> {
        self.inner.get(&[TIME_PATH], &[]).await
    }

    /// Get the server time as the ISO-8601 string the server sent.
    pub async fn server_time(&self) -> Result<String> {
        Ok(self.get().await?.time)
    }

    /// Get the server time parsed with its UTC offset.
    ///
    /// A time string that does not parse is a decode error on `time`.
    pub async fn server_datetime(&self) -> Result<DateTime<FixedOffset>> {
        let parsed: ParsedServerTime = self.inner.get(&[TIME_PATH], &[]).await?;
        Ok(parsed.time)
    }
}
