//! Server time model.

use chrono::{DateTime, FixedOffset, ParseResult};
use serde::{Deserialize, Serialize};

/// Response of the server time endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerTime {
    /// Server time as an ISO-8601 string, exactly as sent
    pub time: String,
}

impl ServerTime {
    /// Parse the server time, keeping its UTC offset.
    pub fn to_datetime(&self) -> ParseResult<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.time)
    }
}
