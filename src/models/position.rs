//! Position models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Response of the account positions endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionsResponse {
    /// Open and recently closed positions
    #[serde(default)]
    pub positions: Vec<Position>,
}

/// A position in one security.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    /// Symbol
    pub symbol: String,
    /// Internal symbol identifier
    #[serde(default)]
    pub symbol_id: Option<i64>,
    /// Quantity currently held; negative for short positions
    #[serde(default)]
    pub open_quantity: Option<Decimal>,
    /// Quantity closed today
    #[serde(default)]
    pub closed_quantity: Option<Decimal>,
    /// Current market value
    #[serde(default)]
    pub current_market_value: Option<Decimal>,
    /// Current price
    #[serde(default)]
    pub current_price: Option<Decimal>,
    /// Average entry price
    #[serde(default)]
    pub average_entry_price: Option<Decimal>,
    /// Realized profit and loss
    #[serde(default)]
    pub closed_pnl: Option<Decimal>,
    /// Unrealized profit and loss
    #[serde(default)]
    pub open_pnl: Option<Decimal>,
    /// Total cost
    #[serde(default)]
    pub total_cost: Option<Decimal>,
    /// Whether the figures are real-time
    #[serde(default)]
    pub is_real_time: bool,
    /// Whether the security is under reorganization
    #[serde(default)]
    pub is_under_reorg: bool,
}

impl Position {
    /// Returns `true` if the position is short.
    pub fn is_short(&self) -> bool {
        self.open_quantity.is_some_and(|q| q.is_sign_negative() && !q.is_zero())
    }
}
