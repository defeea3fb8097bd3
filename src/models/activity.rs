//! Account activity models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::Currency;

/// Response of the account activities endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitiesResponse {
    /// Activities in the requested window
    #[serde(default)]
    pub activities: Vec<Activity>,
}

/// A single account activity (trade, dividend, deposit, interest, ...).
///
/// Dates are kept as the ISO-8601 strings the server sends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Trade date
    #[serde(default)]
    pub trade_date: Option<String>,
    /// Transaction date
    #[serde(default)]
    pub transaction_date: Option<String>,
    /// Settlement date
    #[serde(default)]
    pub settlement_date: Option<String>,
    /// Activity action (e.g., "Buy", "Sell")
    #[serde(default)]
    pub action: Option<String>,
    /// Symbol, if the activity concerns a security
    #[serde(default)]
    pub symbol: Option<String>,
    /// Internal symbol identifier
    #[serde(default)]
    pub symbol_id: Option<i64>,
    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
    /// Currency of the amounts
    #[serde(default)]
    pub currency: Option<Currency>,
    /// Quantity
    #[serde(default)]
    pub quantity: Option<Decimal>,
    /// Price
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Gross amount
    #[serde(default)]
    pub gross_amount: Option<Decimal>,
    /// Commission
    #[serde(default)]
    pub commission: Option<Decimal>,
    /// Net amount
    #[serde(default)]
    pub net_amount: Option<Decimal>,
    /// Activity type (e.g., "Trades", "Dividends", "Interest")
    #[serde(rename = "type", default)]
    pub activity_type: Option<String>,
}
