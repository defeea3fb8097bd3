//! Balance models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::Currency;

/// Response of the account balances endpoint.
///
/// Balances are reported per currency and combined (converted into each
/// currency), both live and as of start of day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalancesResponse {
    /// Live balances per currency
    #[serde(default)]
    pub per_currency_balances: Vec<Balance>,
    /// Live balances combined across currencies
    #[serde(default)]
    pub combined_balances: Vec<Balance>,
    /// Start-of-day balances per currency
    #[serde(default)]
    pub sod_per_currency_balances: Vec<Balance>,
    /// Start-of-day balances combined across currencies
    #[serde(default)]
    pub sod_combined_balances: Vec<Balance>,
}

impl BalancesResponse {
    /// The live combined balance expressed in `currency`.
    pub fn combined_in(&self, currency: Currency) -> Option<&Balance> {
        self.combined_balances
            .iter()
            .find(|b| b.currency == Some(currency))
    }

    /// The live balance held in `currency`.
    pub fn per_currency(&self, currency: Currency) -> Option<&Balance> {
        self.per_currency_balances
            .iter()
            .find(|b| b.currency == Some(currency))
    }
}

/// Balance in one currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    /// Currency of the amounts
    #[serde(default)]
    pub currency: Option<Currency>,
    /// Cash balance
    #[serde(default)]
    pub cash: Option<Decimal>,
    /// Market value of all securities
    #[serde(default)]
    pub market_value: Option<Decimal>,
    /// Cash plus market value
    #[serde(default)]
    pub total_equity: Option<Decimal>,
    /// Buying power
    #[serde(default)]
    pub buying_power: Option<Decimal>,
    /// Maintenance excess
    #[serde(default)]
    pub maintenance_excess: Option<Decimal>,
    /// Whether the figures are real-time
    #[serde(default)]
    pub is_real_time: bool,
}
