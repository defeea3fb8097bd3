//! Account models.

use serde::{Deserialize, Serialize};

use super::enums::{AccountStatus, AccountType, ClientAccountType};
use super::primitives::AccountNumber;

/// Response of the account list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountsResponse {
    /// Accounts visible to the access token
    pub accounts: Vec<Account>,
    /// Internal identifier of the user owning the token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

/// A trading account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Account number
    pub number: AccountNumber,
    /// Account type (e.g., Margin, TFSA)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<AccountType>,
    /// Account status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AccountStatus>,
    /// Whether this is the primary account of the holder
    #[serde(default)]
    pub is_primary: bool,
    /// Whether fees are billed to this account
    #[serde(default)]
    pub is_billing: bool,
    /// Ownership type of the account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_account_type: Option<ClientAccountType>,
}
