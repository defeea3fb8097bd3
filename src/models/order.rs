//! Order and execution models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{OrderSide, OrderState, OrderType, TimeInForce};

/// Response of the account orders endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersResponse {
    /// Orders matching the query
    #[serde(default)]
    pub orders: Vec<Order>,
}

/// An order placed in an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order identifier
    pub id: i64,
    /// Symbol
    #[serde(default)]
    pub symbol: Option<String>,
    /// Internal symbol identifier
    #[serde(default)]
    pub symbol_id: Option<i64>,
    /// Total quantity of the order
    #[serde(default)]
    pub total_quantity: Option<Decimal>,
    /// Quantity still open
    #[serde(default)]
    pub open_quantity: Option<Decimal>,
    /// Quantity filled
    #[serde(default)]
    pub filled_quantity: Option<Decimal>,
    /// Quantity cancelled
    #[serde(default)]
    pub canceled_quantity: Option<Decimal>,
    /// Order side
    #[serde(default)]
    pub side: Option<OrderSide>,
    /// Order type
    #[serde(rename = "type", default)]
    pub order_type: Option<OrderType>,
    /// Limit price
    #[serde(default)]
    pub limit_price: Option<Decimal>,
    /// Stop price
    #[serde(default)]
    pub stop_price: Option<Decimal>,
    /// Average execution price
    #[serde(default)]
    pub avg_exec_price: Option<Decimal>,
    /// Last execution price
    #[serde(default)]
    pub last_exec_price: Option<Decimal>,
    /// Time in force
    #[serde(default)]
    pub time_in_force: Option<TimeInForce>,
    /// Current state
    #[serde(default)]
    pub state: Option<OrderState>,
    /// Identifier of the first order in a replace chain
    #[serde(default)]
    pub chain_id: Option<i64>,
    /// Creation time (ISO-8601)
    #[serde(default)]
    pub creation_time: Option<String>,
    /// Last update time (ISO-8601)
    #[serde(default)]
    pub update_time: Option<String>,
    /// Notes attached to the order
    #[serde(default)]
    pub notes: Option<String>,
    /// Strategy type (e.g., "SingleLeg")
    #[serde(default)]
    pub strategy_type: Option<String>,
}

/// Response of the account executions endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionsResponse {
    /// Executions in the requested window
    #[serde(default)]
    pub executions: Vec<Execution>,
}

/// A fill against an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Execution {
    /// Execution identifier
    pub id: i64,
    /// Symbol
    #[serde(default)]
    pub symbol: Option<String>,
    /// Internal symbol identifier
    #[serde(default)]
    pub symbol_id: Option<i64>,
    /// Executed quantity
    #[serde(default)]
    pub quantity: Option<Decimal>,
    /// Side
    #[serde(default)]
    pub side: Option<OrderSide>,
    /// Execution price
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Order this execution filled
    #[serde(default)]
    pub order_id: Option<i64>,
    /// Order chain identifier
    #[serde(default)]
    pub order_chain_id: Option<i64>,
    /// Exchange execution identifier
    #[serde(default)]
    pub exchange_exec_id: Option<String>,
    /// Execution time (ISO-8601)
    #[serde(default)]
    pub timestamp: Option<String>,
    /// Venue
    #[serde(default)]
    pub venue: Option<String>,
    /// Total cost
    #[serde(default)]
    pub total_cost: Option<Decimal>,
    /// Commission
    #[serde(default)]
    pub commission: Option<Decimal>,
    /// Execution fee
    #[serde(default)]
    pub execution_fee: Option<Decimal>,
    /// SEC fee
    #[serde(default)]
    pub sec_fee: Option<Decimal>,
}
