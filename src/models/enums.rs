//! Enumeration types for the Questrade API.
//!
//! Every enum that is decoded from server data carries an `Unknown`
//! fallback so a new server-side value does not break decoding.

use serde::{Deserialize, Serialize};

/// Type of a Questrade account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountType {
    /// Cash account
    Cash,
    /// Margin account
    Margin,
    /// Tax Free Savings Account
    #[serde(rename = "TFSA")]
    Tfsa,
    /// Registered Retirement Savings Plan
    #[serde(rename = "RRSP")]
    Rrsp,
    /// Spousal RRSP
    #[serde(rename = "SRRSP")]
    Srrsp,
    /// Locked-In RRSP
    #[serde(rename = "LRRSP")]
    Lrrsp,
    /// Locked-In Retirement Account
    #[serde(rename = "LIRA")]
    Lira,
    /// Life Income Fund
    #[serde(rename = "LIF")]
    Lif,
    /// Retirement Income Fund
    #[serde(rename = "RIF")]
    Rif,
    /// Spousal RIF
    #[serde(rename = "SRIF")]
    Srif,
    /// Locked-In RIF
    #[serde(rename = "LRIF")]
    Lrif,
    /// Registered Retirement Income Fund
    #[serde(rename = "RRIF")]
    Rrif,
    /// Prescribed RIF
    #[serde(rename = "PRIF")]
    Prif,
    /// Individual Registered Education Savings Plan
    #[serde(rename = "RESP")]
    Resp,
    /// Family RESP
    #[serde(rename = "FRESP")]
    Fresp,
    /// First Home Savings Account
    #[serde(rename = "FHSA")]
    Fhsa,
    /// Unknown account type
    #[serde(other)]
    Unknown,
}

impl AccountType {
    /// Returns `true` for tax-registered account types.
    pub fn is_registered(&self) -> bool {
        !matches!(
            self,
            AccountType::Cash | AccountType::Margin | AccountType::Unknown
        )
    }
}

/// Status of a Questrade account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountStatus {
    /// Account is open
    Active,
    /// Account is closed and suspended
    #[serde(rename = "Suspended (Closed)")]
    SuspendedClosed,
    /// Account can only be viewed
    #[serde(rename = "Suspended (View Only)")]
    SuspendedViewOnly,
    /// Only liquidating trades are accepted
    #[serde(rename = "Liquidate Only")]
    LiquidateOnly,
    /// Account is closed
    Closed,
    /// Unknown status
    #[serde(other)]
    Unknown,
}

/// Ownership type of a Questrade account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClientAccountType {
    /// Account held by one person
    Individual,
    /// Account held by two people
    Joint,
    /// Non-individual account held by an informal trust
    #[serde(rename = "Informal Trust")]
    InformalTrust,
    /// Corporation account
    Corporation,
    /// Investment club account
    #[serde(rename = "Investment Club")]
    InvestmentClub,
    /// Non-individual account held by a formal trust
    #[serde(rename = "Formal Trust")]
    FormalTrust,
    /// Partnership account
    Partnership,
    /// Sole proprietorship account
    #[serde(rename = "Sole Proprietorship")]
    SoleProprietorship,
    /// Family account
    Family,
    /// Joint and informal trust account
    #[serde(rename = "Joint and Informal Trust")]
    JointAndInformalTrust,
    /// Institutional account
    Institution,
    /// Unknown ownership type
    #[serde(other)]
    Unknown,
}

/// Currency of a balance or activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// Canadian dollar
    #[serde(rename = "CAD")]
    Cad,
    /// United States dollar
    #[serde(rename = "USD")]
    Usd,
    /// Unknown currency
    #[serde(other)]
    Unknown,
}

/// Side of an order or execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderSide {
    /// Buy
    Buy,
    /// Sell
    Sell,
    /// Sell short
    Short,
    /// Cover a short position
    Cov,
    /// Buy to open
    #[serde(rename = "BTO")]
    BuyToOpen,
    /// Sell to close
    #[serde(rename = "STC")]
    SellToClose,
    /// Sell to open
    #[serde(rename = "STO")]
    SellToOpen,
    /// Buy to close
    #[serde(rename = "BTC")]
    BuyToClose,
    /// Unknown side
    #[serde(other)]
    Unknown,
}

impl OrderSide {
    /// Returns `true` if this side buys.
    pub fn is_buy(&self) -> bool {
        matches!(
            self,
            OrderSide::Buy | OrderSide::Cov | OrderSide::BuyToOpen | OrderSide::BuyToClose
        )
    }
}

/// Order type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    /// Market order
    Market,
    /// Limit order
    Limit,
    /// Stop order
    Stop,
    /// Stop limit order
    StopLimit,
    /// Trailing stop with a percentage offset
    TrailStopInPercentage,
    /// Trailing stop with a dollar offset
    TrailStopInDollar,
    /// Trailing stop limit with a percentage offset
    TrailStopLimitInPercentage,
    /// Trailing stop limit with a dollar offset
    TrailStopLimitInDollar,
    /// Limit on open
    LimitOnOpen,
    /// Limit on close
    LimitOnClose,
    /// Unknown order type
    #[serde(other)]
    Unknown,
}

/// Time in force of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeInForce {
    /// Expires at end of trading day
    Day,
    /// Remains active until cancelled
    GoodTillCanceled,
    /// Day order including extended hours
    GoodTillExtendedDay,
    /// Remains active until a given date
    GoodTillDate,
    /// Fill what is possible immediately, cancel the rest
    ImmediateOrCancel,
    /// Fill entirely immediately or cancel
    FillOrKill,
    /// Unknown time in force
    #[serde(other)]
    Unknown,
}

/// State of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderState {
    /// Order failed
    Failed,
    /// Order pending
    Pending,
    /// Order accepted
    Accepted,
    /// Order rejected
    Rejected,
    /// Cancellation pending
    CancelPending,
    /// Order cancelled
    Canceled,
    /// Order partially filled then cancelled
    PartialCanceled,
    /// Order partially filled
    Partial,
    /// Order filled
    Executed,
    /// Replacement pending
    ReplacePending,
    /// Order replaced
    Replaced,
    /// Order stopped
    Stopped,
    /// Order suspended
    Suspended,
    /// Order expired
    Expired,
    /// Order queued
    Queued,
    /// Order triggered
    Triggered,
    /// Order activated
    Activated,
    /// Order under risk review
    PendingRiskReview,
    /// Contingent order
    ContingentOrder,
    /// Unknown state
    #[serde(other)]
    Unknown,
}

impl OrderState {
    /// Returns `true` if the order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            OrderState::Failed
                | OrderState::Rejected
                | OrderState::Canceled
                | OrderState::PartialCanceled
                | OrderState::Executed
                | OrderState::Replaced
                | OrderState::Expired
        )
    }
}

/// Filter on order state for order queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OrderStateFilter {
    /// All orders
    #[default]
    All,
    /// Only open orders
    Open,
    /// Only closed orders
    Closed,
}

impl OrderStateFilter {
    /// The query parameter value for this filter.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStateFilter::All => "All",
            OrderStateFilter::Open => "Open",
            OrderStateFilter::Closed => "Closed",
        }
    }
}
