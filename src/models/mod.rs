//! Data models for the Questrade API.
//!
//! One response type per endpoint, decoded leniently: only the identifying
//! fields are required, everything else is optional or defaulted.
//!
//! - [`primitives`] - `AccountNumber`
//! - [`enums`] - Account, order and currency enumerations
//! - [`account`] - Account list
//! - [`balance`] - Account balances
//! - [`activity`] - Account activities
//! - [`order`] - Orders and executions
//! - [`position`] - Positions
//! - [`time`] - Server time

pub mod primitives;
pub mod enums;
pub mod account;
pub mod balance;
pub mod activity;
pub mod order;
pub mod position;
pub mod time;

// Re-export commonly used types
pub use primitives::*;
pub use enums::*;
pub use account::*;
pub use balance::*;
pub use activity::*;
pub use order::*;
pub use position::*;
pub use time::*;
