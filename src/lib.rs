//! # questrade-rs
//!
//! An async Rust client for the Questrade account-data API.
//!
//! Every call goes through one authenticated request core: it builds the
//! URL under `<api server>/v1/`, attaches `Authorization: Bearer <token>`,
//! and turns the response into a [`Result`]. Only an HTTP 200 is a success;
//! anything else is an [`Error`] that names the failure kind and the
//! resource path.
//!
//! ## Features
//!
//! - **Accounts**: list accounts, balances, activities, orders, executions
//!   and positions
//! - **Server time**: the Questrade server clock
//! - **Type Safety**: typed response models with `rust_decimal` amounts
//! - **Pluggable transport**: reqwest by default, any [`Transport`] for tests
//!
//! Obtaining or refreshing the access token is left to the caller.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use questrade_rs::{ClientConfig, QuestradeClient};
//!
//! #[tokio::main]
//! async fn main() -> questrade_rs::Result<()> {
//!     let config = ClientConfig::new("https://api01.iq.questrade.com/", "access-token")?;
//!     let client = QuestradeClient::new(config)?;
//!
//!     let response = client.accounts().list().await?;
//!     println!("Found {} accounts", response.accounts.len());
//!
//!     if let Some(account) = response.accounts.first() {
//!         let positions = client.accounts().positions(&account.number).await?;
//!         for position in positions.positions {
//!             println!("{}: {:?}", position.symbol, position.open_quantity);
//!         }
//!     }
//!
//!     println!("Server time: {}", client.time().server_time().await?);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! ```rust,no_run
//! use questrade_rs::{AccountNumber, ErrorKind, QuestradeClient};
//!
//! # async fn example(client: QuestradeClient) {
//! match client.accounts().balances(&AccountNumber::new("26598145")).await {
//!     Ok(balances) => println!("{:?}", balances.combined_balances),
//!     Err(err) if err.is_auth_error() => eprintln!("access token rejected"),
//!     Err(err) => match err.kind() {
//!         ErrorKind::Transport => eprintln!("server unreachable: {}", err),
//!         _ => eprintln!("query failed: {}", err),
//!     },
//! }
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use error::{Error, ErrorKind, Result};
pub use models::AccountNumber;
pub use client::{ClientConfig, QuestradeClient, ReqwestTransport, Transport};

/// Prelude module for convenient imports.
///
/// ```rust
/// use questrade_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, ErrorKind, Result};
    pub use crate::models::{
        // Primitives
        AccountNumber,
        // Enums
        AccountStatus, AccountType, ClientAccountType, Currency, OrderSide, OrderState,
        OrderStateFilter, OrderType, TimeInForce,
        // Responses
        Account, AccountsResponse, Activity, ActivitiesResponse, Balance, BalancesResponse,
        Execution, ExecutionsResponse, Order, OrdersResponse, Position, PositionsResponse,
        ServerTime,
    };
    pub use crate::api::{AccountResource, AccountsService, OrdersQuery, TimeService};
    pub use crate::client::{
        ClientConfig, HttpRequest, HttpResponse, QuestradeClient, ReqwestTransport, Transport,
        TransportError,
    };
}
