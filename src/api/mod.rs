//! API service modules for Questrade endpoints.
//!
//! Each service maps its methods onto resource paths and hands them to the
//! client's request core.

mod accounts;
mod time;

pub use accounts::{AccountResource, AccountsService, OrdersQuery};
pub use time::TimeService;
