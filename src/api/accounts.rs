//! Accounts service for account-scoped queries.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::ClientInner;
use crate::models::{
    AccountNumber, AccountsResponse, ActivitiesResponse, BalancesResponse, ExecutionsResponse,
    OrderStateFilter, OrdersResponse, PositionsResponse,
};
use crate::{Error, Result};

/// Sub-resource of a single account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountResource {
    /// `accounts/{id}/balances`
    Balances,
    /// `accounts/{id}/activities`
    Activities,
    /// `accounts/{id}/orders`
    Orders,
    /// `accounts/{id}/executions`
    Executions,
    /// `accounts/{id}/positions`
    Positions,
}

impl AccountResource {
    /// The path segment naming this resource.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountResource::Balances => "balances",
            AccountResource::Activities => "activities",
            AccountResource::Orders => "orders",
            AccountResource::Executions => "executions",
            AccountResource::Positions => "positions",
        }
    }
}

impl fmt::Display for AccountResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filters for [`AccountsService::orders_filtered`].
///
/// # Example
///
/// ```
/// use questrade_rs::api::OrdersQuery;
/// use questrade_rs::models::OrderStateFilter;
/// use chrono::{Duration, Utc};
///
/// let end = Utc::now();
/// let query = OrdersQuery::new()
///     .state(OrderStateFilter::Open)
///     .between(end - Duration::days(7), end);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrdersQuery {
    /// Which orders to return
    pub state_filter: OrderStateFilter,
    /// Only orders created at or after this time
    pub start_time: Option<DateTime<Utc>>,
    /// Only orders created at or before this time
    pub end_time: Option<DateTime<Utc>>,
}

impl OrdersQuery {
    /// Create a query returning all orders.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to orders in the given state.
    pub fn state(mut self, filter: OrderStateFilter) -> Self {
        self.state_filter = filter;
        self
    }

    /// Restrict to orders created within `[start, end]`.
    pub fn between(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.start_time = Some(start);
        self.end_time = Some(end);
        self
    }

    fn to_params(&self) -> Result<Vec<(&'static str, String)>> {
        if let (Some(start), Some(end)) = (self.start_time, self.end_time) {
            check_range(start, end)?;
        }

        let mut params = vec![("stateFilter", self.state_filter.as_str().to_string())];
        if let Some(start) = self.start_time {
            params.push(("startTime", start.to_rfc3339()));
        }
        if let Some(end) = self.end_time {
            params.push(("endTime", end.to_rfc3339()));
        }
        Ok(params)
    }
}

fn check_range(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<()> {
    if start > end {
        return Err(Error::InvalidInput(format!(
            "Start time {} is after end time {}",
            start, end
        )));
    }
    Ok(())
}

fn range_params(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Vec<(&'static str, String)>> {
    check_range(start, end)?;
    Ok(vec![
        ("startTime", start.to_rfc3339()),
        ("endTime", end.to_rfc3339()),
    ])
}

/// Service for account-related operations.
///
/// Every method issues exactly one request. Failures are returned as
/// [`Error`]; an empty collection always means the server reported none.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: questrade_rs::QuestradeClient) -> questrade_rs::Result<()> {
/// use questrade_rs::models::Currency;
///
/// let accounts = client.accounts().list().await?;
/// for account in &accounts.accounts {
///     let balances = client.accounts().balances(&account.number).await?;
///     if let Some(cad) = balances.combined_in(Currency::Cad) {
///         println!("{}: {:?}", account.number, cad.total_equity);
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub struct AccountsService {
    inner: Arc<ClientInner>,
}

impl AccountsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List all accounts the access token can see.
    pub async fn list(&self) -> Result<AccountsResponse> {
        self.inner.get_account(&[], &[]).await
    }

    /// Get current balances for an account.
    pub async fn balances(&self, account_number: &AccountNumber) -> Result<BalancesResponse> {
        self.resource(account_number, AccountResource::Balances, &[])
            .await
    }

    /// Get account activities using the server's default window.
    pub async fn activities(&self, account_number: &AccountNumber) -> Result<ActivitiesResponse> {
        self.resource(account_number, AccountResource::Activities, &[])
            .await
    }

    /// Get account activities within `[start, end]`.
    pub async fn activities_between(
        &self,
        account_number: &AccountNumber,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<ActivitiesResponse> {
        let params = range_params(start, end)?;
        self.resource(account_number, AccountResource::Activities, &params)
            .await
    }

    /// Get orders for an account using the server's default filters.
    pub async fn orders(&self, account_number: &AccountNumber) -> Result<OrdersResponse> {
        self.resource(account_number, AccountResource::Orders, &[])
            .await
    }

    /// Get orders for an account matching `query`.
    pub async fn orders_filtered(
        &self,
        account_number: &AccountNumber,
        query: &OrdersQuery,
    ) -> Result<OrdersResponse> {
        let params = query.to_params()?;
        self.resource(account_number, AccountResource::Orders, &params)
            .await
    }

    /// Get executions for an account using the server's default window.
    pub async fn executions(&self, account_number: &AccountNumber) -> Result<ExecutionsResponse> {
        self.resource(account_number, AccountResource::Executions, &[])
            .await
    }

    /// Get executions for an account within `[start, end]`.
    pub async fn executions_between(
        &self,
        account_number: &AccountNumber,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<ExecutionsResponse> {
        let params = range_params(start, end)?;
        self.resource(account_number, AccountResource::Executions, &params)
            .await
    }

    /// Get positions for an account.
    pub async fn positions(&self, account_number: &AccountNumber) -> Result<PositionsResponse> {
        self.resource(account_number, AccountResource::Positions, &[])
            .await
    }

    /// Get the undecoded JSON payload of an account sub-resource.
    ///
    /// Useful for fields the typed models do not cover.
    pub async fn raw(
        &self,
        account_number: &AccountNumber,
        resource: AccountResource,
    ) -> Result<Value> {
        self.inner
            .perform_account_query(&[account_number.as_str(), resource.as_str()], &[])
            .await
    }

    async fn resource<T: DeserializeOwned>(
        &self,
        account_number: &AccountNumber,
        resource: AccountResource,
        query: &[(&str, String)],
    ) -> Result<T> {
        self.inner
            .get_account(&[account_number.as_str(), resource.as_str()], query)
            .await
    }
}
