//! Data source trait for the planning view's collaborator reads.
//!
//! The trait defines the two read-only collection fetches the planning grid
//! is built from, allowing different implementations (tracker REST API,
//! in-memory mock) to be swapped via dependency injection.

use async_trait::async_trait;

use super::error::StoreResult;
use crate::api::{ForecastRecord, ItemRecord};

/// Read-only source of the item and forecast collections.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust and allow
/// sharing across threads.
///
/// # Error Handling
/// All methods return `StoreResult<T>`. A failed fetch must surface as an
/// error rather than an empty collection: the grid is never built from
/// partial data.
#[async_trait]
pub trait PlanningDataSource: Send + Sync {
    /// Check if the data source is reachable and healthy.
    ///
    /// # Returns
    /// - `Ok(true)` if the source is healthy
    /// - `Ok(false)` if the source is unhealthy but no error occurred
    /// - `Err(StoreError)` if an error occurred during the check
    async fn health_check(&self) -> StoreResult<bool>;

    /// Fetch the full item collection.
    ///
    /// # Returns
    /// * `Ok(Vec<ItemRecord>)` - every item record, in collaborator order
    /// * `Err(StoreError)` - if the read fails
    async fn fetch_items(&self) -> StoreResult<Vec<ItemRecord>>;

    /// Fetch the full forecast collection.
    ///
    /// # Returns
    /// * `Ok(Vec<ForecastRecord>)` - every forecast record, in collaborator
    ///   order
    /// * `Err(StoreError)` - if the read fails
    async fn fetch_forecasts(&self) -> StoreResult<Vec<ForecastRecord>>;
}
