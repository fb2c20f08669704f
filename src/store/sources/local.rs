//! In-memory local data source implementation.
//!
//! This module provides a local implementation of [`PlanningDataSource`]
//! suitable for unit testing and local development. All data is stored in
//! memory, providing fast, deterministic, and isolated execution.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::api::{ForecastRecord, ItemRecord};
use crate::store::error::{StoreError, StoreResult};
use crate::store::source::PlanningDataSource;

/// In-memory local data source.
///
/// Stores the item and forecast collections in memory, ideal for tests that
/// need isolation and speed. The health flag lets tests simulate a
/// collaborator outage.
#[derive(Clone)]
pub struct LocalDataSource {
    data: Arc<RwLock<LocalData>>,
}

#[derive(Default)]
struct LocalData {
    items: Vec<ItemRecord>,
    forecasts: Vec<ForecastRecord>,
    is_healthy: bool,
}

impl LocalDataSource {
    /// Create a new empty local source.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData {
                is_healthy: true,
                ..Default::default()
            })),
        }
    }

    /// Replace the item collection.
    pub fn seed_items(&self, items: Vec<ItemRecord>) {
        let mut data = self.data.write().unwrap();
        data.items = items;
    }

    /// Replace the forecast collection.
    pub fn seed_forecasts(&self, forecasts: Vec<ForecastRecord>) {
        let mut data = self.data.write().unwrap();
        data.forecasts = forecasts;
    }

    /// Set the health status for testing collaborator failures.
    pub fn set_healthy(&self, healthy: bool) {
        let mut data = self.data.write().unwrap();
        data.is_healthy = healthy;
    }

    /// Clear all data from the source.
    pub fn clear(&self) {
        let mut data = self.data.write().unwrap();
        data.items.clear();
        data.forecasts.clear();
    }

    /// Number of items currently seeded.
    pub fn item_count(&self) -> usize {
        self.data.read().unwrap().items.len()
    }

    /// Number of forecasts currently seeded.
    pub fn forecast_count(&self) -> usize {
        self.data.read().unwrap().forecasts.len()
    }

    /// Helper to fail reads while the source is marked unhealthy.
    fn check_health(&self) -> StoreResult<()> {
        let data = self.data.read().unwrap();
        if !data.is_healthy {
            return Err(StoreError::fetch("Data source is not healthy"));
        }
        Ok(())
    }
}

impl Default for LocalDataSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlanningDataSource for LocalDataSource {
    async fn health_check(&self) -> StoreResult<bool> {
        let data = self.data.read().unwrap();
        Ok(data.is_healthy)
    }

    async fn fetch_items(&self) -> StoreResult<Vec<ItemRecord>> {
        self.check_health()
            .map_err(|e| e.with_operation("fetch_items"))?;
        let data = self.data.read().unwrap();
        Ok(data.items.clone())
    }

    async fn fetch_forecasts(&self) -> StoreResult<Vec<ForecastRecord>> {
        self.check_health()
            .map_err(|e| e.with_operation("fetch_forecasts"))?;
        let data = self.data.read().unwrap();
        Ok(data.forecasts.clone())
    }
}
