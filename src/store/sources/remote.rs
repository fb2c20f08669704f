//! Remote data source backed by the tracker REST API.
//!
//! Issues the two collection reads the planning view consumes as HTTP GETs
//! against the tracker backend. Transport failures and non-success statuses
//! surface as retryable fetch errors; payloads that fail to decode surface
//! as decode errors.

use async_trait::async_trait;
use std::time::Duration;

use crate::api::{ForecastRecord, ItemRecord};
use crate::store::error::{ErrorContext, StoreError, StoreResult};
use crate::store::source::PlanningDataSource;

/// Data source reading from the tracker REST API.
#[derive(Clone)]
pub struct RemoteDataSource {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteDataSource {
    /// Create a source against `base_url` (e.g. `http://127.0.0.1:8000/api`).
    pub fn new(base_url: impl Into<String>, request_timeout_sec: u64) -> StoreResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(request_timeout_sec))
            .build()
            .map_err(|e| StoreError::configuration(format!("Failed to build HTTP client: {}", e)))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(StoreError::configuration(
                "Remote source requires a non-empty base URL",
            ));
        }

        Ok(Self { client, base_url })
    }

    async fn get_collection<T>(&self, path: &str, entity: &str) -> StoreResult<Vec<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let operation = format!("fetch_{}", entity);

        let response = self.client.get(&url).send().await.map_err(|e| {
            StoreError::fetch_with_context(
                format!("GET {} failed: {}", url, e),
                ErrorContext::new(operation.clone()).with_entity(entity),
            )
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::fetch_with_context(
                format!("GET {} returned {}", url, status),
                ErrorContext::new(operation)
                    .with_entity(entity)
                    .with_details(format!("status={}", status.as_u16())),
            ));
        }

        response.json::<Vec<T>>().await.map_err(|e| {
            StoreError::DecodeError {
                message: format!("GET {} returned an undecodable payload: {}", url, e),
                context: ErrorContext::new(operation).with_entity(entity),
            }
        })
    }
}

#[async_trait]
impl PlanningDataSource for RemoteDataSource {
    async fn health_check(&self) -> StoreResult<bool> {
        // A reachable item endpoint is the health signal; the tracker has no
        // dedicated ping route.
        let url = format!("{}/item/", self.base_url);
        match self.client.get(&url).send().await {
            Ok(response) => Ok(response.status().is_success()),
            Err(_) => Ok(false),
        }
    }

    async fn fetch_items(&self) -> StoreResult<Vec<ItemRecord>> {
        self.get_collection("/item/", "items").await
    }

    async fn fetch_forecasts(&self) -> StoreResult<Vec<ForecastRecord>> {
        self.get_collection("/forecast", "forecasts").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let source = RemoteDataSource::new("http://localhost:8000/api/", 5).unwrap();
        assert_eq!(source.base_url, "http://localhost:8000/api");
    }

    #[test]
    fn test_empty_base_url_is_rejected() {
        assert!(RemoteDataSource::new("", 5).is_err());
    }
}
