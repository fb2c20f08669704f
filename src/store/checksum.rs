//! Checksum calculation for fetched snapshots.
//!
//! A snapshot checksum identifies whether a refetch actually changed the
//! item/forecast data; the controller logs unchanged refetches and the grid
//! payload carries the checksum so the frontend can cheaply detect staleness.

use sha2::{Digest, Sha256};

use super::error::{StoreError, StoreResult};
use crate::api::{ForecastRecord, ItemRecord};

/// Calculate the SHA-256 checksum of an item/forecast snapshot.
///
/// # Returns
/// Hexadecimal string representation of the SHA-256 hash over the JSON
/// serialization of both collections, in fetch order.
pub fn snapshot_checksum(
    items: &[ItemRecord],
    forecasts: &[ForecastRecord],
) -> StoreResult<String> {
    let mut hasher = Sha256::new();

    let items_json = serde_json::to_string(items)
        .map_err(|e| StoreError::internal(format!("Failed to encode items: {}", e)))?;
    let forecasts_json = serde_json::to_string(forecasts)
        .map_err(|e| StoreError::internal(format!("Failed to encode forecasts: {}", e)))?;

    hasher.update(items_json.as_bytes());
    hasher.update(forecasts_json.as_bytes());

    Ok(hex::encode(hasher.finalize()))
}
