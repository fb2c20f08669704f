//! Data Transfer Objects for the HTTP API.
//!
//! The planning grid payload itself is re-exported from the routes module
//! since it already derives Serialize/Deserialize.

use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    ForecastRecord, GridCell, GridModel, GridRow, Half, ItemRecord, PlanningGridData,
    RowDiagnostic,
};
pub use crate::services::reconcile::DedupeKey;

/// Query parameters for the planning grid endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GridQuery {
    /// Display year (default: 2023, the screen's initial selection)
    #[serde(default)]
    pub year: Option<i32>,
    /// Half-year window (default: first)
    #[serde(default)]
    pub half: Option<Half>,
    /// Row deduplication key (default: forecast)
    #[serde(default)]
    pub dedupe: Option<DedupeKey>,
}

/// Query parameters for reading peak weeks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeakWeeksQuery {
    pub year: i32,
}

/// Request body for replacing a year's peak weeks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetPeakWeeksRequest {
    pub year: i32,
    pub weeks: Vec<u32>,
}

/// Peak weeks currently stored for a year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeakWeeksResponse {
    pub year: i32,
    pub weeks: Vec<u32>,
}

/// Request body for tagging weeks with an event label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagEventRequest {
    pub weeks: Vec<u32>,
    pub label: String,
}

/// One tagged event week.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEntry {
    pub week: u32,
    pub label: String,
}

/// All tagged events of the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventListResponse {
    pub events: Vec<EventEntry>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Data source connection status
    pub source: String,
}
