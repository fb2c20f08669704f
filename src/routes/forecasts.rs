use serde::{Deserialize, Serialize};

/// Forecast record as served by the tracker REST API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastRecord {
    /// Forecast identifier; the display key of its planning grid row.
    pub sid: String,
    /// Identifier of the referenced item. May reference nothing, in which
    /// case the forecast cannot be placed on the timeline.
    #[serde(default)]
    pub item_sid: Option<String>,
}
