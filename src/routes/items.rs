use serde::{Deserialize, Serialize};

/// Build item record as served by the tracker REST API.
///
/// Only the fields the planning view consumes are modeled; the collaborator
/// serves more (processors, landscape, status, ...) and serde skips them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Unique system identifier, e.g. "QX1".
    pub sid: String,
    /// Date the system was requested (`%Y-%m-%d`).
    pub requested_date: String,
    /// Date the system is delivered (`%Y-%m-%d`).
    pub delivery_date: String,
    /// Product flavour category.
    pub flavour: String,
}
