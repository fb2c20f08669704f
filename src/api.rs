//! Public API surface for the planning backend.
//!
//! This file consolidates the DTO types for the HTTP API. All types derive
//! Serialize/Deserialize for JSON serialization.

pub use crate::routes::forecasts::ForecastRecord;
pub use crate::routes::items::ItemRecord;
pub use crate::routes::planning::GridCell;
pub use crate::routes::planning::GridModel;
pub use crate::routes::planning::GridRow;
pub use crate::routes::planning::Half;
pub use crate::routes::planning::PlanningGridData;
pub use crate::routes::planning::RowDiagnostic;
pub use crate::routes::planning::SUPPORTED_PLANNING_YEARS;
pub use crate::routes::planning::WEEKS_PER_HALF;

pub use crate::models::calweek::{
    parse_wire_date, week_of_year, week_range, DateParseError, WeekRange,
};
