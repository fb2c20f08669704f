use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of week columns in one half-year view.
pub const WEEKS_PER_HALF: usize = 26;

/// The two display years the planning screen offers.
pub const SUPPORTED_PLANNING_YEARS: [i32; 2] = [2023, 2025];

/// Half-year display window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Half {
    /// Calendar weeks 1..=26.
    First,
    /// Calendar weeks 27..=52.
    Second,
}

impl Half {
    /// First calendar week shown in this half.
    pub fn start_week(self) -> u32 {
        match self {
            Half::First => 1,
            Half::Second => 27,
        }
    }

    /// Month names rendered above the week header for this half.
    pub fn month_labels(self) -> [&'static str; 6] {
        match self {
            Half::First => ["January", "February", "March", "April", "May", "June"],
            Half::Second => [
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ],
        }
    }
}

impl FromStr for Half {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first" | "h1" | "1" => Ok(Half::First),
            "second" | "h2" | "2" => Ok(Half::Second),
            _ => Err(format!("Unknown half-year selector: {}", s)),
        }
    }
}

/// One rendered cell of a planning grid row.
///
/// A `Span` covers `width` consecutive week columns with a single label
/// instead of repeating it per column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GridCell {
    Empty,
    Span { width: u32, label: String },
}

/// A single forecast row of the planning grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridRow {
    /// Display key (the forecast sid).
    pub key: String,
    pub cells: Vec<GridCell>,
}

/// Renderable grid model: 26 labeled week columns by forecast rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridModel {
    /// Column headers, `CW01`..`CW26` or `CW27`..`CW52`.
    pub column_labels: Vec<String>,
    pub rows: Vec<GridRow>,
}

/// A row excluded from the grid, with the reason for the exclusion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowDiagnostic {
    pub row_key: String,
    pub item_sid: String,
    pub detail: String,
}

/// Complete planning view payload: the grid plus the overlay rows aligned
/// to the same 26 columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanningGridData {
    pub year: i32,
    pub half: Half,
    pub month_labels: Vec<String>,
    pub grid: GridModel,
    /// Peak marker per visible week column.
    pub peak_row: Vec<bool>,
    /// Event label per visible week column.
    pub event_row: Vec<Option<String>>,
    /// Rows excluded because their item dates did not parse.
    pub excluded: Vec<RowDiagnostic>,
    /// Checksum of the item/forecast snapshot the grid was built from.
    pub snapshot_checksum: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_start_weeks() {
        assert_eq!(Half::First.start_week(), 1);
        assert_eq!(Half::Second.start_week(), 27);
    }

    #[test]
    fn test_half_parsing() {
        assert_eq!("first".parse::<Half>().unwrap(), Half::First);
        assert_eq!("Second".parse::<Half>().unwrap(), Half::Second);
        assert_eq!("2".parse::<Half>().unwrap(), Half::Second);
        assert!("third".parse::<Half>().is_err());
    }

    #[test]
    fn test_half_serde_roundtrip() {
        assert_eq!(serde_json::to_string(&Half::First).unwrap(), r#""first""#);
        let half: Half = serde_json::from_str(r#""second""#).unwrap();
        assert_eq!(half, Half::Second);
    }

    #[test]
    fn test_month_labels_per_half() {
        assert_eq!(Half::First.month_labels()[0], "January");
        assert_eq!(Half::Second.month_labels()[5], "December");
    }

    #[test]
    fn test_grid_cell_serialization() {
        let empty = serde_json::to_value(GridCell::Empty).unwrap();
        assert_eq!(empty["kind"], "empty");

        let span = serde_json::to_value(GridCell::Span {
            width: 3,
            label: "F1".to_string(),
        })
        .unwrap();
        assert_eq!(span["kind"], "span");
        assert_eq!(span["width"], 3);
        assert_eq!(span["label"], "F1");
    }

    #[test]
    fn test_supported_years() {
        assert_eq!(SUPPORTED_PLANNING_YEARS, [2023, 2025]);
    }
}
