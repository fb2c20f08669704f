use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Error raised when a wire date string cannot be parsed.
///
/// The offending input is carried along so callers can report which record
/// was excluded. Never defaulted to week 1.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unparseable date {input:?}: {source}")]
pub struct DateParseError {
    pub input: String,
    #[source]
    pub source: chrono::format::ParseError,
}

/// Parse a date in the tracker's wire format (`%Y-%m-%d`).
pub fn parse_wire_date(input: &str) -> Result<NaiveDate, DateParseError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|source| DateParseError {
        input: input.to_string(),
        source,
    })
}

/// Calendar week of the year for a date, as the tracker counts weeks.
///
/// This is the planning screen's week formula, reproduced exactly: whole
/// days elapsed since January 1, plus January 1's day-of-week index
/// (Sunday = 0) plus one, divided by seven and rounded up. It is NOT
/// ISO-8601 week numbering and must not be replaced by a week-numbering
/// library; every range comparison downstream is calibrated against this
/// function.
///
/// Dates are plain calendar dates, so the browser-side local-timezone
/// sensitivity does not exist here; the result is the same in every
/// environment.
pub fn week_of_year(date: NaiveDate) -> u32 {
    let start_of_year = NaiveDate::from_ymd_opt(date.year(), 1, 1)
        .expect("January 1 exists for every representable year");
    let days_elapsed = date.signed_duration_since(start_of_year).num_days();
    let offset = i64::from(start_of_year.weekday().num_days_from_sunday()) + 1;
    // Ceiling division; days_elapsed is non-negative for dates within the year.
    ((days_elapsed + offset + 6) / 7) as u32
}

/// Inclusive calendar-week interval occupied by an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekRange {
    pub start_week: u32,
    pub end_week: u32,
}

impl WeekRange {
    pub fn new(start_week: u32, end_week: u32) -> Self {
        Self {
            start_week,
            end_week,
        }
    }

    /// Whether `week` falls inside the range.
    ///
    /// An inverted range (`start_week > end_week`) is legal and simply never
    /// contains anything; no ordering is enforced on construction.
    pub fn contains(&self, week: u32) -> bool {
        self.start_week <= week && week <= self.end_week
    }
}

/// Week range spanned by a requested/delivery date pair.
///
/// Both endpoints go through [`week_of_year`]; start and end are taken as
/// given, so a delivery before the request yields an empty range.
pub fn week_range(requested: NaiveDate, delivery: NaiveDate) -> WeekRange {
    WeekRange::new(week_of_year(requested), week_of_year(delivery))
}
