//! Forecast/item reconciliation.
//!
//! Joins the forecast collection against the item collection, deduplicates
//! by a configurable row key, and keeps only the rows that bucket into the
//! selected planning year. The output order follows forecast input order,
//! so reconciliation is deterministic and idempotent.

use std::collections::{HashMap, HashSet};

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::api::{ForecastRecord, ItemRecord, RowDiagnostic, WeekRange};
use crate::models::calweek::{parse_wire_date, week_range};

/// Which identifier deduplicates candidate rows.
///
/// The planning screen historically shipped both interpretations; the
/// forecast-sid variant is the default. With `Item`, two forecasts
/// referencing the same item collapse into the first one seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DedupeKey {
    #[default]
    Forecast,
    Item,
}

/// A forecast joined to its referenced item, ready for grid layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JoinedRow {
    /// Display key (the forecast sid).
    pub row_key: String,
    /// Sid of the matched item.
    pub item_sid: String,
    /// Flavour of the matched item.
    pub flavour: String,
    /// Calendar weeks the item occupies.
    pub weeks: WeekRange,
}

/// Planning year a row buckets into, given its item's requested year.
///
/// The two branches are keyed off whether the selected year is one of the
/// offered display years (2023/2025). The second branch's ranges do not
/// mirror the first branch's; that asymmetry ships in production and is kept
/// exactly as-is.
pub fn planning_year_for(requested_year: i32, selected_year: i32) -> i32 {
    if selected_year == 2023 || selected_year == 2025 {
        if (2023..=2024).contains(&requested_year) {
            2025
        } else {
            2023
        }
    } else if (2021..=2022).contains(&requested_year) {
        2023
    } else {
        2025
    }
}

/// Join forecasts to items and keep the rows for `selected_year`.
///
/// Returns the retained rows in input order plus diagnostics for rows that
/// were excluded because their item dates did not parse. Forecasts whose
/// reference matches no item are dropped silently (defined behavior, logged
/// at debug level), not reported as errors.
pub fn reconcile(
    forecasts: &[ForecastRecord],
    items: &[ItemRecord],
    selected_year: i32,
    dedupe_key: DedupeKey,
) -> (Vec<JoinedRow>, Vec<RowDiagnostic>) {
    // First item with a given sid wins.
    let mut items_by_sid: HashMap<&str, &ItemRecord> = HashMap::new();
    for item in items {
        items_by_sid.entry(item.sid.as_str()).or_insert(item);
    }

    let mut seen: HashSet<&str> = HashSet::new();
    let mut rows = Vec::new();
    let mut excluded = Vec::new();

    for forecast in forecasts {
        let key = match dedupe_key {
            DedupeKey::Forecast => Some(forecast.sid.as_str()),
            DedupeKey::Item => forecast.item_sid.as_deref(),
        };
        if let Some(key) = key {
            if !seen.insert(key) {
                continue;
            }
        }

        let item_sid = match forecast.item_sid.as_deref() {
            Some(sid) => sid,
            None => {
                log::debug!("forecast {} references no item; dropped", forecast.sid);
                continue;
            }
        };

        let item = match items_by_sid.get(item_sid) {
            Some(item) => *item,
            None => {
                log::debug!(
                    "forecast {} references unknown item {}; dropped",
                    forecast.sid,
                    item_sid
                );
                continue;
            }
        };

        let requested = match parse_wire_date(&item.requested_date) {
            Ok(date) => date,
            Err(e) => {
                excluded.push(RowDiagnostic {
                    row_key: forecast.sid.clone(),
                    item_sid: item.sid.clone(),
                    detail: e.to_string(),
                });
                continue;
            }
        };
        let delivery = match parse_wire_date(&item.delivery_date) {
            Ok(date) => date,
            Err(e) => {
                excluded.push(RowDiagnostic {
                    row_key: forecast.sid.clone(),
                    item_sid: item.sid.clone(),
                    detail: e.to_string(),
                });
                continue;
            }
        };

        if planning_year_for(requested.year(), selected_year) != selected_year {
            continue;
        }

        rows.push(JoinedRow {
            row_key: forecast.sid.clone(),
            item_sid: item.sid.clone(),
            flavour: item.flavour.clone(),
            weeks: week_range(requested, delivery),
        });
    }

    (rows, excluded)
}
