//! Peak-week and event overlay rows.
//!
//! Two extra header layers share the grid's 26-column week axis: the peak
//! markers read from the persisted per-year selection, and the session's
//! free-text calendar events. Both are rendered here as plain vectors the
//! frontend composes over the grid.

use std::collections::HashMap;

use crate::api::{Half, WEEKS_PER_HALF};

/// Session-scoped week → event-label map.
///
/// Tagging is last-write-wins per week, even when several labels target the
/// same week in one action. Labels are not persisted; a new session starts
/// empty. Weeks outside 1..52 are accepted but never rendered.
#[derive(Debug, Clone, Default)]
pub struct EventOverlay {
    events: HashMap<u32, String>,
}

impl EventOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag every week in `weeks` with `label`, overwriting previous labels.
    pub fn tag_event(&mut self, weeks: &[u32], label: &str) {
        for &week in weeks {
            self.events.insert(week, label.to_string());
        }
    }

    /// Label for a week, if any.
    pub fn label_for(&self, week: u32) -> Option<&str> {
        self.events.get(&week).map(String::as_str)
    }

    /// All tagged weeks, ordered by week number.
    pub fn entries(&self) -> Vec<(u32, String)> {
        let mut entries: Vec<(u32, String)> = self
            .events
            .iter()
            .map(|(week, label)| (*week, label.clone()))
            .collect();
        entries.sort_by_key(|(week, _)| *week);
        entries
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Peak marker per visible column of `half`.
pub fn render_peak_row(half: Half, peak_weeks: &[u32]) -> Vec<bool> {
    let start = half.start_week();
    (0..WEEKS_PER_HALF as u32)
        .map(|i| peak_weeks.contains(&(start + i)))
        .collect()
}

/// Event label per visible column of `half`.
pub fn render_event_row(half: Half, overlay: &EventOverlay) -> Vec<Option<String>> {
    let start = half.start_week();
    (0..WEEKS_PER_HALF as u32)
        .map(|i| overlay.label_for(start + i).map(str::to_string))
        .collect()
}
