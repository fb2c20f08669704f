//! Planning grid layout.
//!
//! Walks the 26 week columns of the selected half for every joined row and
//! merges consecutive occupied weeks into one spanning cell instead of
//! repeating the label per column.

use crate::api::{GridCell, GridModel, GridRow, Half, WEEKS_PER_HALF};
use crate::services::reconcile::JoinedRow;

/// Column header labels for a half, `CW` plus the zero-padded week number.
pub fn column_labels(half: Half) -> Vec<String> {
    let start = half.start_week();
    (0..WEEKS_PER_HALF as u32)
        .map(|i| format!("CW{:02}", start + i))
        .collect()
}

/// Lay out the joined rows over the 26 columns of `half`.
///
/// Rows whose occupancy range lies entirely outside the half come back as
/// 26 empty cells; the renderer may suppress them but they are returned.
pub fn build_grid(rows: &[JoinedRow], half: Half) -> GridModel {
    GridModel {
        column_labels: column_labels(half),
        rows: rows.iter().map(|row| build_row(row, half)).collect(),
    }
}

fn build_row(row: &JoinedRow, half: Half) -> GridRow {
    let start = half.start_week();
    let mut cells = Vec::new();
    let mut run: u32 = 0;

    for i in 0..WEEKS_PER_HALF as u32 {
        let week = start + i;
        if row.weeks.contains(week) {
            // Absorb the column into the current run; nothing is emitted yet.
            run += 1;
        } else {
            if run > 0 {
                cells.push(GridCell::Span {
                    width: run,
                    label: row.row_key.clone(),
                });
                run = 0;
            }
            cells.push(GridCell::Empty);
        }
    }

    // A run reaching the right edge of the half is flushed after the walk.
    if run > 0 {
        cells.push(GridCell::Span {
            width: run,
            label: row.row_key.clone(),
        });
    }

    GridRow {
        key: row.row_key.clone(),
        cells,
    }
}
