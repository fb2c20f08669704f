//! Service layer for the planning view.
//!
//! Pure computation lives in `reconcile`, `grid`, and `overlay`; the
//! `planning` module owns the view state and orchestrates the collaborator
//! fetches feeding the computation.

pub mod grid;

pub mod overlay;

pub mod planning;

pub mod reconcile;

pub use grid::{build_grid, column_labels};
pub use overlay::{render_event_row, render_peak_row, EventOverlay};
pub use planning::{PlanningController, PlanningError, RefreshOutcome};
pub use reconcile::{planning_year_for, reconcile, DedupeKey, JoinedRow};
