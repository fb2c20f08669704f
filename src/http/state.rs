//! Application state for the HTTP server.

use crate::services::planning::PlanningController;
use std::sync::Arc;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Planning view controller owning the selection, snapshot, and overlays
    pub controller: Arc<PlanningController>,
}

impl AppState {
    /// Create a new application state with the given controller.
    pub fn new(controller: Arc<PlanningController>) -> Self {
        Self { controller }
    }
}
