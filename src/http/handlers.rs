//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! planning controller for business logic.

use axum::{
    extract::{Query, State},
    Json,
};

use super::dto::{
    EventEntry, EventListResponse, GridQuery, HealthResponse, PeakWeeksQuery, PeakWeeksResponse,
    SetPeakWeeksRequest, TagEventRequest,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{Half, PlanningGridData, SUPPORTED_PLANNING_YEARS};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the data
/// source is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let source_status = match state.controller.source_health().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        source: source_status,
    }))
}

// =============================================================================
// Planning Grid
// =============================================================================

/// GET /v1/planning/grid
///
/// Select year/half, refetch both collections, and return the rebuilt grid.
/// Answers 409 if a newer selection superseded this request mid-flight.
pub async fn get_planning_grid(
    State(state): State<AppState>,
    Query(query): Query<GridQuery>,
) -> HandlerResult<PlanningGridData> {
    let year = query.year.unwrap_or(SUPPORTED_PLANNING_YEARS[0]);
    let half = query.half.unwrap_or(Half::First);
    let dedupe = query.dedupe.unwrap_or_default();

    let data = state.controller.load_grid(year, half, dedupe).await?;
    Ok(Json(data))
}

// =============================================================================
// Peak Weeks
// =============================================================================

/// GET /v1/planning/peak-weeks
///
/// Read the persisted peak-week selection for a year.
pub async fn get_peak_weeks(
    State(state): State<AppState>,
    Query(query): Query<PeakWeeksQuery>,
) -> HandlerResult<PeakWeeksResponse> {
    let weeks = state.controller.peak_weeks(query.year)?;
    Ok(Json(PeakWeeksResponse {
        year: query.year,
        weeks,
    }))
}

/// PUT /v1/planning/peak-weeks
///
/// Replace and persist the peak-week selection for a year. The previous
/// value is overwritten, not merged.
pub async fn put_peak_weeks(
    State(state): State<AppState>,
    Json(request): Json<SetPeakWeeksRequest>,
) -> HandlerResult<PeakWeeksResponse> {
    state
        .controller
        .set_peak_weeks(request.year, &request.weeks)?;

    let weeks = state.controller.peak_weeks(request.year)?;
    Ok(Json(PeakWeeksResponse {
        year: request.year,
        weeks,
    }))
}

// =============================================================================
// Events
// =============================================================================

/// GET /v1/planning/events
///
/// List the session's tagged event weeks.
pub async fn list_events(State(state): State<AppState>) -> HandlerResult<EventListResponse> {
    Ok(Json(event_list(&state)))
}

/// POST /v1/planning/events
///
/// Tag the given weeks with an event label (last-write-wins per week).
pub async fn tag_event(
    State(state): State<AppState>,
    Json(request): Json<TagEventRequest>,
) -> HandlerResult<EventListResponse> {
    if request.label.is_empty() {
        return Err(AppError::BadRequest("Event label must not be empty".into()));
    }

    state.controller.tag_events(&request.weeks, &request.label);
    Ok(Json(event_list(&state)))
}

fn event_list(state: &AppState) -> EventListResponse {
    EventListResponse {
        events: state
            .controller
            .events()
            .into_iter()
            .map(|(week, label)| EventEntry { week, label })
            .collect(),
    }
}
