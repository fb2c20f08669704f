//! Planning view controller.
//!
//! Owns the view selection (year, half, dedupe key), the session event
//! overlay, and the fetched item/forecast snapshot. The grid itself is
//! rebuilt in full from the snapshot on every trigger; nothing is patched
//! incrementally.
//!
//! The two collaborator reads are issued concurrently and joined before any
//! grid state changes. A refresh captures its (year, generation) token at
//! dispatch time; if the selection moved while the fetches were in flight,
//! the landed snapshot is discarded instead of applied over the newer
//! selection.

use std::future::Future;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::api::{ForecastRecord, Half, ItemRecord, PlanningGridData};
use crate::services::grid::build_grid;
use crate::services::overlay::{render_event_row, render_peak_row, EventOverlay};
use crate::services::reconcile::{reconcile, DedupeKey};
use crate::store::checksum::snapshot_checksum;
use crate::store::error::{StoreError, StoreResult};
use crate::store::peaks::PeakWeekStore;
use crate::store::source::PlanningDataSource;

/// Errors surfaced by the controller.
#[derive(Debug, thiserror::Error)]
pub enum PlanningError {
    /// No successful refresh has completed yet.
    #[error("no data snapshot available; refresh first")]
    NoSnapshot,

    /// The selection changed while a fetch was in flight; the fetched data
    /// was discarded.
    #[error("selection changed while the fetch was in flight")]
    Superseded,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result of a refresh round-trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The fetched snapshot was applied.
    Applied { checksum: String },
    /// The fetched snapshot was stale and discarded.
    Stale,
}

/// Item/forecast data as of one completed refresh.
#[derive(Debug, Clone)]
struct Snapshot {
    items: Vec<ItemRecord>,
    forecasts: Vec<ForecastRecord>,
    checksum: String,
}

struct ViewState {
    selected_year: i32,
    selected_half: Half,
    dedupe_key: DedupeKey,
    events: EventOverlay,
    snapshot: Option<Snapshot>,
    /// Bumped on every year change; in-flight fetches carry the value they
    /// were dispatched under.
    generation: u64,
}

/// The planning view's single owner of mutable state.
pub struct PlanningController {
    source: Arc<dyn PlanningDataSource>,
    peaks: Arc<dyn PeakWeekStore>,
    state: RwLock<ViewState>,
}

impl PlanningController {
    /// Create a controller over a data source and peak-week store.
    ///
    /// The initial selection matches the frontend's defaults: year 2023,
    /// first half, forecast-sid deduplication.
    pub fn new(source: Arc<dyn PlanningDataSource>, peaks: Arc<dyn PeakWeekStore>) -> Self {
        Self {
            source,
            peaks,
            state: RwLock::new(ViewState {
                selected_year: 2023,
                selected_half: Half::First,
                dedupe_key: DedupeKey::default(),
                events: EventOverlay::new(),
                snapshot: None,
                generation: 0,
            }),
        }
    }

    pub fn selected_year(&self) -> i32 {
        self.state.read().selected_year
    }

    pub fn selected_half(&self) -> Half {
        self.state.read().selected_half
    }

    /// Whether a snapshot has been applied since construction.
    pub fn has_snapshot(&self) -> bool {
        self.state.read().snapshot.is_some()
    }

    /// Change the selected year. Invalidates in-flight fetches dispatched
    /// under the previous year.
    pub fn select_year(&self, year: i32) {
        let mut state = self.state.write();
        if state.selected_year != year {
            state.selected_year = year;
            state.generation = state.generation.wrapping_add(1);
        }
    }

    /// Change the displayed half. Rendering-only; fetched data stays valid.
    pub fn select_half(&self, half: Half) {
        self.state.write().selected_half = half;
    }

    pub fn set_dedupe_key(&self, dedupe_key: DedupeKey) {
        self.state.write().dedupe_key = dedupe_key;
    }

    /// Apply a full selection in one step.
    pub fn select(&self, year: i32, half: Half, dedupe_key: DedupeKey) {
        self.select_year(year);
        self.select_half(half);
        self.set_dedupe_key(dedupe_key);
    }

    /// Fetch both collections and apply them as the current snapshot.
    ///
    /// The two reads run concurrently and the snapshot is only assembled
    /// once both have resolved; a failure of either leaves the previous
    /// snapshot untouched. The dispatch-time token is checked again after
    /// the barrier: if the selection moved meanwhile, the landed data is
    /// discarded and `RefreshOutcome::Stale` is reported.
    ///
    /// The token is captured when `refresh` is called, not when the future
    /// is first polled.
    pub fn refresh(&self) -> impl Future<Output = StoreResult<RefreshOutcome>> + Send + '_ {
        let (token_year, token_generation) = {
            let state = self.state.read();
            (state.selected_year, state.generation)
        };
        let source = Arc::clone(&self.source);

        async move {
            let (items, forecasts) =
                futures::try_join!(source.fetch_items(), source.fetch_forecasts())?;
            let checksum = snapshot_checksum(&items, &forecasts)?;

            let mut state = self.state.write();
            if state.generation != token_generation || state.selected_year != token_year {
                log::debug!(
                    "discarding stale fetch dispatched for year {}",
                    token_year
                );
                return Ok(RefreshOutcome::Stale);
            }

            if let Some(previous) = &state.snapshot {
                if previous.checksum == checksum {
                    log::debug!("refetched snapshot unchanged (checksum {})", checksum);
                }
            }

            state.snapshot = Some(Snapshot {
                items,
                forecasts,
                checksum: checksum.clone(),
            });

            Ok(RefreshOutcome::Applied { checksum })
        }
    }

    /// Rebuild the full grid payload from the current snapshot.
    pub fn view(&self) -> Result<PlanningGridData, PlanningError> {
        let state = self.state.read();
        let snapshot = state.snapshot.as_ref().ok_or(PlanningError::NoSnapshot)?;

        let (rows, excluded) = reconcile(
            &snapshot.forecasts,
            &snapshot.items,
            state.selected_year,
            state.dedupe_key,
        );
        let grid = build_grid(&rows, state.selected_half);
        let peak_weeks = self.peaks.get_peak_weeks(state.selected_year)?;

        Ok(PlanningGridData {
            year: state.selected_year,
            half: state.selected_half,
            month_labels: state
                .selected_half
                .month_labels()
                .iter()
                .map(|label| label.to_string())
                .collect(),
            peak_row: render_peak_row(state.selected_half, &peak_weeks),
            event_row: render_event_row(state.selected_half, &state.events),
            grid,
            excluded,
            snapshot_checksum: snapshot.checksum.clone(),
        })
    }

    /// Select, refresh, and rebuild in one step (the grid endpoint's flow).
    pub async fn load_grid(
        &self,
        year: i32,
        half: Half,
        dedupe_key: DedupeKey,
    ) -> Result<PlanningGridData, PlanningError> {
        self.select(year, half, dedupe_key);
        match self.refresh().await? {
            RefreshOutcome::Stale => Err(PlanningError::Superseded),
            RefreshOutcome::Applied { .. } => self.view(),
        }
    }

    /// Replace and persist the peak weeks for a year.
    pub fn set_peak_weeks(&self, year: i32, weeks: &[u32]) -> StoreResult<()> {
        self.peaks.set_peak_weeks(year, weeks)
    }

    /// Read the persisted peak weeks for a year.
    pub fn peak_weeks(&self, year: i32) -> StoreResult<Vec<u32>> {
        self.peaks.get_peak_weeks(year)
    }

    /// Tag weeks with an event label (session-scoped, last-write-wins).
    pub fn tag_events(&self, weeks: &[u32], label: &str) {
        self.state.write().events.tag_event(weeks, label);
    }

    /// All tagged events, ordered by week.
    pub fn events(&self) -> Vec<(u32, String)> {
        self.state.read().events.entries()
    }

    /// Health of the underlying data source.
    pub async fn source_health(&self) -> StoreResult<bool> {
        self.source.health_check().await
    }
}
