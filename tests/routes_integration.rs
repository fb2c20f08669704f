//! Integration coverage for the DTO surface and the HTTP wiring.

use buildtracker_rust::api::{
    ForecastRecord, GridCell, Half, ItemRecord, SUPPORTED_PLANNING_YEARS, WEEKS_PER_HALF,
};
use buildtracker_rust::services::reconcile::DedupeKey;

#[test]
fn test_grid_constants() {
    assert_eq!(WEEKS_PER_HALF, 26);
    assert_eq!(SUPPORTED_PLANNING_YEARS, [2023, 2025]);
}

#[test]
fn test_item_record_roundtrip() {
    let item = ItemRecord {
        sid: "QX1".to_string(),
        requested_date: "2023-01-02".to_string(),
        delivery_date: "2023-02-13".to_string(),
        flavour: "S/4 Cloud".to_string(),
    };

    let json = serde_json::to_string(&item).unwrap();
    let back: ItemRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, item);
}

#[test]
fn test_forecast_record_roundtrip() {
    let forecast = ForecastRecord {
        sid: "F1".to_string(),
        item_sid: None,
    };

    let json = serde_json::to_string(&forecast).unwrap();
    let back: ForecastRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, forecast);
}

#[test]
fn test_grid_cell_wire_shape() {
    let json = serde_json::to_string(&GridCell::Span {
        width: 4,
        label: "F7".to_string(),
    })
    .unwrap();
    assert!(json.contains(r#""kind":"span""#));
    assert!(json.contains(r#""width":4"#));
}

#[test]
fn test_selector_parsing() {
    assert_eq!("second".parse::<Half>().unwrap(), Half::Second);

    let dedupe: DedupeKey = serde_json::from_str(r#""item""#).unwrap();
    assert_eq!(dedupe, DedupeKey::Item);
    let dedupe: DedupeKey = serde_json::from_str(r#""forecast""#).unwrap();
    assert_eq!(dedupe, DedupeKey::Forecast);
}

#[cfg(feature = "http-server")]
mod http_wiring {
    use std::sync::Arc;

    use buildtracker_rust::http::dto::GridQuery;
    use buildtracker_rust::http::{create_router, AppState};
    use buildtracker_rust::services::planning::PlanningController;
    use buildtracker_rust::store::peaks::MemoryPeakWeekStore;
    use buildtracker_rust::store::sources::LocalDataSource;

    #[test]
    fn test_router_builds_with_local_state() {
        let controller = Arc::new(PlanningController::new(
            Arc::new(LocalDataSource::new()),
            Arc::new(MemoryPeakWeekStore::new()),
        ));
        let _router = create_router(AppState::new(controller));
    }

    #[test]
    fn test_grid_query_accepts_partial_selection() {
        let query: GridQuery = serde_json::from_str(r#"{"year": 2025}"#).unwrap();
        assert_eq!(query.year, Some(2025));
        assert!(query.half.is_none());
        assert!(query.dedupe.is_none());
    }
}
