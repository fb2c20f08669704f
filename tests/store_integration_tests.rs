//! Integration tests for the store layer: source selection, peak-week
//! persistence across store instances, and snapshot checksums.

mod support;

use std::sync::Arc;

use buildtracker_rust::api::{ForecastRecord, ItemRecord};
use buildtracker_rust::store::peaks::{FilePeakWeekStore, PeakWeekStore};
use buildtracker_rust::store::snapshot_checksum;
use buildtracker_rust::store::sources::LocalDataSource;
use buildtracker_rust::store::{PlanningDataSource, SourceFactory, SourceType};

use support::with_scoped_env;

fn item(sid: &str) -> ItemRecord {
    ItemRecord {
        sid: sid.to_string(),
        requested_date: "2023-01-02".to_string(),
        delivery_date: "2023-02-13".to_string(),
        flavour: "S/4H Public".to_string(),
    }
}

#[test]
fn source_type_from_env_prefers_explicit_setting() {
    with_scoped_env(
        &[
            ("BUILDTRACKER_SOURCE", Some("local")),
            ("BUILDTRACKER_API_BASE_URL", Some("http://tracker:8000/api")),
        ],
        || {
            assert_eq!(SourceType::from_env(), SourceType::Local);
        },
    );
}

#[test]
fn source_type_from_env_infers_remote_from_base_url() {
    with_scoped_env(
        &[
            ("BUILDTRACKER_SOURCE", None),
            ("BUILDTRACKER_API_BASE_URL", Some("http://tracker:8000/api")),
        ],
        || {
            assert_eq!(SourceType::from_env(), SourceType::Remote);
        },
    );
}

#[test]
fn source_type_from_env_defaults_to_local() {
    with_scoped_env(
        &[
            ("BUILDTRACKER_SOURCE", None),
            ("BUILDTRACKER_API_BASE_URL", None),
        ],
        || {
            assert_eq!(SourceType::from_env(), SourceType::Local);
        },
    );
}

#[tokio::test]
async fn factory_builds_a_working_local_source() {
    let source = SourceFactory::create(SourceType::Local, None).unwrap();
    assert!(source.health_check().await.unwrap());
    assert!(source.fetch_items().await.unwrap().is_empty());
    assert!(source.fetch_forecasts().await.unwrap().is_empty());
}

#[tokio::test]
async fn local_source_serves_seeded_collections() {
    let source = LocalDataSource::new();
    source.seed_items(vec![item("QX1"), item("QX2")]);
    source.seed_forecasts(vec![ForecastRecord {
        sid: "F1".to_string(),
        item_sid: Some("QX1".to_string()),
    }]);

    let shared: Arc<dyn PlanningDataSource> = Arc::new(source.clone());
    let items = shared.fetch_items().await.unwrap();
    let forecasts = shared.fetch_forecasts().await.unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(forecasts.len(), 1);
    assert_eq!(forecasts[0].item_sid.as_deref(), Some("QX1"));
}

#[test]
fn peak_weeks_survive_store_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("peaks/peak_weeks.json");

    {
        let store = FilePeakWeekStore::new(&path);
        store.set_peak_weeks(2023, &[5, 9, 12]).unwrap();
        store.set_peak_weeks(2025, &[33]).unwrap();
    }

    // A new process would reopen the same file.
    let store = FilePeakWeekStore::new(&path);
    assert_eq!(store.get_peak_weeks(2023).unwrap(), vec![5, 9, 12]);
    assert_eq!(store.get_peak_weeks(2025).unwrap(), vec![33]);
}

#[test]
fn peak_weeks_replacement_is_not_a_union() {
    let dir = tempfile::tempdir().unwrap();
    let store = FilePeakWeekStore::new(dir.path().join("peak_weeks.json"));

    store.set_peak_weeks(2023, &[1, 2, 3, 4]).unwrap();
    store.set_peak_weeks(2023, &[5, 9, 12]).unwrap();

    assert_eq!(store.get_peak_weeks(2023).unwrap(), vec![5, 9, 12]);
}

#[test]
fn snapshot_checksum_tracks_content_changes() {
    let forecasts = vec![ForecastRecord {
        sid: "F1".to_string(),
        item_sid: Some("QX1".to_string()),
    }];

    let baseline = snapshot_checksum(&[item("QX1")], &forecasts).unwrap();
    let same = snapshot_checksum(&[item("QX1")], &forecasts).unwrap();
    let changed = snapshot_checksum(&[item("QX9")], &forecasts).unwrap();

    assert_eq!(baseline, same);
    assert_ne!(baseline, changed);
}
