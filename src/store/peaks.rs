//! Peak-week persistence.
//!
//! Peak weeks are the only state the planning view keeps across sessions:
//! a per-year list of calendar week numbers, stored under the key
//! `peakWeeks_<year>` and replaced wholesale on every write. The file-backed
//! store is the backend analog of the frontend's old localStorage usage.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, RwLock};

use super::error::{ErrorContext, StoreError, StoreResult};

/// Storage key for a year's peak weeks.
pub fn peak_weeks_key(year: i32) -> String {
    format!("peakWeeks_{}", year)
}

/// Key-value store for per-year peak-week selections.
///
/// # Semantics
/// `set_peak_weeks` replaces the full set for that year (never a union with
/// the previous value); `get_peak_weeks` returns an empty list for years
/// never written. Week numbers outside 1..52 are accepted but will simply
/// never align with any rendered half's columns; they are not rejected.
pub trait PeakWeekStore: Send + Sync {
    /// Read the stored peak weeks for a year (empty if never set).
    fn get_peak_weeks(&self, year: i32) -> StoreResult<Vec<u32>>;

    /// Replace and persist the peak weeks for a year.
    fn set_peak_weeks(&self, year: i32, weeks: &[u32]) -> StoreResult<()>;
}

/// In-memory peak-week store for tests and ephemeral setups.
#[derive(Default)]
pub struct MemoryPeakWeekStore {
    entries: RwLock<HashMap<String, Vec<u32>>>,
}

impl MemoryPeakWeekStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PeakWeekStore for MemoryPeakWeekStore {
    fn get_peak_weeks(&self, year: i32) -> StoreResult<Vec<u32>> {
        let entries = self.entries.read().unwrap();
        Ok(entries.get(&peak_weeks_key(year)).cloned().unwrap_or_default())
    }

    fn set_peak_weeks(&self, year: i32, weeks: &[u32]) -> StoreResult<()> {
        let mut entries = self.entries.write().unwrap();
        entries.insert(peak_weeks_key(year), weeks.to_vec());
        Ok(())
    }
}

/// JSON file-backed peak-week store.
///
/// The whole store is one JSON object mapping `peakWeeks_<year>` keys to
/// integer arrays; it is rewritten on every update. There is a single
/// writer (the planning view), so a process-local mutex is enough to keep
/// read-modify-write cycles consistent.
pub struct FilePeakWeekStore {
    path: PathBuf,
    io_lock: Mutex<()>,
}

impl FilePeakWeekStore {
    /// Create a store persisting to `path`. The file is created lazily on
    /// the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            io_lock: Mutex::new(()),
        }
    }

    /// Path the store persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> StoreResult<HashMap<String, Vec<u32>>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            StoreError::persistence_with_context(
                format!("Failed to read {}: {}", self.path.display(), e),
                ErrorContext::new("get_peak_weeks").with_entity("peak_weeks"),
            )
        })?;

        serde_json::from_str(&content).map_err(|e| {
            StoreError::persistence_with_context(
                format!("Corrupt peak-week store {}: {}", self.path.display(), e),
                ErrorContext::new("get_peak_weeks").with_entity("peak_weeks"),
            )
        })
    }

    fn write_entries(&self, entries: &HashMap<String, Vec<u32>>) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    StoreError::persistence(format!(
                        "Failed to create {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let content = serde_json::to_string_pretty(entries)
            .map_err(|e| StoreError::internal(format!("Failed to encode peak weeks: {}", e)))?;

        fs::write(&self.path, content).map_err(|e| {
            StoreError::persistence_with_context(
                format!("Failed to write {}: {}", self.path.display(), e),
                ErrorContext::new("set_peak_weeks").with_entity("peak_weeks"),
            )
        })
    }
}

impl PeakWeekStore for FilePeakWeekStore {
    fn get_peak_weeks(&self, year: i32) -> StoreResult<Vec<u32>> {
        let _guard = self.io_lock.lock().unwrap();
        let entries = self.read_entries()?;
        Ok(entries.get(&peak_weeks_key(year)).cloned().unwrap_or_default())
    }

    fn set_peak_weeks(&self, year: i32, weeks: &[u32]) -> StoreResult<()> {
        let _guard = self.io_lock.lock().unwrap();
        let mut entries = self.read_entries()?;
        entries.insert(peak_weeks_key(year), weeks.to_vec());
        self.write_entries(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_format() {
        assert_eq!(peak_weeks_key(2023), "peakWeeks_2023");
    }

    #[test]
    fn test_memory_store_replaces_previous_value() {
        let store = MemoryPeakWeekStore::new();
        store.set_peak_weeks(2023, &[1, 2, 3]).unwrap();
        store.set_peak_weeks(2023, &[5, 9, 12]).unwrap();

        assert_eq!(store.get_peak_weeks(2023).unwrap(), vec![5, 9, 12]);
    }

    #[test]
    fn test_memory_store_is_keyed_by_year() {
        let store = MemoryPeakWeekStore::new();
        store.set_peak_weeks(2023, &[4]).unwrap();
        store.set_peak_weeks(2025, &[40]).unwrap();

        assert_eq!(store.get_peak_weeks(2023).unwrap(), vec![4]);
        assert_eq!(store.get_peak_weeks(2025).unwrap(), vec![40]);
    }

    #[test]
    fn test_unset_year_reads_empty() {
        let store = MemoryPeakWeekStore::new();
        assert!(store.get_peak_weeks(2024).unwrap().is_empty());
    }

    #[test]
    fn test_out_of_range_weeks_are_accepted() {
        // Permissive by design: weeks outside 1..52 are stored but can never
        // align with a rendered column.
        let store = MemoryPeakWeekStore::new();
        store.set_peak_weeks(2023, &[0, 7, 99]).unwrap();
        assert_eq!(store.get_peak_weeks(2023).unwrap(), vec![0, 7, 99]);
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("peak_weeks.json");

        let store = FilePeakWeekStore::new(&path);
        store.set_peak_weeks(2023, &[5, 9, 12]).unwrap();
        assert_eq!(store.get_peak_weeks(2023).unwrap(), vec![5, 9, 12]);

        // A fresh store over the same file sees the persisted value.
        let reopened = FilePeakWeekStore::new(&path);
        assert_eq!(reopened.get_peak_weeks(2023).unwrap(), vec![5, 9, 12]);
    }

    #[test]
    fn test_file_store_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePeakWeekStore::new(dir.path().join("absent.json"));
        assert!(store.get_peak_weeks(2023).unwrap().is_empty());
    }

    #[test]
    fn test_file_store_corrupt_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("peak_weeks.json");
        fs::write(&path, "not json").unwrap();

        let store = FilePeakWeekStore::new(&path);
        assert!(store.get_peak_weeks(2023).is_err());
    }

    #[test]
    fn test_file_store_uses_localstorage_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("peak_weeks.json");

        let store = FilePeakWeekStore::new(&path);
        store.set_peak_weeks(2025, &[30, 31]).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed["peakWeeks_2025"][0], 30);
    }
}
