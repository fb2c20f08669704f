//! Data source configuration file support.
//!
//! This module provides utilities for reading the data source configuration
//! from TOML configuration files.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::error::StoreError;
use super::factory::SourceType;

/// Data source configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub source: SourceSettings,
    #[serde(default)]
    pub remote: RemoteSettings,
    #[serde(default)]
    pub peaks: PeakStoreSettings,
}

/// Source type settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSettings {
    #[serde(rename = "type")]
    pub source_type: String,
}

/// Remote tracker API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteSettings {
    /// Base URL of the tracker REST API, e.g. `http://127.0.0.1:8000/api`.
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_sec: u64,
}

impl Default for RemoteSettings {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            request_timeout_sec: default_request_timeout(),
        }
    }
}

/// Peak-week persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeakStoreSettings {
    #[serde(default = "default_peak_store_path")]
    pub path: String,
}

impl Default for PeakStoreSettings {
    fn default() -> Self {
        Self {
            path: default_peak_store_path(),
        }
    }
}

fn default_request_timeout() -> u64 {
    30
}

fn default_peak_store_path() -> String {
    "peak_weeks.json".to_string()
}

impl SourceConfig {
    /// Load source configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(SourceConfig)` if successful
    /// * `Err(StoreError)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            StoreError::configuration(format!("Failed to read config file: {}", e))
        })?;

        let config: SourceConfig = toml::from_str(&content).map_err(|e| {
            StoreError::configuration(format!("Failed to parse config file: {}", e))
        })?;

        Ok(config)
    }

    /// Load source configuration from the default location.
    ///
    /// Searches for `buildtracker.toml` in the current directory, a
    /// `config/` subdirectory, and the parent directory.
    ///
    /// # Returns
    /// * `Ok(SourceConfig)` if found and parsed successfully
    /// * `Err(StoreError)` if no config file found or parse error
    pub fn from_default_location() -> Result<Self, StoreError> {
        let search_paths = vec![
            PathBuf::from("buildtracker.toml"),
            PathBuf::from("config/buildtracker.toml"),
            PathBuf::from("../buildtracker.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(StoreError::configuration(
            "No buildtracker.toml found in standard locations",
        ))
    }

    /// Get the source type from configuration.
    pub fn source_type(&self) -> Result<SourceType, String> {
        SourceType::from_str(&self.source.source_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_local_config() {
        let toml = r#"
[source]
type = "local"
"#;

        let config: SourceConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.source.source_type, "local");
        assert_eq!(config.source_type().unwrap(), SourceType::Local);
        assert_eq!(config.peaks.path, "peak_weeks.json");
        assert_eq!(config.remote.request_timeout_sec, 30);
    }

    #[test]
    fn test_parse_remote_config() {
        let toml = r#"
[source]
type = "remote"

[remote]
base_url = "http://127.0.0.1:8000/api"
request_timeout_sec = 10

[peaks]
path = "/var/lib/buildtracker/peak_weeks.json"
"#;

        let config: SourceConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.source_type().unwrap(), SourceType::Remote);
        assert_eq!(config.remote.base_url, "http://127.0.0.1:8000/api");
        assert_eq!(config.remote.request_timeout_sec, 10);
        assert_eq!(config.peaks.path, "/var/lib/buildtracker/peak_weeks.json");
    }

    #[test]
    fn test_unknown_source_type_is_rejected() {
        let toml = r#"
[source]
type = "carrier-pigeon"
"#;

        let config: SourceConfig = toml::from_str(toml).unwrap();
        assert!(config.source_type().is_err());
    }
}
