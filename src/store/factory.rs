//! Data source factory for dependency injection.
//!
//! This module provides utilities for creating data source instances based
//! on runtime configuration.

use std::str::FromStr;
use std::sync::Arc;

use super::error::{StoreError, StoreResult};
use super::source::PlanningDataSource;
use super::source_config::SourceConfig;
use super::sources::LocalDataSource;
#[cfg(feature = "remote-source")]
use super::sources::RemoteDataSource;

/// Data source type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceType {
    /// Tracker REST API over HTTP
    Remote,
    /// In-memory local source
    Local,
}

impl FromStr for SourceType {
    type Err = String;

    /// Parse source type from string.
    ///
    /// # Arguments
    /// * `s` - String representation ("remote", "local")
    ///
    /// # Returns
    /// * `Ok(SourceType)` if valid
    /// * `Err` if invalid
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "remote" | "http" | "rest" => Ok(Self::Remote),
            "local" => Ok(Self::Local),
            _ => Err(format!("Unknown source type: {}", s)),
        }
    }
}

impl SourceType {
    /// Get source type from environment variables.
    ///
    /// Reads `BUILDTRACKER_SOURCE`. Defaults to Remote if a tracker API base
    /// URL is present, otherwise Local.
    pub fn from_env() -> Self {
        if let Ok(val) = std::env::var("BUILDTRACKER_SOURCE") {
            return val.parse().unwrap_or(Self::Local);
        }

        if std::env::var("BUILDTRACKER_API_BASE_URL").is_ok() {
            Self::Remote
        } else {
            Self::Local
        }
    }
}

/// Factory for creating data source instances.
pub struct SourceFactory;

impl SourceFactory {
    /// Create an empty in-memory source.
    pub fn create_local() -> Arc<dyn PlanningDataSource> {
        Arc::new(LocalDataSource::new())
    }

    /// Create a remote source from settings.
    #[cfg(feature = "remote-source")]
    pub fn create_remote(config: Option<&SourceConfig>) -> StoreResult<Arc<dyn PlanningDataSource>> {
        let (base_url, timeout) = match config {
            Some(cfg) if !cfg.remote.base_url.is_empty() => (
                cfg.remote.base_url.clone(),
                cfg.remote.request_timeout_sec,
            ),
            _ => (
                std::env::var("BUILDTRACKER_API_BASE_URL").map_err(|_| {
                    StoreError::configuration(
                        "Remote source requires 'remote.base_url' or BUILDTRACKER_API_BASE_URL",
                    )
                })?,
                30,
            ),
        };

        let source = RemoteDataSource::new(base_url, timeout)?;
        Ok(Arc::new(source))
    }

    /// Create a data source of the requested type.
    ///
    /// # Arguments
    /// * `source_type` - Which backend to construct
    /// * `config` - Optional file configuration (required settings may also
    ///   come from the environment)
    ///
    /// # Returns
    /// * `Ok(Arc<dyn PlanningDataSource>)` ready for injection
    /// * `Err(StoreError::ConfigurationError)` if the backend cannot be
    ///   constructed
    #[cfg(feature = "remote-source")]
    pub fn create(
        source_type: SourceType,
        config: Option<&SourceConfig>,
    ) -> StoreResult<Arc<dyn PlanningDataSource>> {
        match source_type {
            SourceType::Local => Ok(Self::create_local()),
            SourceType::Remote => Self::create_remote(config),
        }
    }

    /// Create a data source of the requested type.
    #[cfg(not(feature = "remote-source"))]
    pub fn create(
        source_type: SourceType,
        _config: Option<&SourceConfig>,
    ) -> StoreResult<Arc<dyn PlanningDataSource>> {
        match source_type {
            SourceType::Local => Ok(Self::create_local()),
            SourceType::Remote => Err(StoreError::configuration(
                "Remote source feature not enabled",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_type_parsing() {
        assert_eq!("local".parse::<SourceType>().unwrap(), SourceType::Local);
        assert_eq!("remote".parse::<SourceType>().unwrap(), SourceType::Remote);
        assert_eq!("REST".parse::<SourceType>().unwrap(), SourceType::Remote);
        assert!("oracle".parse::<SourceType>().is_err());
    }

    #[test]
    fn test_create_local() {
        let source = SourceFactory::create(SourceType::Local, None).unwrap();
        // Smoke check through the trait object.
        let healthy = tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(source.health_check())
            .unwrap();
        assert!(healthy);
    }
}
