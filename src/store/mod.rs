//! Data access for the planning view.
//!
//! This module abstracts the two collaborator reads (items, forecasts) and
//! the peak-week persistence behind traits, allowing different backends to
//! be swapped easily.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API, planning controller)      │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  PlanningDataSource (source.rs) - Abstract Interface    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┴──────────────────────────────┐
//!     │   Local source (in-memory) │ Remote source    │
//!     │                            │ (tracker REST)   │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! The module includes:
//! - `source`: trait definition for the item/forecast reads
//! - `sources::local`: in-memory implementation for unit testing and local
//!   development
//! - `sources::remote`: reqwest client against the tracker REST API
//!   (feature `remote-source`)
//! - `peaks`: peak-week key-value persistence (memory and JSON file)
//! - `factory`: factory for creating source instances
//! - `source_config`: TOML configuration file support
//! - `checksum`: snapshot checksums for change detection

// Feature flag guard: at least one source backend must be enabled.
#[cfg(not(any(feature = "remote-source", feature = "local-source")))]
compile_error!("Enable at least one data source backend feature.");

pub mod checksum;
pub mod error;
pub mod factory;
pub mod peaks;
pub mod source;
pub mod source_config;
pub mod sources;

pub use checksum::snapshot_checksum;
pub use error::{ErrorContext, StoreError, StoreResult};
pub use factory::{SourceFactory, SourceType};
pub use peaks::{peak_weeks_key, FilePeakWeekStore, MemoryPeakWeekStore, PeakWeekStore};
pub use source::PlanningDataSource;
pub use source_config::SourceConfig;
pub use sources::LocalDataSource;
#[cfg(feature = "remote-source")]
pub use sources::RemoteDataSource;
