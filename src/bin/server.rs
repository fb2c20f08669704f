//! BuildTracker Planning HTTP Server Binary
//!
//! This is the main entry point for the planning REST API server.
//! It builds the data source, wires up the planning controller, and starts
//! serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Run with the in-memory source (default)
//! cargo run --bin buildtracker-server --features "local-source,http-server"
//!
//! # Run against the tracker REST API
//! BUILDTRACKER_API_BASE_URL=http://127.0.0.1:8000/api \
//!   cargo run --bin buildtracker-server --features "remote-source,http-server"
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8090)
//! - `BUILDTRACKER_SOURCE`: Data source type ("local" or "remote")
//! - `BUILDTRACKER_API_BASE_URL`: Tracker API base URL (remote source)
//! - `BUILDTRACKER_PEAK_STORE`: Peak-week store path (default from config)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use buildtracker_rust::http::{create_router, AppState};
use buildtracker_rust::services::planning::PlanningController;
use buildtracker_rust::store::peaks::FilePeakWeekStore;
use buildtracker_rust::store::source_config::SourceConfig;
use buildtracker_rust::store::{SourceFactory, SourceType};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting BuildTracker Planning Server");

    // Optional config file; the environment can stand in for all of it.
    let config = SourceConfig::from_default_location().ok();

    let source_type = config
        .as_ref()
        .and_then(|c| c.source_type().ok())
        .unwrap_or_else(SourceType::from_env);
    let source = SourceFactory::create(source_type, config.as_ref())
        .map_err(|e| anyhow::anyhow!(e.to_string()))?;
    info!("Data source initialized ({:?})", source_type);

    let peak_store_path = env::var("BUILDTRACKER_PEAK_STORE").unwrap_or_else(|_| {
        config
            .as_ref()
            .map(|c| c.peaks.path.clone())
            .unwrap_or_else(|| "peak_weeks.json".to_string())
    });
    let peaks = Arc::new(FilePeakWeekStore::new(&peak_store_path));
    info!("Peak-week store at {}", peak_store_path);

    // Create application state
    let controller = Arc::new(PlanningController::new(source, peaks));
    let state = AppState::new(controller);

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8090);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
