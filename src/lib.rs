//! # BuildTracker Planning Backend
//!
//! Rust backend for the BuildTracker capacity planning view.
//!
//! This crate builds the timeline planning grid the frontend renders: it
//! reads the item and forecast collections from the tracker REST API,
//! reconciles forecasts against their referenced items, lays the retained
//! rows out over 26 calendar-week columns per half-year, and overlays the
//! user-selected peak weeks and calendar events on the same week axis. The
//! grid is exposed to the React frontend through an axum REST API.
//!
//! ## Features
//!
//! - **Calendar weeks**: the tracker's own week-of-year arithmetic (not
//!   ISO-8601) over item request/delivery dates
//! - **Reconciliation**: forecast/item join with configurable deduplication
//!   and planning-year bucketing
//! - **Grid building**: run-length merged occupancy spans per row
//! - **Overlays**: persisted per-year peak weeks plus session events
//! - **HTTP API**: REST endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects (DTOs) for API responses
//! - [`models`]: calendar-week arithmetic and week ranges
//! - [`routes`]: route-specific data types
//! - [`services`]: reconciliation, grid building, overlays, and the
//!   planning view controller
//! - [`store`]: data-source abstraction over the tracker REST API and the
//!   peak-week persistence
//! - [`http`]: axum-based HTTP server and request handlers

pub mod api;
pub mod models;

pub mod routes;

pub mod services;
pub mod store;

#[cfg(feature = "http-server")]
pub mod http;
