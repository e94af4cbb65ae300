//! leadline: HTTP API for the customer callback lifecycle
//!
//! A customer submits a callback request, a dealer follows up, a salesperson
//! records the outcome, and reporting reads the whole table back. One
//! Postgres table, five endpoints, nothing clever.

pub mod config;
pub mod db;
pub mod http;

pub use config::ServerConfig;
pub use http::server::{build_router, serve, AppState};
