//! HTTP layer
//!
//! Axum server with request tracing, permissive CORS, graceful shutdown,
//! and JSON error envelopes.

pub mod error;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, serve, AppState};
