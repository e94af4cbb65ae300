//! Route handlers, one module per resource

pub mod callbacks;
pub mod customer_info;
pub mod health;
pub mod interactions;
pub mod reports;

use axum::Router;
use serde::Serialize;

use super::server::AppState;

/// Success envelope returned by mutating endpoints
#[derive(Serialize)]
pub struct Envelope {
    pub status: &'static str,
    pub message: &'static str,
}

impl Envelope {
    pub fn success(message: &'static str) -> Self {
        Self {
            status: "success",
            message,
        }
    }
}

/// All routes under /api
pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(callbacks::router())
        .merge(customer_info::router())
        .merge(interactions::router())
        .merge(reports::router())
}
