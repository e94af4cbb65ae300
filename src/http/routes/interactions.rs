//! Interaction recording endpoints
//!
//! The customer-interaction and sales-interaction endpoints accept the same
//! field set and write the same columns; they differ only in their success
//! message, so both funnel into one handler core.

use axum::extract::{Path, State};
use axum::routing::put;
use axum::{Json, Router};

use super::Envelope;
use crate::db::repos::{InteractionPatch, InteractionRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;

async fn record_interaction(
    state: &AppState,
    interaction_id: i32,
    patch: InteractionPatch,
    message: &'static str,
) -> Result<Json<Envelope>, ApiError> {
    InteractionRepo::new(state.pool())
        .update_interaction(interaction_id, patch)
        .await
        .map_err(ApiError::on_missing(format!(
            "Interaction with id {interaction_id} not found"
        )))?;

    Ok(Json(Envelope::success(message)))
}

/// PUT /api/customer-interaction/{id} - record a dealer follow-up
async fn update_customer_interaction(
    State(state): State<AppState>,
    Path(interaction_id): Path<i32>,
    Json(patch): Json<InteractionPatch>,
) -> Result<Json<Envelope>, ApiError> {
    record_interaction(
        &state,
        interaction_id,
        patch,
        "Interaction details updated successfully",
    )
    .await
}

/// PUT /api/sales-interaction/{id} - record a salesperson interaction
async fn record_sales_interaction(
    State(state): State<AppState>,
    Path(interaction_id): Path<i32>,
    Json(patch): Json<InteractionPatch>,
) -> Result<Json<Envelope>, ApiError> {
    record_interaction(
        &state,
        interaction_id,
        patch,
        "Salesperson interaction details recorded successfully",
    )
    .await
}

/// Interaction recording routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/customer-interaction/{id}", put(update_customer_interaction))
        .route("/sales-interaction/{id}", put(record_sales_interaction))
}
