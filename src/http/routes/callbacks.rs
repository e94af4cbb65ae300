//! Callback request endpoints: submission and customer-side updates

use axum::extract::{Path, State};
use axum::routing::{post, put};
use axum::{Json, Router};
use serde::Serialize;

use super::Envelope;
use crate::db::repos::{CallbackPatch, InteractionRepo, NewCallbackRequest};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Creation response envelope, carrying the assigned id
#[derive(Serialize)]
pub struct CreatedResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub request_id: i32,
}

/// POST /api/callback-request - submit a callback request
async fn create_callback_request(
    State(state): State<AppState>,
    Json(req): Json<NewCallbackRequest>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let request_id = InteractionRepo::new(state.pool())
        .create(req)
        .await
        .map_err(ApiError::Database)?;

    Ok(Json(CreatedResponse {
        status: "success",
        message: "Callback request created",
        request_id,
    }))
}

/// PUT /api/callback-request/{id} - amend name or notes on a request
async fn update_callback_request(
    State(state): State<AppState>,
    Path(request_id): Path<i32>,
    Json(patch): Json<CallbackPatch>,
) -> Result<Json<Envelope>, ApiError> {
    InteractionRepo::new(state.pool())
        .update_callback(request_id, patch)
        .await
        .map_err(ApiError::on_missing(format!(
            "Request with id {request_id} not found"
        )))?;

    Ok(Json(Envelope::success("Request updated successfully")))
}

/// Callback request routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/callback-request", post(create_callback_request))
        .route("/callback-request/{id}", put(update_callback_request))
}
