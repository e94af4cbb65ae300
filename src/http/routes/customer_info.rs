//! Customer info projection for dealer follow-up

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::db::repos::{Interaction, InteractionRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Dealer-facing view of a callback request.
/// Plain projection, no envelope.
#[derive(Serialize)]
pub struct CustomerInfo {
    pub customer_name: String,
    pub phone_number: String,
    pub request_type: String,
    pub additional_info: Option<String>,
    pub preferred_time: Option<DateTime<Utc>>,
    pub dealer_name: Option<String>,
}

impl From<Interaction> for CustomerInfo {
    fn from(i: Interaction) -> Self {
        Self {
            customer_name: i.customer_name,
            phone_number: i.phone_number,
            request_type: i.request_type,
            additional_info: i.additional_info,
            preferred_time: i.preferred_time,
            dealer_name: i.dealer_name,
        }
    }
}

/// GET /api/customer-info/{id} - customer details for a specific interaction
async fn get_customer_info(
    State(state): State<AppState>,
    Path(interaction_id): Path<i32>,
) -> Result<Json<CustomerInfo>, ApiError> {
    let interaction = InteractionRepo::new(state.pool())
        .find_by_id(interaction_id)
        .await
        .map_err(ApiError::on_missing(format!(
            "No customer information found for interaction ID {interaction_id}"
        )))?;

    Ok(Json(CustomerInfo::from(interaction)))
}

/// Customer info routes
pub fn router() -> Router<AppState> {
    Router::new().route("/customer-info/{id}", get(get_customer_info))
}
