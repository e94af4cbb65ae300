//! Reporting endpoints

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::db::repos::{Interaction, InteractionRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// One row of the customer status report
#[derive(Serialize)]
pub struct StatusReportEntry {
    pub customer_name: String,
    pub status: String,
    pub interaction_summary: Option<String>,
    pub dealer_name: Option<String>,
}

impl From<Interaction> for StatusReportEntry {
    fn from(i: Interaction) -> Self {
        Self {
            customer_name: i.customer_name,
            status: i.customer_status,
            interaction_summary: i.interaction_summary,
            dealer_name: i.dealer_name,
        }
    }
}

/// GET /api/reports/customer-status - status of every tracked interaction
async fn customer_status_report(
    State(state): State<AppState>,
) -> Result<Json<Vec<StatusReportEntry>>, ApiError> {
    let interactions = InteractionRepo::new(state.pool())
        .list_all()
        .await
        .map_err(ApiError::Database)?;

    Ok(Json(
        interactions.into_iter().map(StatusReportEntry::from).collect(),
    ))
}

/// Report routes
pub fn router() -> Router<AppState> {
    Router::new().route("/reports/customer-status", get(customer_status_report))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_entry_projects_status_fields() {
        let entry = StatusReportEntry {
            customer_name: "Alice".into(),
            status: "Closed".into(),
            interaction_summary: None,
            dealer_name: None,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["customer_name"], "Alice");
        assert_eq!(json["status"], "Closed");
        assert!(json["interaction_summary"].is_null());
        assert!(json["dealer_name"].is_null());
        assert_eq!(json.as_object().unwrap().len(), 4);
    }
}
