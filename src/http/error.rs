//! API error types with IntoResponse
//!
//! Errors are converted to the envelope the API speaks:
//! `{"status": "error", "message": <string>}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Targeted record not found (404); the message is endpoint-specific
    NotFound { message: String },

    /// Database error (500, logged)
    Database(DbError),
}

impl ApiError {
    /// Map a repository error, substituting an endpoint-specific
    /// not-found message.
    pub fn on_missing(message: impl Into<String>) -> impl FnOnce(DbError) -> ApiError {
        let message = message.into();
        move |e| match e {
            DbError::NotFound { .. } => ApiError::NotFound { message },
            other => ApiError::Database(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::NotFound { message } => (
                StatusCode::NOT_FOUND,
                json!({
                    "status": "error",
                    "message": message
                }),
            ),
            Self::Database(e) => {
                // Log the actual error, return a generic message
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "status": "error",
                        "message": "an internal error occurred"
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn not_found_is_404_with_envelope() {
        let err = ApiError::NotFound {
            message: "Interaction with id 7 not found".into(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "Interaction with id 7 not found");
    }

    #[tokio::test]
    async fn database_error_is_500_and_generic() {
        let err = ApiError::Database(DbError::Sqlx(sqlx::Error::PoolClosed));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "an internal error occurred");
    }

    #[test]
    fn on_missing_rewrites_only_not_found() {
        let missing = DbError::NotFound {
            resource: "interaction",
            id: "1".into(),
        };
        match ApiError::on_missing("Request with id 1 not found")(missing) {
            ApiError::NotFound { message } => {
                assert_eq!(message, "Request with id 1 not found")
            }
            other => panic!("expected NotFound, got {other:?}"),
        }

        let db = DbError::Sqlx(sqlx::Error::PoolClosed);
        assert!(matches!(
            ApiError::on_missing("unused")(db),
            ApiError::Database(_)
        ));
    }
}
