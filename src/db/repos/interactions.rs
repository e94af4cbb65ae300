//! Interaction repository
//!
//! Handles the customer_interactions table: create, fetch, partial update,
//! list. Partial updates use COALESCE so absent fields keep their stored
//! value, and refresh updated_at on every hit.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::{FromRow, PgPool};

/// Interaction record from database
#[derive(Debug, Clone, FromRow)]
pub struct Interaction {
    pub interaction_id: i32,
    pub customer_name: String,
    pub phone_number: String,
    pub request_type: String,
    pub preferred_time: Option<DateTime<Utc>>,
    pub additional_info: Option<String>,
    pub dealer_name: Option<String>,
    pub dealer_phone_number: Option<String>,
    pub interaction_summary: Option<String>,
    pub next_steps: Option<String>,
    pub customer_status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields accepted when a callback request is submitted.
///
/// Required columns are carried as `Option` on purpose: presence is enforced
/// by the NOT NULL constraints, not by the handler, so a missing field binds
/// as NULL and fails at the column.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewCallbackRequest {
    pub customer_name: Option<String>,
    pub phone_number: Option<String>,
    pub request_type: Option<String>,
    pub preferred_time: Option<DateTime<Utc>>,
}

/// Customer-side patch of an open callback request.
/// `None` (omitted or null in the payload) leaves the column unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallbackPatch {
    pub customer_name: Option<String>,
    pub additional_info: Option<String>,
}

/// Patch recorded after a dealer or salesperson talks to the customer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InteractionPatch {
    pub interaction_summary: Option<String>,
    pub next_steps: Option<String>,
    pub customer_status: Option<String>,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

const COLUMNS: &str = "interaction_id, customer_name, phone_number, request_type, \
     preferred_time, additional_info, dealer_name, dealer_phone_number, \
     interaction_summary, next_steps, customer_status, created_at, updated_at";

/// Interaction repository
pub struct InteractionRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> InteractionRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new callback request, returning the assigned id.
    ///
    /// Status is forced to 'Pending' regardless of the payload; every other
    /// column starts null.
    pub async fn create(&self, req: NewCallbackRequest) -> Result<i32, DbError> {
        let row: (i32,) = sqlx::query_as(
            r#"
            INSERT INTO customer_interactions
                (customer_name, phone_number, request_type, preferred_time, customer_status)
            VALUES ($1, $2, $3, $4, 'Pending')
            RETURNING interaction_id
            "#,
        )
        .bind(req.customer_name)
        .bind(req.phone_number)
        .bind(req.request_type)
        .bind(req.preferred_time)
        .fetch_one(self.pool)
        .await?;

        Ok(row.0)
    }

    /// Fetch a single interaction by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Interaction, DbError> {
        sqlx::query_as::<_, Interaction>(&format!(
            "SELECT {COLUMNS} FROM customer_interactions WHERE interaction_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "interaction",
            id: id.to_string(),
        })
    }

    /// Patch the customer-editable fields of a callback request.
    pub async fn update_callback(&self, id: i32, patch: CallbackPatch) -> Result<(), DbError> {
        let result = sqlx::query(
            r#"
            UPDATE customer_interactions
            SET customer_name = COALESCE($2, customer_name),
                additional_info = COALESCE($3, additional_info),
                updated_at = NOW()
            WHERE interaction_id = $1
            "#,
        )
        .bind(id)
        .bind(patch.customer_name)
        .bind(patch.additional_info)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "interaction",
                id: id.to_string(),
            });
        }
        Ok(())
    }

    /// Patch the outcome fields of an interaction.
    ///
    /// Shared by the customer-interaction and sales-interaction endpoints;
    /// they write the same columns.
    pub async fn update_interaction(&self, id: i32, patch: InteractionPatch) -> Result<(), DbError> {
        let result = sqlx::query(
            r#"
            UPDATE customer_interactions
            SET interaction_summary = COALESCE($2, interaction_summary),
                next_steps = COALESCE($3, next_steps),
                customer_status = COALESCE($4, customer_status),
                updated_at = NOW()
            WHERE interaction_id = $1
            "#,
        )
        .bind(id)
        .bind(patch.interaction_summary)
        .bind(patch.next_steps)
        .bind(patch.customer_status)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "interaction",
                id: id.to_string(),
            });
        }
        Ok(())
    }

    /// Fetch every interaction, in storage order.
    pub async fn list_all(&self) -> Result<Vec<Interaction>, DbError> {
        let rows = sqlx::query_as::<_, Interaction>(&format!(
            "SELECT {COLUMNS} FROM customer_interactions"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations};

    #[test]
    fn patch_fields_default_to_none_when_omitted() {
        let patch: InteractionPatch = serde_json::from_str(r#"{"next_steps": "call back"}"#)
            .expect("valid patch");
        assert_eq!(patch.next_steps.as_deref(), Some("call back"));
        assert!(patch.interaction_summary.is_none());
        assert!(patch.customer_status.is_none());
    }

    #[test]
    fn null_patch_field_is_treated_as_absent() {
        let patch: CallbackPatch =
            serde_json::from_str(r#"{"customer_name": null, "additional_info": "prefers SMS"}"#)
                .expect("valid patch");
        assert!(patch.customer_name.is_none());
        assert_eq!(patch.additional_info.as_deref(), Some("prefers SMS"));
    }

    // Integration tests - run with DATABASE_URL set
    // cargo test -- --ignored

    async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("schema setup failed");
        pool
    }

    fn new_request(name: &str) -> NewCallbackRequest {
        NewCallbackRequest {
            customer_name: Some(name.to_string()),
            phone_number: Some("555-1234".to_string()),
            request_type: Some("test-drive".to_string()),
            preferred_time: None,
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_assigns_id_and_pending_status() {
        let pool = test_pool().await;
        let repo = InteractionRepo::new(&pool);

        let id = repo.create(new_request("Alice")).await.expect("create failed");
        assert!(id > 0);

        let record = repo.find_by_id(id).await.expect("fetch failed");
        assert_eq!(record.customer_status, "Pending");
        assert_eq!(record.customer_name, "Alice");
        assert!(record.interaction_summary.is_none());
        assert!(record.updated_at >= record.created_at);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_without_required_field_fails_at_column() {
        let pool = test_pool().await;
        let repo = InteractionRepo::new(&pool);

        let req = NewCallbackRequest {
            customer_name: Some("Bob".to_string()),
            phone_number: None,
            request_type: Some("quote".to_string()),
            preferred_time: None,
        };
        let err = repo.create(req).await.expect_err("NOT NULL should reject");
        assert!(matches!(err, DbError::Sqlx(_)));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn partial_update_leaves_other_fields_untouched() {
        let pool = test_pool().await;
        let repo = InteractionRepo::new(&pool);

        let id = repo.create(new_request("Carol")).await.expect("create failed");
        repo.update_interaction(
            id,
            InteractionPatch {
                interaction_summary: Some("spoke about financing".to_string()),
                customer_status: Some("In Progress".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("update failed");

        let before = repo.find_by_id(id).await.expect("fetch failed");

        // Only next_steps this time; summary and status must survive.
        repo.update_interaction(
            id,
            InteractionPatch {
                next_steps: Some("schedule test drive".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("update failed");

        let after = repo.find_by_id(id).await.expect("fetch failed");
        assert_eq!(after.interaction_summary.as_deref(), Some("spoke about financing"));
        assert_eq!(after.customer_status, "In Progress");
        assert_eq!(after.next_steps.as_deref(), Some("schedule test drive"));
        assert_eq!(after.created_at, before.created_at);
        assert!(after.updated_at >= before.updated_at);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_missing_id_is_not_found() {
        let pool = test_pool().await;
        let repo = InteractionRepo::new(&pool);

        let err = repo
            .update_callback(999_999, CallbackPatch::default())
            .await
            .expect_err("should be missing");
        assert!(matches!(err, DbError::NotFound { .. }));
    }
}
