//! Schema setup for the customer_interactions table

use sqlx::PgPool;

/// Create the interactions table if it does not exist.
///
/// Runs once at process startup before the server accepts requests.
/// Idempotent; there is no migration versioning.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running schema setup...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS customer_interactions (
            interaction_id SERIAL PRIMARY KEY,
            customer_name VARCHAR(100) NOT NULL,
            phone_number VARCHAR(20) NOT NULL,
            request_type VARCHAR(50) NOT NULL,
            preferred_time TIMESTAMPTZ,
            additional_info TEXT,
            dealer_name VARCHAR(100),
            dealer_phone_number VARCHAR(20),
            interaction_summary TEXT,
            next_steps VARCHAR(255),
            customer_status VARCHAR(50) NOT NULL DEFAULT 'Pending',
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Schema setup complete");
    Ok(())
}
