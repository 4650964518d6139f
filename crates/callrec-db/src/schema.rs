//! Schema bootstrap
//!
//! Creates the `calls` table at startup if it does not exist yet, so a fresh
//! database works without any external setup step.

use callrec_core::{AppError, AppResult};
use sqlx::PgPool;
use tracing::info;

const CREATE_CALLS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS calls (
        id              BIGSERIAL PRIMARY KEY,
        caller_number   TEXT NOT NULL,
        receiver_number TEXT NOT NULL,
        start_time      TIMESTAMPTZ NOT NULL DEFAULT now()
    )
"#;

const CREATE_CALLER_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_calls_caller_number ON calls (caller_number)";

const CREATE_RECEIVER_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_calls_receiver_number ON calls (receiver_number)";

/// Ensure the `calls` table and its lookup indexes exist
pub async fn ensure_schema(pool: &PgPool) -> AppResult<()> {
    for statement in [CREATE_CALLS_TABLE, CREATE_CALLER_INDEX, CREATE_RECEIVER_INDEX] {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| AppError::Database(format!("Schema bootstrap failed: {}", e)))?;
    }

    info!("Database schema verified");

    Ok(())
}
