//! Call record repository implementation
//!
//! PostgreSQL-backed storage for call records. Uses runtime queries (not
//! compile-time macros) to avoid requiring a database connection at build
//! time.

use async_trait::async_trait;
use callrec_core::{models::CallRecord, traits::CallRecordRepository, AppError, AppResult};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{debug, error, instrument};

/// PostgreSQL implementation of CallRecordRepository
pub struct PgCallRepository {
    pool: PgPool,
}

impl PgCallRepository {
    /// Create a new call record repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const CALL_SELECT_COLUMNS: &str = "id, caller_number, receiver_number, start_time";

#[async_trait]
impl CallRecordRepository for PgCallRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> AppResult<Option<CallRecord>> {
        debug!("Finding call record by id: {}", id);

        let query = format!("SELECT {} FROM calls WHERE id = $1", CALL_SELECT_COLUMNS);

        let result = sqlx::query_as::<sqlx::Postgres, CallRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!("Database error finding call record {}: {}", id, e);
                AppError::Database(format!("Failed to find call record: {}", e))
            })?;

        Ok(result.map(Into::into))
    }

    #[instrument(skip(self))]
    async fn find_by_number(&self, number: &str) -> AppResult<Vec<CallRecord>> {
        debug!("Finding call records involving number: {}", number);

        let query = format!(
            "SELECT {} FROM calls WHERE caller_number = $1 OR receiver_number = $1 \
             ORDER BY start_time DESC",
            CALL_SELECT_COLUMNS
        );

        let rows = sqlx::query_as::<sqlx::Postgres, CallRow>(&query)
            .bind(number)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!("Database error finding call records for {}: {}", number, e);
                AppError::Database(format!("Failed to fetch call records: {}", e))
            })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self))]
    async fn create(
        &self,
        caller_number: &str,
        receiver_number: &str,
    ) -> AppResult<CallRecord> {
        debug!(
            "Creating call record: {} -> {}",
            caller_number, receiver_number
        );

        // start_time is assigned here, once, and never touched again
        let query = format!(
            "INSERT INTO calls (caller_number, receiver_number, start_time) \
             VALUES ($1, $2, now()) RETURNING {}",
            CALL_SELECT_COLUMNS
        );

        let row = sqlx::query_as::<sqlx::Postgres, CallRow>(&query)
            .bind(caller_number)
            .bind(receiver_number)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!("Database error creating call record: {}", e);
                AppError::Database(format!("Failed to create call record: {}", e))
            })?;

        Ok(row.into())
    }

    #[instrument(skip(self))]
    async fn update(
        &self,
        id: i64,
        caller_number: Option<&str>,
        receiver_number: Option<&str>,
    ) -> AppResult<Option<CallRecord>> {
        debug!("Updating call record: {}", id);

        // COALESCE keeps the stored value for fields the caller left out;
        // id and start_time are deliberately not part of the SET list
        let query = format!(
            "UPDATE calls \
             SET caller_number = COALESCE($2, caller_number), \
                 receiver_number = COALESCE($3, receiver_number) \
             WHERE id = $1 RETURNING {}",
            CALL_SELECT_COLUMNS
        );

        let row = sqlx::query_as::<sqlx::Postgres, CallRow>(&query)
            .bind(id)
            .bind(caller_number)
            .bind(receiver_number)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!("Database error updating call record {}: {}", id, e);
                AppError::Database(format!("Failed to update call record: {}", e))
            })?;

        Ok(row.map(Into::into))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> AppResult<bool> {
        debug!("Deleting call record: {}", id);

        let result = sqlx::query("DELETE FROM calls WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("Database error deleting call record {}: {}", id, e);
                AppError::Database(format!("Failed to delete call record: {}", e))
            })?;

        Ok(result.rows_affected() > 0)
    }
}

/// Helper struct for mapping database rows to the domain model
#[derive(Debug, sqlx::FromRow)]
struct CallRow {
    id: i64,
    caller_number: String,
    receiver_number: String,
    start_time: DateTime<Utc>,
}

impl From<CallRow> for CallRecord {
    fn from(row: CallRow) -> Self {
        Self {
            id: row.id,
            caller_number: row.caller_number,
            receiver_number: row.receiver_number,
            start_time: row.start_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_row_conversion() {
        let now = Utc::now();
        let row = CallRow {
            id: 1,
            caller_number: "51999888777".to_string(),
            receiver_number: "15551234567".to_string(),
            start_time: now,
        };

        let record: CallRecord = row.into();
        assert_eq!(record.id, 1);
        assert_eq!(record.caller_number, "51999888777");
        assert_eq!(record.receiver_number, "15551234567");
        assert_eq!(record.start_time, now);
    }
}
