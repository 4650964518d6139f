//! Repository trait for call record storage
//!
//! Defines the abstraction implemented by the database layer.

use crate::error::AppError;
use crate::models::CallRecord;
use async_trait::async_trait;

/// Call record repository
///
/// One implementation exists per storage backend; the handlers only talk to
/// this trait.
#[async_trait]
pub trait CallRecordRepository: Send + Sync {
    /// Find a record by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<CallRecord>, AppError>;

    /// Find all records where the number matches either side of the call
    async fn find_by_number(&self, number: &str) -> Result<Vec<CallRecord>, AppError>;

    /// Insert a new record; `start_time` is assigned by the database
    async fn create(&self, caller_number: &str, receiver_number: &str)
        -> Result<CallRecord, AppError>;

    /// Update caller and/or receiver of an existing record in place
    ///
    /// `None` fields are left untouched. Returns `None` if the id is unknown.
    async fn update(
        &self,
        id: i64,
        caller_number: Option<&str>,
        receiver_number: Option<&str>,
    ) -> Result<Option<CallRecord>, AppError>;

    /// Delete a record by ID; returns false if the id was unknown
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
