//! Callrec Database Layer
//!
//! PostgreSQL access for the call record service:
//!
//! - Connection pool management with sqlx
//! - Schema bootstrap for the `calls` table
//! - The `CallRecordRepository` implementation

pub mod pool;
pub mod repositories;
pub mod schema;

pub use pool::create_pool;
pub use repositories::PgCallRepository;
pub use schema::ensure_schema;

// Re-export commonly used types
pub use callrec_core::{AppError, AppResult};
pub use sqlx::PgPool;
