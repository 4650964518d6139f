//! Repository implementations
//!
//! Concrete implementations of the repository traits defined in
//! callrec-core, using sqlx for PostgreSQL access.

pub mod call_repo;

pub use call_repo::PgCallRepository;
