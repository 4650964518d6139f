//! Callrec Core Library
//!
//! This crate provides the foundational types for the call record service:
//!
//! - The `CallRecord` domain model
//! - The repository trait implemented by the database layer
//! - Unified error handling with HTTP response mapping
//! - Application configuration

pub mod config;
pub mod error;
pub mod models;
pub mod traits;

pub use config::AppConfig;
pub use error::AppError;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
