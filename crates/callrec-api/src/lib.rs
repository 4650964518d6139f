//! API layer for the call record service
//!
//! HTTP handlers and DTOs for the call record CRUD endpoints.

#![forbid(unsafe_code)]

pub mod dto;
pub mod handlers;

// Re-export DTOs (common types)
pub use dto::ApiResponse;

// Re-export handler configuration
pub use handlers::configure_calls;
