//! HTTP request handlers

pub mod call;

pub use call::configure as configure_calls;
