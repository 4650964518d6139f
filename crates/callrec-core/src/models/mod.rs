//! Domain models for the call record service

pub mod call;

pub use call::CallRecord;
