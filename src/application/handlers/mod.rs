//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod exercise;
pub mod worksheet;
