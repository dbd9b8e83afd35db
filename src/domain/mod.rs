//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `worksheet` - Questions, sections and the worksheet form with validation
//! - `exercise` - Stored, reusable worksheets
//! - `layout` - Pure pagination of a worksheet into positioned draw operations
//! - `samples` - Generated sample content

pub mod exercise;
pub mod foundation;
pub mod layout;
pub mod samples;
pub mod worksheet;
