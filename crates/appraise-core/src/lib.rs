//! Appraise Core - domain model for performance reviews
//!
//! This crate provides the storage-agnostic half of the review system:
//! - The `Review` entity with field validation enforced at construction
//!   and on every update
//! - Validation rules for the year, summary, and employee reference
//! - The error taxonomy shared with the persistence layer

pub mod errors;
pub mod model;
pub mod rules;

// Re-export commonly used types
pub use errors::{AppraiseError, Result};
pub use model::Review;
