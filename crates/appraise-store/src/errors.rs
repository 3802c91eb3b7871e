//! Error handling for appraise-store
//!
//! Re-exports the shared taxonomy and maps rusqlite failures into it

use appraise_core::AppraiseError;

/// Result type alias using AppraiseError
pub type Result<T> = appraise_core::Result<T>;

/// Create a persistence error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> AppraiseError {
    AppraiseError::Persistence {
        message: err.to_string(),
    }
}
