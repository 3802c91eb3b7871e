use thiserror::Error;

/// Result type alias using AppraiseError
pub type Result<T> = std::result::Result<T, AppraiseError>;

/// Error taxonomy for review validation, lifecycle, and persistence
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppraiseError {
    // ===== Validation Errors =====
    /// Review year is before the earliest accepted year
    #[error("Invalid year: {year} (must be 2000 or later)")]
    InvalidYear { year: i32 },

    /// Review summary is empty or whitespace-only
    #[error("Invalid summary: {reason}")]
    InvalidSummary { reason: String },

    /// Employee reference is zero or negative
    #[error("Invalid employee id: {employee_id} (must be positive)")]
    InvalidEmployeeId { employee_id: i64 },

    // ===== Lifecycle Errors =====
    /// Operation requires the review to have been saved first
    #[error("Cannot {op} a review that has not been saved")]
    NotPersisted { op: String },

    /// Persisted review has no entry in the identity map
    #[error("Review {review_id} is not registered in the identity map")]
    NotRegistered { review_id: i64 },

    // ===== Persistence Errors =====
    /// Backing store failure
    #[error("Persistence error: {message}")]
    Persistence { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_carry_the_rejected_value() {
        let err = AppraiseError::InvalidYear { year: 1999 };
        assert!(err.to_string().contains("1999"));

        let err = AppraiseError::InvalidEmployeeId { employee_id: -3 };
        assert!(err.to_string().contains("-3"));
    }

    #[test]
    fn test_not_persisted_names_the_operation() {
        let err = AppraiseError::NotPersisted {
            op: "delete".to_string(),
        };
        assert_eq!(err.to_string(), "Cannot delete a review that has not been saved");
    }
}
