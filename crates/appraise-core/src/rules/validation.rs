use crate::errors::{AppraiseError, Result};

/// Earliest year a review may be filed for
pub const MIN_YEAR: i32 = 2000;

/// Validate a review year
///
/// # Errors
/// * `InvalidYear` - if the year is before 2000
pub fn validate_year(year: i32) -> Result<()> {
    if year < MIN_YEAR {
        return Err(AppraiseError::InvalidYear { year });
    }
    Ok(())
}

/// Validate a review summary
///
/// # Errors
/// * `InvalidSummary` - if the summary is empty or whitespace-only
pub fn validate_summary(summary: &str) -> Result<()> {
    if summary.trim().is_empty() {
        return Err(AppraiseError::InvalidSummary {
            reason: "Summary cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Validate an employee reference
///
/// The reference is not checked against an employee table; only positivity
/// is enforced here.
///
/// # Errors
/// * `InvalidEmployeeId` - if the id is zero or negative
pub fn validate_employee_id(employee_id: i64) -> Result<()> {
    if employee_id <= 0 {
        return Err(AppraiseError::InvalidEmployeeId { employee_id });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_year_boundary() {
        assert!(validate_year(2000).is_ok());
        assert!(validate_year(2024).is_ok());
        assert!(matches!(
            validate_year(1999),
            Err(AppraiseError::InvalidYear { year: 1999 })
        ));
    }

    #[test]
    fn test_validate_summary_rejects_blank() {
        assert!(validate_summary("Good work").is_ok());
        assert!(matches!(
            validate_summary(""),
            Err(AppraiseError::InvalidSummary { .. })
        ));
        assert!(matches!(
            validate_summary("   \t\n  "),
            Err(AppraiseError::InvalidSummary { .. })
        ));
    }

    #[test]
    fn test_validate_employee_id_requires_positive() {
        assert!(validate_employee_id(1).is_ok());
        assert!(matches!(
            validate_employee_id(0),
            Err(AppraiseError::InvalidEmployeeId { employee_id: 0 })
        ));
        assert!(matches!(
            validate_employee_id(-5),
            Err(AppraiseError::InvalidEmployeeId { employee_id: -5 })
        ));
    }
}
