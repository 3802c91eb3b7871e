use serde::Serialize;

use crate::errors::Result;
use crate::rules::validation;

/// Review - one performance-review record for an employee
///
/// Fields are validated at construction and on every update: `year` is 2000
/// or later, `summary` is non-empty after trimming, and `employee_id` is
/// positive. A Review starts transient (`id` is None) and becomes persisted
/// once the store assigns it a primary key.
///
/// Does not derive `Deserialize`: hydration goes through `Review::new` so
/// the field invariants hold for every instance, wherever it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Review {
    /// Primary key assigned by the backing store (None while transient)
    id: Option<i64>,

    /// Year the review covers (2000 or later)
    year: i32,

    /// Free-text summary (non-empty after trimming)
    summary: String,

    /// Reference to the reviewed employee (positive, not referentially enforced)
    employee_id: i64,
}

impl Review {
    /// Create a new transient Review
    ///
    /// Validates all three fields atomically and never touches the backing
    /// store.
    ///
    /// # Errors
    /// * `InvalidYear` - if year is before 2000
    /// * `InvalidSummary` - if summary is empty or whitespace-only
    /// * `InvalidEmployeeId` - if employee_id is zero or negative
    pub fn new(year: i32, summary: impl Into<String>, employee_id: i64) -> Result<Self> {
        let summary = summary.into();
        validation::validate_year(year)?;
        validation::validate_summary(&summary)?;
        validation::validate_employee_id(employee_id)?;

        Ok(Self {
            id: None,
            year,
            summary,
            employee_id,
        })
    }

    /// Primary key assigned by the backing store, None while transient
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn employee_id(&self) -> i64 {
        self.employee_id
    }

    /// Check if this Review has been saved to the backing store
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Change the review year
    ///
    /// Validates before assigning; on error the current value is kept.
    ///
    /// # Errors
    /// * `InvalidYear` - if year is before 2000
    pub fn set_year(&mut self, year: i32) -> Result<()> {
        validation::validate_year(year)?;
        self.year = year;
        Ok(())
    }

    /// Change the review summary
    ///
    /// Validates before assigning; on error the current value is kept.
    ///
    /// # Errors
    /// * `InvalidSummary` - if summary is empty or whitespace-only
    pub fn set_summary(&mut self, summary: impl Into<String>) -> Result<()> {
        let summary = summary.into();
        validation::validate_summary(&summary)?;
        self.summary = summary;
        Ok(())
    }

    /// Change the employee reference
    ///
    /// Validates before assigning; on error the current value is kept.
    ///
    /// # Errors
    /// * `InvalidEmployeeId` - if the id is zero or negative
    pub fn set_employee_id(&mut self, employee_id: i64) -> Result<()> {
        validation::validate_employee_id(employee_id)?;
        self.employee_id = employee_id;
        Ok(())
    }

    /// Record the primary key assigned by the backing store
    ///
    /// Called by the persistence layer after a successful insert or when
    /// hydrating a fetched row.
    pub fn mark_persisted(&mut self, id: i64) {
        self.id = Some(id);
    }

    /// Demote this Review back to transient
    ///
    /// Called by the persistence layer after the backing row is deleted.
    /// The instance stays usable; only its identity is gone.
    pub fn mark_transient(&mut self) {
        self.id = None;
    }
}
