//! Derived summary models.
//!
//! These types are never stored; they are recomputed from the employee
//! collection on every call.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Grouped statistics for one department.
///
/// # Example
///
/// ```
/// use workforce_overview::models::DepartmentSummary;
/// use rust_decimal::Decimal;
///
/// let summary = DepartmentSummary {
///     department: "Engineering".to_string(),
///     member_count: 3,
///     mean_performance: 4.5,
///     mean_salary: Decimal::new(90000, 0),
/// };
/// assert_eq!(summary.member_count, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentSummary {
    /// Department label.
    pub department: String,
    /// Number of employees in the department.
    pub member_count: usize,
    /// Mean performance rating of the department's members.
    pub mean_performance: f64,
    /// Mean salary of the department's members.
    pub mean_salary: Decimal,
}

/// The headline scalar aggregates of the employee collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadlineMetrics {
    /// Total number of employee records.
    pub total_employees: usize,
    /// Number of active employees.
    pub active_employees: usize,
    /// Mean performance rating, 0 for an empty collection.
    pub mean_performance: f64,
    /// Mean attendance rate, 0 for an empty collection.
    pub mean_attendance: f64,
    /// Sum of all salaries.
    pub total_payroll: Decimal,
}
