//! Employee record model and related types.
//!
//! This module defines the [`EmployeeRecord`] struct and [`EmployeeStatus`] enum
//! for representing workforce members in the overview aggregation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents whether an employee is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    /// Currently employed and working.
    Active,
    /// On leave, terminated, or otherwise not counted as active.
    Inactive,
}

/// Represents one workforce member's attributes used for aggregation.
///
/// Records are supplied by an external data source and are never mutated
/// by the aggregation core.
///
/// # Example
///
/// ```
/// use workforce_overview::models::{EmployeeRecord, EmployeeStatus};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let employee = EmployeeRecord {
///     id: "emp_001".to_string(),
///     name: "Sarah Johnson".to_string(),
///     department: "Engineering".to_string(),
///     role: "Senior Developer".to_string(),
///     status: EmployeeStatus::Active,
///     performance_rating: 4.8,
///     attendance_rate: 96.5,
///     salary: Decimal::new(95000, 0),
///     join_date: NaiveDate::from_ymd_opt(2022, 3, 15).unwrap(),
///     avatar: "https://example.com/avatars/sarah.png".to_string(),
/// };
/// assert!(employee.is_active());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Department label from an open set (e.g., "Engineering").
    pub department: String,
    /// Job title.
    pub role: String,
    /// Whether the employee is active.
    pub status: EmployeeStatus,
    /// Performance rating on a 0.0 to 5.0 scale.
    pub performance_rating: f64,
    /// Attendance rate as a percentage (0.0 to 100.0).
    pub attendance_rate: f64,
    /// Annual salary.
    pub salary: Decimal,
    /// The date the employee joined.
    pub join_date: NaiveDate,
    /// Opaque avatar reference.
    #[serde(default)]
    pub avatar: String,
}

impl EmployeeRecord {
    /// Returns true if the employee's status is [`EmployeeStatus::Active`].
    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }
}
