//! Daily attendance models.
//!
//! This module contains the [`AttendanceDaySample`] input type and the
//! [`AttendanceSnapshot`] derived from the most recent sample.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Present, absent and late counts for one calendar day.
///
/// Samples are supplied as an ordered sequence, oldest first.
///
/// # Example
///
/// ```
/// use workforce_overview::models::AttendanceDaySample;
/// use chrono::NaiveDate;
///
/// let sample = AttendanceDaySample {
///     date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///     present: 92,
///     absent: 4,
///     late: 2,
/// };
/// assert_eq!(sample.snapshot().present, 92);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceDaySample {
    /// The calendar day this sample covers.
    pub date: NaiveDate,
    /// Employees present.
    pub present: u32,
    /// Employees absent.
    pub absent: u32,
    /// Employees who arrived late.
    pub late: u32,
}

impl AttendanceDaySample {
    /// Returns the counts of this sample without its date.
    pub fn snapshot(&self) -> AttendanceSnapshot {
        AttendanceSnapshot {
            present: self.present,
            absent: self.absent,
            late: self.late,
        }
    }
}

/// Today's attendance counts.
///
/// The default value (all zeros) is what an empty sample sequence yields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSnapshot {
    /// Employees present.
    pub present: u32,
    /// Employees absent.
    pub absent: u32,
    /// Employees who arrived late.
    pub late: u32,
}
