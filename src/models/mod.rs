//! Core data models for the workforce overview engine.
//!
//! This module contains the input records and the derived summary types
//! used throughout the engine.

mod attendance;
mod employee;
mod summary;
mod trend;

pub use attendance::{AttendanceDaySample, AttendanceSnapshot};
pub use employee::{EmployeeRecord, EmployeeStatus};
pub use summary::{DepartmentSummary, HeadlineMetrics};
pub use trend::{MonthlyTrendPoint, TrendDirection, TrendSummary};
