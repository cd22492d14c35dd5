//! Configuration types for the workforce overview.
//!
//! This module contains the strongly-typed structures deserialized from the
//! YAML files of a dashboard configuration directory.

use serde::{Deserialize, Serialize};

use crate::error::DashboardResult;
use crate::models::{AttendanceDaySample, EmployeeRecord, MonthlyTrendPoint};
use crate::reveal::{DEFAULT_REVEAL_DURATION_MS, DEFAULT_REVEAL_STEPS, RevealConfig};

/// Default number of entries in each ranked list.
pub const DEFAULT_LIST_SIZE: usize = 5;

/// Default rating below which an employee is due for review.
pub const DEFAULT_REVIEW_THRESHOLD: f64 = 3.5;

fn default_duration_ms() -> i64 {
    DEFAULT_REVEAL_DURATION_MS as i64
}

fn default_steps() -> u32 {
    DEFAULT_REVEAL_STEPS
}

fn default_list_size() -> usize {
    DEFAULT_LIST_SIZE
}

fn default_review_threshold() -> f64 {
    DEFAULT_REVIEW_THRESHOLD
}

/// Reveal animation timing as written in `dashboard.yaml`.
///
/// Values are kept raw here and validated by [`RevealSettings::to_config`],
/// so a negative duration reaches the animator's own checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealSettings {
    /// Total reveal duration in milliseconds.
    #[serde(default = "default_duration_ms")]
    pub duration_ms: i64,
    /// Number of ticks.
    #[serde(default = "default_steps")]
    pub steps: u32,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            steps: default_steps(),
        }
    }
}

impl RevealSettings {
    /// Validates the settings into a [`RevealConfig`].
    pub fn to_config(&self) -> DashboardResult<RevealConfig> {
        RevealConfig::from_millis(self.duration_ms, self.steps)
    }
}

/// List sizes and thresholds for the overview lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewSettings {
    /// Number of top performers to show.
    #[serde(default = "default_list_size")]
    pub top_performers: usize,
    /// Number of recent hires to show.
    #[serde(default = "default_list_size")]
    pub recent_hires: usize,
    /// Maximum number of reviews due to show.
    #[serde(default = "default_list_size")]
    pub reviews_due: usize,
    /// Ratings strictly below this value are due for review.
    #[serde(default = "default_review_threshold")]
    pub review_threshold: f64,
}

impl Default for OverviewSettings {
    fn default() -> Self {
        Self {
            top_performers: DEFAULT_LIST_SIZE,
            recent_hires: DEFAULT_LIST_SIZE,
            reviews_due: DEFAULT_LIST_SIZE,
            review_threshold: DEFAULT_REVIEW_THRESHOLD,
        }
    }
}

/// Contents of `dashboard.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSettings {
    /// Reveal animation timing.
    #[serde(default)]
    pub reveal: RevealSettings,
    /// Overview list settings.
    #[serde(default)]
    pub overview: OverviewSettings,
}

/// Contents of `employees.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeesFile {
    /// Employee records.
    pub employees: Vec<EmployeeRecord>,
}

/// Contents of `attendance.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceFile {
    /// Daily samples, oldest first.
    pub days: Vec<AttendanceDaySample>,
}

/// Contents of `trends.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct TrendsFile {
    /// Monthly points, oldest first.
    pub months: Vec<MonthlyTrendPoint>,
}

/// All input data for one overview.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    /// Employee records.
    pub employees: Vec<EmployeeRecord>,
    /// Daily attendance samples, oldest first.
    pub attendance: Vec<AttendanceDaySample>,
    /// Monthly headcount and payroll series, oldest first.
    pub trends: Vec<MonthlyTrendPoint>,
}
