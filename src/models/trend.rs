//! Monthly workforce trend models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One month of the headcount and payroll series shown on the growth charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyTrendPoint {
    /// Month label (e.g., "Jan").
    pub month: String,
    /// Headcount at the end of the month.
    pub employees: u64,
    /// Total payroll for the month.
    pub payroll: Decimal,
}

/// Direction of change between the first and last point of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// The series grew.
    Up,
    /// The series shrank.
    Down,
    /// No change, or not enough data to tell.
    Flat,
}

/// Summary of a trend series for a chart header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendSummary {
    /// Value of the first point.
    pub first: Decimal,
    /// Value of the last point.
    pub last: Decimal,
    /// Growth from first to last as a percentage, rounded to one decimal place.
    pub growth_percent: Decimal,
    /// Sign of the growth.
    pub direction: TrendDirection,
}
