//! Aggregation logic for the workforce overview.
//!
//! This module contains the [`MetricsAggregator`] and the free functions it
//! delegates to: department breakdown, ranked lists, today's attendance
//! snapshot, and month-over-month trend summaries.

mod aggregator;
mod attendance;
mod departments;
mod rankings;
mod trends;

pub use aggregator::MetricsAggregator;
pub use attendance::today_snapshot;
pub use departments::department_breakdown;
pub use rankings::{most_recent_hires, reviews_due, top_performers};
pub use trends::{employee_growth, payroll_growth};
