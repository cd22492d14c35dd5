//! Overview composition.
//!
//! Builds the complete, serializable overview for one view activation from a
//! [`Dataset`] and the configured list sizes.

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::actions::QuickAction;
use crate::config::{Dataset, OverviewSettings};
use crate::metrics::{MetricsAggregator, employee_growth, payroll_growth};
use crate::models::{
    AttendanceSnapshot, DepartmentSummary, EmployeeRecord, HeadlineMetrics, TrendSummary,
};
use crate::reveal::RevealTargets;

/// Everything the overview view displays, computed fresh for one activation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewReport {
    /// Correlation id of the activation that built this report.
    pub activation_id: Uuid,
    /// Headline scalar metrics.
    pub headline: HeadlineMetrics,
    /// Per-department statistics in order of first appearance.
    pub departments: Vec<DepartmentSummary>,
    /// Highest-rated employees.
    pub top_performers: Vec<EmployeeRecord>,
    /// Most recently hired employees.
    pub recent_hires: Vec<EmployeeRecord>,
    /// Employees rated below the review threshold.
    pub reviews_due: Vec<EmployeeRecord>,
    /// Today's attendance counts.
    pub today: AttendanceSnapshot,
    /// Headcount growth over the trend series.
    pub employee_growth: TrendSummary,
    /// Payroll growth over the trend series.
    pub payroll_growth: TrendSummary,
    /// Quick actions offered, in display order.
    pub quick_actions: Vec<QuickAction>,
}

impl OverviewReport {
    /// Computes the report from scratch.
    ///
    /// # Example
    ///
    /// ```
    /// use workforce_overview::config::{Dataset, OverviewSettings};
    /// use workforce_overview::overview::OverviewReport;
    ///
    /// let report = OverviewReport::build(&Dataset::default(), &OverviewSettings::default());
    /// assert_eq!(report.headline.total_employees, 0);
    /// assert!(report.departments.is_empty());
    /// ```
    pub fn build(dataset: &Dataset, settings: &OverviewSettings) -> Self {
        let activation_id = Uuid::new_v4();
        let aggregator = MetricsAggregator::new(&dataset.employees);

        let owned = |records: Vec<&EmployeeRecord>| -> Vec<EmployeeRecord> {
            records.into_iter().cloned().collect()
        };

        let report = Self {
            activation_id,
            headline: aggregator.headline(),
            departments: aggregator.department_breakdown(),
            top_performers: owned(aggregator.top_performers(settings.top_performers)),
            recent_hires: owned(aggregator.most_recent_hires(settings.recent_hires)),
            reviews_due: owned(
                aggregator.reviews_due(settings.review_threshold, settings.reviews_due),
            ),
            today: aggregator.today_snapshot(&dataset.attendance),
            employee_growth: employee_growth(&dataset.trends),
            payroll_growth: payroll_growth(&dataset.trends),
            quick_actions: QuickAction::ALL.to_vec(),
        };

        info!(
            activation_id = %activation_id,
            total_employees = report.headline.total_employees,
            active_employees = report.headline.active_employees,
            departments = report.departments.len(),
            total_payroll = %report.headline.total_payroll,
            "Overview built"
        );

        report
    }

    /// The four headline scalars for the reveal animator.
    pub fn reveal_targets(&self) -> RevealTargets {
        RevealTargets {
            employees: self.headline.total_employees as u64,
            performance: self.headline.mean_performance,
            attendance: self.headline.mean_attendance,
            payroll: self.headline.total_payroll,
        }
    }
}
