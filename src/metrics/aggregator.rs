//! The metrics aggregator over an employee collection.

use rust_decimal::Decimal;

use crate::models::{
    AttendanceDaySample, AttendanceSnapshot, DepartmentSummary, EmployeeRecord, HeadlineMetrics,
};
use crate::reveal::RevealTargets;

use super::{attendance, departments, rankings};

/// Derives summary statistics and groupings from a borrowed employee collection.
///
/// Every operation is pure and total: results are recomputed from the slice on
/// each call and an empty collection yields zero/neutral values instead of an
/// error.
///
/// # Example
///
/// ```
/// use workforce_overview::metrics::MetricsAggregator;
/// use rust_decimal::Decimal;
///
/// let aggregator = MetricsAggregator::new(&[]);
/// assert_eq!(aggregator.total_count(), 0);
/// assert_eq!(aggregator.mean_performance(), 0.0);
/// assert_eq!(aggregator.total_payroll(), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MetricsAggregator<'a> {
    employees: &'a [EmployeeRecord],
}

impl<'a> MetricsAggregator<'a> {
    /// Creates an aggregator over the given records.
    pub fn new(employees: &'a [EmployeeRecord]) -> Self {
        Self { employees }
    }

    /// Returns the underlying records.
    pub fn employees(&self) -> &'a [EmployeeRecord] {
        self.employees
    }

    /// Count of all records.
    pub fn total_count(&self) -> usize {
        self.employees.len()
    }

    /// Count of records whose status is active.
    pub fn active_count(&self) -> usize {
        self.employees.iter().filter(|e| e.is_active()).count()
    }

    /// Arithmetic mean of performance ratings, or 0 when empty.
    pub fn mean_performance(&self) -> f64 {
        self.mean_of(|e| e.performance_rating)
    }

    /// Arithmetic mean of attendance rates, or 0 when empty.
    pub fn mean_attendance(&self) -> f64 {
        self.mean_of(|e| e.attendance_rate)
    }

    /// Sum of all salaries.
    pub fn total_payroll(&self) -> Decimal {
        self.employees.iter().map(|e| e.salary).sum()
    }

    /// Per-department count, mean performance and mean salary, in order of
    /// first appearance.
    pub fn department_breakdown(&self) -> Vec<DepartmentSummary> {
        departments::department_breakdown(self.employees)
    }

    /// The `n` highest-rated records; see [`super::top_performers`].
    pub fn top_performers(&self, n: usize) -> Vec<&'a EmployeeRecord> {
        rankings::top_performers(self.employees, n)
    }

    /// The `n` most recently hired records; see [`super::most_recent_hires`].
    pub fn most_recent_hires(&self, n: usize) -> Vec<&'a EmployeeRecord> {
        rankings::most_recent_hires(self.employees, n)
    }

    /// Up to `n` records rated strictly below `threshold`, in original order.
    pub fn reviews_due(&self, threshold: f64, n: usize) -> Vec<&'a EmployeeRecord> {
        rankings::reviews_due(self.employees, threshold, n)
    }

    /// Counts from the last attendance sample, or zeros when there are none.
    pub fn today_snapshot(&self, samples: &[AttendanceDaySample]) -> AttendanceSnapshot {
        attendance::today_snapshot(samples)
    }

    /// All headline scalars together.
    pub fn headline(&self) -> HeadlineMetrics {
        HeadlineMetrics {
            total_employees: self.total_count(),
            active_employees: self.active_count(),
            mean_performance: self.mean_performance(),
            mean_attendance: self.mean_attendance(),
            total_payroll: self.total_payroll(),
        }
    }

    /// The four scalars the reveal animator eases towards.
    pub fn reveal_targets(&self) -> RevealTargets {
        RevealTargets {
            employees: self.total_count() as u64,
            performance: self.mean_performance(),
            attendance: self.mean_attendance(),
            payroll: self.total_payroll(),
        }
    }

    fn mean_of<F>(&self, field: F) -> f64
    where
        F: Fn(&EmployeeRecord) -> f64,
    {
        if self.employees.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.employees.iter().map(field).sum();
        sum / self.employees.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmployeeStatus;
    use chrono::NaiveDate;

    fn employee(id: &str, rating: f64, attendance: f64, salary: i64) -> EmployeeRecord {
        EmployeeRecord {
            id: id.to_string(),
            name: format!("Employee {}", id),
            department: "Engineering".to_string(),
            role: "Developer".to_string(),
            status: EmployeeStatus::Active,
            performance_rating: rating,
            attendance_rate: attendance,
            salary: Decimal::new(salary, 0),
            join_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            avatar: String::new(),
        }
    }

    #[test]
    fn test_empty_collection_is_neutral() {
        let aggregator = MetricsAggregator::new(&[]);
        assert_eq!(aggregator.total_count(), 0);
        assert_eq!(aggregator.active_count(), 0);
        assert_eq!(aggregator.mean_performance(), 0.0);
        assert_eq!(aggregator.mean_attendance(), 0.0);
        assert!(!aggregator.mean_performance().is_nan());
        assert_eq!(aggregator.total_payroll(), Decimal::ZERO);
        assert!(aggregator.department_breakdown().is_empty());
        assert!(aggregator.top_performers(5).is_empty());
        assert!(aggregator.most_recent_hires(5).is_empty());
        assert!(aggregator.reviews_due(3.5, 5).is_empty());
    }

    #[test]
    fn test_mean_performance_of_three_records() {
        let employees = vec![
            employee("a", 5.0, 90.0, 1),
            employee("b", 3.0, 90.0, 1),
            employee("c", 4.0, 90.0, 1),
        ];
        let aggregator = MetricsAggregator::new(&employees);
        assert_eq!(aggregator.mean_performance(), 4.0);

        let top: Vec<f64> = aggregator
            .top_performers(2)
            .iter()
            .map(|e| e.performance_rating)
            .collect();
        assert_eq!(top, vec![5.0, 4.0]);
    }

    #[test]
    fn test_active_count_excludes_inactive() {
        let mut inactive = employee("b", 4.0, 90.0, 1);
        inactive.status = EmployeeStatus::Inactive;
        let employees = vec![employee("a", 4.0, 90.0, 1), inactive];

        let aggregator = MetricsAggregator::new(&employees);
        assert_eq!(aggregator.total_count(), 2);
        assert_eq!(aggregator.active_count(), 1);
    }

    #[test]
    fn test_mean_attendance_and_payroll() {
        let employees = vec![
            employee("a", 4.0, 90.0, 80000),
            employee("b", 4.0, 100.0, 70000),
        ];
        let aggregator = MetricsAggregator::new(&employees);
        assert_eq!(aggregator.mean_attendance(), 95.0);
        assert_eq!(aggregator.total_payroll(), Decimal::new(150000, 0));
    }

    #[test]
    fn test_headline_matches_individual_operations() {
        let employees = vec![
            employee("a", 4.5, 92.0, 85000),
            employee("b", 3.5, 98.0, 65000),
        ];
        let aggregator = MetricsAggregator::new(&employees);
        let headline = aggregator.headline();

        assert_eq!(headline.total_employees, aggregator.total_count());
        assert_eq!(headline.active_employees, aggregator.active_count());
        assert_eq!(headline.mean_performance, aggregator.mean_performance());
        assert_eq!(headline.mean_attendance, aggregator.mean_attendance());
        assert_eq!(headline.total_payroll, aggregator.total_payroll());
    }

    #[test]
    fn test_reveal_targets_carry_headline_scalars() {
        let employees = vec![
            employee("a", 4.0, 90.0, 50000),
            employee("b", 5.0, 100.0, 60000),
        ];
        let targets = MetricsAggregator::new(&employees).reveal_targets();
        assert_eq!(targets.employees, 2);
        assert_eq!(targets.performance, 4.5);
        assert_eq!(targets.attendance, 95.0);
        assert_eq!(targets.payroll, Decimal::new(110000, 0));
    }

    #[test]
    fn test_repeated_calls_are_consistent() {
        let employees = vec![employee("a", 4.0, 90.0, 1), employee("b", 2.0, 80.0, 2)];
        let aggregator = MetricsAggregator::new(&employees);
        assert_eq!(
            aggregator.department_breakdown(),
            aggregator.department_breakdown()
        );
        assert_eq!(aggregator.mean_performance(), aggregator.mean_performance());
    }
}
