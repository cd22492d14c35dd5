//! Department breakdown.
//!
//! Groups employee records by department label and computes per-group
//! member count, mean performance and mean salary.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::models::{DepartmentSummary, EmployeeRecord};

#[derive(Debug)]
struct DepartmentAccumulator<'a> {
    department: &'a str,
    member_count: usize,
    rating_sum: f64,
    salary_sum: Decimal,
}

impl DepartmentAccumulator<'_> {
    fn into_summary(self) -> DepartmentSummary {
        // Groups are only created with a first member, so the count is never zero.
        let count = self.member_count;
        DepartmentSummary {
            department: self.department.to_string(),
            member_count: count,
            mean_performance: self.rating_sum / count as f64,
            mean_salary: self.salary_sum / Decimal::from(count),
        }
    }
}

/// Groups records by department in order of first appearance.
///
/// The order of the returned summaries follows the position at which each
/// department label is first seen in `employees`, not alphabetical order.
/// An empty collection yields an empty breakdown.
///
/// # Examples
///
/// ```
/// use workforce_overview::metrics::department_breakdown;
///
/// assert!(department_breakdown(&[]).is_empty());
/// ```
pub fn department_breakdown(employees: &[EmployeeRecord]) -> Vec<DepartmentSummary> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<DepartmentAccumulator<'_>> = Vec::new();

    for employee in employees {
        let department = employee.department.as_str();
        let position = *positions.entry(department).or_insert_with(|| {
            groups.push(DepartmentAccumulator {
                department,
                member_count: 0,
                rating_sum: 0.0,
                salary_sum: Decimal::ZERO,
            });
            groups.len() - 1
        });

        let group = &mut groups[position];
        group.member_count += 1;
        group.rating_sum += employee.performance_rating;
        group.salary_sum += employee.salary;
    }

    groups
        .into_iter()
        .map(DepartmentAccumulator::into_summary)
        .collect()
}
