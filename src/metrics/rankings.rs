//! Ranked and filtered employee lists.
//!
//! All functions borrow from the input slice and never reorder it. Sorting is
//! stable, so records that compare equal keep their original relative order.

use crate::models::EmployeeRecord;

/// Returns the `n` records with the highest performance rating.
///
/// Ties are broken by original collection order. The result has
/// `min(n, employees.len())` entries.
///
/// # Examples
///
/// ```
/// use workforce_overview::metrics::top_performers;
///
/// assert!(top_performers(&[], 5).is_empty());
/// ```
pub fn top_performers(employees: &[EmployeeRecord], n: usize) -> Vec<&EmployeeRecord> {
    let mut ranked: Vec<&EmployeeRecord> = employees.iter().collect();
    ranked.sort_by(|a, b| b.performance_rating.total_cmp(&a.performance_rating));
    ranked.truncate(n);
    ranked
}

/// Returns the `n` records with the latest join date, newest first.
///
/// Ties are broken by original collection order.
pub fn most_recent_hires(employees: &[EmployeeRecord], n: usize) -> Vec<&EmployeeRecord> {
    let mut ranked: Vec<&EmployeeRecord> = employees.iter().collect();
    ranked.sort_by(|a, b| b.join_date.cmp(&a.join_date));
    ranked.truncate(n);
    ranked
}

/// Returns up to `n` records rated strictly below `threshold`.
///
/// This is a filter, not a ranking: results keep original collection order.
pub fn reviews_due(employees: &[EmployeeRecord], threshold: f64, n: usize) -> Vec<&EmployeeRecord> {
    employees
        .iter()
        .filter(|employee| employee.performance_rating < threshold)
        .take(n)
        .collect()
}
