//! Month-over-month trend summaries for the growth charts.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{MonthlyTrendPoint, TrendDirection, TrendSummary};

/// Summarises the headcount series from its first to its last point.
///
/// # Examples
///
/// ```
/// use workforce_overview::metrics::employee_growth;
/// use workforce_overview::models::{MonthlyTrendPoint, TrendDirection};
/// use rust_decimal::Decimal;
///
/// let series = vec![
///     MonthlyTrendPoint { month: "Jan".to_string(), employees: 1180, payroll: Decimal::ZERO },
///     MonthlyTrendPoint { month: "Jun".to_string(), employees: 1247, payroll: Decimal::ZERO },
/// ];
/// let summary = employee_growth(&series);
/// assert_eq!(summary.growth_percent, Decimal::new(57, 1));
/// assert_eq!(summary.direction, TrendDirection::Up);
/// ```
pub fn employee_growth(series: &[MonthlyTrendPoint]) -> TrendSummary {
    summarize(series, |point| Decimal::from(point.employees))
}

/// Summarises the payroll series from its first to its last point.
pub fn payroll_growth(series: &[MonthlyTrendPoint]) -> TrendSummary {
    summarize(series, |point| point.payroll)
}

fn summarize<F>(series: &[MonthlyTrendPoint], value: F) -> TrendSummary
where
    F: Fn(&MonthlyTrendPoint) -> Decimal,
{
    let (first, last) = match (series.first(), series.last()) {
        (Some(first), Some(last)) => (value(first), value(last)),
        _ => (Decimal::ZERO, Decimal::ZERO),
    };

    // A single point or a zero baseline has no meaningful growth.
    if series.len() < 2 || first.is_zero() {
        return TrendSummary {
            first,
            last,
            growth_percent: Decimal::ZERO,
            direction: TrendDirection::Flat,
        };
    }

    let mut growth_percent = ((last - first) / first * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);

    // Direction follows the displayed percentage, not the raw change.
    let direction = if growth_percent.is_zero() {
        growth_percent = Decimal::ZERO;
        TrendDirection::Flat
    } else if growth_percent.is_sign_positive() {
        TrendDirection::Up
    } else {
        TrendDirection::Down
    };

    TrendSummary {
        first,
        last,
        growth_percent,
        direction,
    }
}
