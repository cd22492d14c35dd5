//! Integration tests for the workforce overview engine.
//!
//! This test suite covers the bundled overview dataset end to end:
//! - Headline metrics
//! - Department breakdown
//! - Ranked and filtered lists
//! - Attendance snapshot and trends
//! - Reveal runs driven from loaded settings
//! - Quick actions

use std::sync::{Arc, Mutex};

use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;
use tokio::sync::mpsc;

use workforce_overview::actions::{ActionOutcome, NavigationTarget, QuickAction};
use workforce_overview::config::ConfigLoader;
use workforce_overview::metrics::MetricsAggregator;
use workforce_overview::models::{AttendanceSnapshot, TrendDirection};
use workforce_overview::overview::OverviewReport;
use workforce_overview::reveal::{
    RevealAnimator, RevealConfig, RevealFrame, RevealHandle, RevealOutcome, RevealState,
};

// =============================================================================
// Test Helpers
// =============================================================================

fn load_config() -> ConfigLoader {
    ConfigLoader::load("./config/overview").expect("Failed to load config")
}

fn build_report() -> OverviewReport {
    let loader = load_config();
    OverviewReport::build(loader.dataset(), loader.overview_settings())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "Expected {}, got {}",
        expected,
        actual
    );
}

fn ids(records: &[workforce_overview::models::EmployeeRecord]) -> Vec<&str> {
    records.iter().map(|e| e.id.as_str()).collect()
}

// =============================================================================
// SECTION 1: Headline Metrics
// =============================================================================

#[test]
fn test_headline_counts() {
    let report = build_report();
    assert_eq!(report.headline.total_employees, 12);
    assert_eq!(report.headline.active_employees, 10);
}

#[test]
fn test_headline_means() {
    let report = build_report();
    // 47.3 / 12 and 1118 / 12
    assert_close(report.headline.mean_performance, 47.3 / 12.0);
    assert_close(report.headline.mean_attendance, 1118.0 / 12.0);
}

#[test]
fn test_headline_payroll() {
    let report = build_report();
    assert_eq!(report.headline.total_payroll, decimal("872000.00"));
}

// =============================================================================
// SECTION 2: Department Breakdown
// =============================================================================

#[test]
fn test_departments_in_first_appearance_order() {
    let report = build_report();
    let labels: Vec<&str> = report
        .departments
        .iter()
        .map(|d| d.department.as_str())
        .collect();
    assert_eq!(
        labels,
        vec!["Engineering", "Marketing", "HR", "Sales", "Finance"]
    );
}

#[test]
fn test_engineering_statistics() {
    let report = build_report();
    let engineering = &report.departments[0];
    assert_eq!(engineering.member_count, 4);
    assert_close(engineering.mean_performance, 4.275);
    assert_eq!(engineering.mean_salary, decimal("83500"));
}

#[test]
fn test_department_counts_sum_to_total() {
    let report = build_report();
    let sum: usize = report.departments.iter().map(|d| d.member_count).sum();
    assert_eq!(sum, report.headline.total_employees);
}

// =============================================================================
// SECTION 3: Ranked Lists
// =============================================================================

#[test]
fn test_top_performers_with_tie() {
    let report = build_report();
    // emp_001 and emp_007 are both 4.8; original order wins.
    assert_eq!(
        ids(&report.top_performers),
        vec!["emp_001", "emp_007", "emp_009", "emp_004", "emp_002"]
    );
}

#[test]
fn test_recent_hires_with_tie() {
    let report = build_report();
    // emp_007 and emp_012 both joined 2024-06-03.
    assert_eq!(
        ids(&report.recent_hires),
        vec!["emp_011", "emp_007", "emp_012", "emp_006"]
    );
}

#[test]
fn test_reviews_due_in_original_order() {
    let report = build_report();
    assert_eq!(
        ids(&report.reviews_due),
        vec!["emp_003", "emp_005", "emp_008", "emp_012"]
    );
    assert!(report.reviews_due.iter().all(|e| e.performance_rating < 3.5));
}

// =============================================================================
// SECTION 4: Attendance and Trends
// =============================================================================

#[test]
fn test_today_snapshot_is_last_day() {
    let report = build_report();
    assert_eq!(
        report.today,
        AttendanceSnapshot {
            present: 92,
            absent: 4,
            late: 2
        }
    );
}

#[test]
fn test_trend_summaries() {
    let report = build_report();
    assert_eq!(report.employee_growth.growth_percent, decimal("5.7"));
    assert_eq!(report.employee_growth.direction, TrendDirection::Up);
    assert_eq!(report.payroll_growth.first, decimal("780000"));
    assert_eq!(report.payroll_growth.last, decimal("847320"));
    assert_eq!(report.payroll_growth.growth_percent, decimal("8.6"));
}

#[test]
fn test_report_serializes_for_presentation() {
    let report = build_report();
    let json: Value = serde_json::to_value(&report).unwrap();

    assert_eq!(json["headline"]["total_employees"], 12);
    assert_eq!(json["headline"]["total_payroll"], "872000.00");
    assert_eq!(json["today"]["present"], 92);
    assert_eq!(json["employee_growth"]["direction"], "up");
    assert_eq!(json["quick_actions"][0], "add_employee");
    assert_eq!(json["top_performers"][0]["status"], "active");
}

#[test]
fn test_aggregator_matches_report() {
    let loader = load_config();
    let aggregator = MetricsAggregator::new(&loader.dataset().employees);
    let report = OverviewReport::build(loader.dataset(), loader.overview_settings());

    assert_eq!(aggregator.headline(), report.headline);
    assert_eq!(aggregator.reveal_targets(), report.reveal_targets());
    assert_eq!(aggregator.department_breakdown(), report.departments);
}

// =============================================================================
// SECTION 5: Reveal
// =============================================================================

#[test]
fn test_synchronous_reveal_converges_on_report() {
    let loader = load_config();
    let report = OverviewReport::build(loader.dataset(), loader.overview_settings());
    let config = loader.reveal_config().unwrap();

    let frames: Vec<RevealFrame> = RevealState::new(config, report.reveal_targets()).collect();

    assert_eq!(frames.len(), 60);
    let last = frames.last().unwrap();
    assert_eq!(last.employees, 12);
    assert_eq!(last.performance, report.headline.mean_performance);
    assert_eq!(last.attendance, report.headline.mean_attendance);
    assert_eq!(last.payroll, decimal("872000.00"));

    for pair in frames.windows(2) {
        assert!(pair[1].employees >= pair[0].employees);
        assert!(pair[1].performance > pair[0].performance);
        assert!(pair[1].payroll >= pair[0].payroll);
    }
}

#[tokio::test(start_paused = true)]
async fn test_reveal_run_from_loaded_settings() {
    let loader = load_config();
    let report = OverviewReport::build(loader.dataset(), loader.overview_settings());
    let config = loader.reveal_config().unwrap();

    let (tx, mut rx) = mpsc::unbounded_channel();
    let handle = RevealHandle::spawn(config, report.reveal_targets(), move |frame| {
        let _ = tx.send(frame);
    });

    assert_eq!(handle.finished().await, RevealOutcome::Completed { frames: 60 });

    let mut frames = Vec::new();
    while let Some(frame) = rx.recv().await {
        frames.push(frame);
    }
    assert_eq!(frames.len(), 60);
    assert_eq!(frames[59].employees, 12);
}

#[tokio::test(start_paused = true)]
async fn test_cancel_at_step_thirty_stops_remaining_ticks() {
    let report = build_report();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let handle = RevealHandle::spawn(RevealConfig::default(), report.reveal_targets(), move |frame| {
        let _ = tx.send(frame);
    });

    while let Some(frame) = rx.recv().await {
        if frame.step == 30 {
            handle.cancel();
            break;
        }
    }

    assert_eq!(
        handle.finished().await,
        RevealOutcome::Cancelled { last_step: 30 }
    );

    // The sink is dropped with the run, so this drains and terminates.
    let mut late_frames = Vec::new();
    while let Some(frame) = rx.recv().await {
        late_frames.push(frame.step);
    }
    assert!(late_frames.is_empty(), "Frames after cancel: {:?}", late_frames);
}

#[tokio::test(start_paused = true)]
async fn test_restart_cancels_previous_stream() {
    let report = build_report();
    let seen: Arc<Mutex<Vec<(u8, u32)>>> = Arc::new(Mutex::new(Vec::new()));
    let mut animator = RevealAnimator::new();

    let first_seen = Arc::clone(&seen);
    animator.start(RevealConfig::default(), report.reveal_targets(), move |frame| {
        first_seen.lock().unwrap().push((1, frame.step))
    });

    // Let the first run emit a few frames.
    tokio::time::sleep(RevealConfig::default().tick_interval() * 5).await;
    tokio::task::yield_now().await;

    let second_seen = Arc::clone(&seen);
    let previous = animator
        .start(RevealConfig::default(), report.reveal_targets(), move |frame| {
            second_seen.lock().unwrap().push((2, frame.step))
        })
        .expect("first run still active");

    let cancelled_at = match previous.finished().await {
        RevealOutcome::Cancelled { last_step } => last_step,
        other => panic!("Expected first run to be cancelled, got {:?}", other),
    };
    assert!(cancelled_at < 60);

    assert_eq!(
        animator.finished().await,
        Some(RevealOutcome::Completed { frames: 60 })
    );

    let seen = seen.lock().unwrap();
    let first_count = seen.iter().filter(|(run, _)| *run == 1).count() as u32;
    assert_eq!(first_count, cancelled_at);

    // Once the second run starts emitting, the first never emits again.
    let first_second = seen.iter().position(|(run, _)| *run == 2).unwrap();
    assert!(seen[first_second..].iter().all(|(run, _)| *run == 2));
}

#[test]
fn test_misconfigured_reveal_fails_fast() {
    assert!(RevealConfig::from_millis(0, 60).is_err());
    assert!(RevealConfig::from_millis(-100, 60).is_err());
    assert!(RevealConfig::from_millis(2000, 0).is_err());
}

// =============================================================================
// SECTION 6: Quick Actions
// =============================================================================

#[test]
fn test_quick_actions_from_report_resolve() {
    let report = build_report();
    let visited = Mutex::new(Vec::new());
    let navigate = |target: NavigationTarget| visited.lock().unwrap().push(target);

    let outcomes: Vec<ActionOutcome> = report
        .quick_actions
        .iter()
        .map(|action| action.trigger(Some(&navigate)))
        .collect();

    assert_eq!(outcomes[0], ActionOutcome::Navigated(NavigationTarget::Employees));
    assert_eq!(outcomes[1], ActionOutcome::Navigated(NavigationTarget::Payroll));
    assert_eq!(outcomes[2], ActionOutcome::Navigated(NavigationTarget::Reports));
    assert_eq!(outcomes[3], ActionOutcome::Navigated(NavigationTarget::Performance));
    assert_eq!(visited.lock().unwrap().len(), 4);
    assert!(
        report
            .quick_actions
            .iter()
            .all(|action| matches!(action.trigger(None), ActionOutcome::Notice(_)))
    );
}

#[test]
fn test_quick_action_names_parse_at_boundary() {
    let action: QuickAction = "process_payroll".parse().unwrap();
    assert_eq!(action, QuickAction::ProcessPayroll);
    assert!("processPayroll".parse::<QuickAction>().is_err());
}
