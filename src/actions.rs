//! Quick actions offered on the overview.
//!
//! Actions are a closed set of variants resolved against an optional
//! navigation callback supplied by the presentation layer. Without a callback
//! triggering an action only produces a notice for local display.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DashboardError, DashboardResult};

/// A section of the application a quick action can switch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationTarget {
    /// Employee directory.
    Employees,
    /// Payroll processing.
    Payroll,
    /// Reports and analytics.
    Reports,
    /// Performance reviews.
    Performance,
}

/// A quick action button on the overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickAction {
    /// Open the form for a new employee.
    AddEmployee,
    /// Start a payroll run.
    ProcessPayroll,
    /// Open the reports section.
    ViewReports,
    /// Schedule reviews for employees below the review threshold.
    ScheduleReviews,
}

/// What triggering a quick action did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionOutcome {
    /// The navigation callback was invoked with this target.
    Navigated(NavigationTarget),
    /// No navigation happened; the message is for local display.
    Notice(String),
}

impl QuickAction {
    /// Every quick action in display order.
    pub const ALL: [QuickAction; 4] = [
        QuickAction::AddEmployee,
        QuickAction::ProcessPayroll,
        QuickAction::ViewReports,
        QuickAction::ScheduleReviews,
    ];

    /// The snake_case name used at the presentation boundary.
    pub fn name(&self) -> &'static str {
        match self {
            QuickAction::AddEmployee => "add_employee",
            QuickAction::ProcessPayroll => "process_payroll",
            QuickAction::ViewReports => "view_reports",
            QuickAction::ScheduleReviews => "schedule_reviews",
        }
    }

    /// Button label.
    pub fn label(&self) -> &'static str {
        match self {
            QuickAction::AddEmployee => "Add New Employee",
            QuickAction::ProcessPayroll => "Process Payroll",
            QuickAction::ViewReports => "View Reports",
            QuickAction::ScheduleReviews => "Schedule Reviews",
        }
    }

    /// The section this action switches to.
    pub fn target(&self) -> NavigationTarget {
        match self {
            QuickAction::AddEmployee => NavigationTarget::Employees,
            QuickAction::ProcessPayroll => NavigationTarget::Payroll,
            QuickAction::ViewReports => NavigationTarget::Reports,
            QuickAction::ScheduleReviews => NavigationTarget::Performance,
        }
    }

    /// Triggers the action.
    ///
    /// Calls `navigate` with the action's target when it is present;
    /// otherwise returns a notice and has no other side effect.
    ///
    /// # Example
    ///
    /// ```
    /// use std::cell::Cell;
    /// use workforce_overview::actions::{ActionOutcome, NavigationTarget, QuickAction};
    ///
    /// let visited = Cell::new(None);
    /// let navigate = |target: NavigationTarget| visited.set(Some(target));
    ///
    /// let outcome = QuickAction::ViewReports.trigger(Some(&navigate));
    /// assert_eq!(outcome, ActionOutcome::Navigated(NavigationTarget::Reports));
    /// assert_eq!(visited.get(), Some(NavigationTarget::Reports));
    ///
    /// assert!(matches!(QuickAction::ViewReports.trigger(None), ActionOutcome::Notice(_)));
    /// ```
    pub fn trigger(&self, navigate: Option<&dyn Fn(NavigationTarget)>) -> ActionOutcome {
        match navigate {
            Some(navigate) => {
                let target = self.target();
                debug!(action = self.name(), ?target, "Quick action navigating");
                navigate(target);
                ActionOutcome::Navigated(target)
            }
            None => {
                debug!(action = self.name(), "Quick action showing notice");
                ActionOutcome::Notice(format!("{} is not available yet", self.label()))
            }
        }
    }
}

impl fmt::Display for QuickAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for QuickAction {
    type Err = DashboardError;

    fn from_str(s: &str) -> DashboardResult<Self> {
        QuickAction::ALL
            .into_iter()
            .find(|action| action.name() == s)
            .ok_or_else(|| DashboardError::UnknownQuickAction {
                name: s.to_string(),
            })
    }
}
