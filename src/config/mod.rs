//! Configuration loading for the workforce overview.
//!
//! This module loads dashboard settings (reveal timing, list sizes, review
//! threshold) and the overview dataset (employees, attendance, monthly
//! trends) from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use workforce_overview::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/overview").unwrap();
//! println!("Reveal steps: {}", loader.settings().reveal.steps);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AttendanceFile, DEFAULT_LIST_SIZE, DEFAULT_REVIEW_THRESHOLD, DashboardSettings, Dataset,
    EmployeesFile, OverviewSettings, RevealSettings, TrendsFile,
};
