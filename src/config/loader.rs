//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading dashboard
//! settings and the overview dataset from YAML files.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{DashboardError, DashboardResult};
use crate::reveal::RevealConfig;

use super::types::{
    AttendanceFile, DashboardSettings, Dataset, EmployeesFile, OverviewSettings, TrendsFile,
};

/// Loads and provides access to dashboard configuration and data.
///
/// # Directory Structure
///
/// ```text
/// config/overview/
/// ├── dashboard.yaml    # Reveal timing, list sizes, review threshold
/// ├── employees.yaml    # Employee records
/// ├── attendance.yaml   # Daily attendance samples, oldest first
/// └── trends.yaml       # Monthly headcount and payroll series
/// ```
///
/// # Example
///
/// ```no_run
/// use workforce_overview::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/overview")?;
/// println!("Loaded {} employees", loader.dataset().employees.len());
/// # Ok::<(), workforce_overview::error::DashboardError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    settings: DashboardSettings,
    dataset: Dataset,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::ConfigNotFound`] if any file is missing and
    /// [`DashboardError::ConfigParseError`] if any file contains invalid YAML
    /// or is missing a required field.
    pub fn load<P: AsRef<Path>>(path: P) -> DashboardResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<DashboardSettings>(&path.join("dashboard.yaml"))?;
        let employees = Self::load_yaml::<EmployeesFile>(&path.join("employees.yaml"))?;
        let attendance = Self::load_yaml::<AttendanceFile>(&path.join("attendance.yaml"))?;
        let trends = Self::load_yaml::<TrendsFile>(&path.join("trends.yaml"))?;

        let dataset = Dataset {
            employees: employees.employees,
            attendance: attendance.days,
            trends: trends.months,
        };

        debug!(
            path = %path.display(),
            employees = dataset.employees.len(),
            attendance_days = dataset.attendance.len(),
            trend_months = dataset.trends.len(),
            "Loaded overview configuration"
        );

        Ok(Self { settings, dataset })
    }

    /// Creates a loader from already-built parts.
    pub fn from_parts(settings: DashboardSettings, dataset: Dataset) -> Self {
        Self { settings, dataset }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> DashboardResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| DashboardError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| {
            warn!(path = %path_str, error = %e, "Failed to parse configuration file");
            DashboardError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            }
        })
    }

    /// Returns the dashboard settings.
    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    /// Returns the overview list settings.
    pub fn overview_settings(&self) -> &OverviewSettings {
        &self.settings.overview
    }

    /// Returns the loaded dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Returns the validated reveal configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::InvalidRevealConfig`] if the configured
    /// duration or step count is unusable.
    pub fn reveal_config(&self) -> DashboardResult<RevealConfig> {
        self.settings.reveal.to_config()
    }
}
