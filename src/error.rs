//! Error types for the workforce overview engine.
//!
//! Aggregation itself never fails; these errors cover configuration loading,
//! reveal animator misconfiguration and parsing of quick-action names.

use thiserror::Error;

/// The main error type for the workforce overview engine.
///
/// # Example
///
/// ```
/// use workforce_overview::error::DashboardError;
///
/// let error = DashboardError::ConfigNotFound {
///     path: "/missing/dashboard.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/dashboard.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The reveal animator was configured with a duration or step count
    /// that cannot produce a finite tick sequence.
    #[error("Invalid reveal configuration: {message}")]
    InvalidRevealConfig {
        /// A description of what made the configuration invalid.
        message: String,
    },

    /// A quick-action name did not match any known action.
    #[error("Unknown quick action: {name}")]
    UnknownQuickAction {
        /// The name that could not be resolved.
        name: String,
    },
}

/// A type alias for Results that return DashboardError.
pub type DashboardResult<T> = Result<T, DashboardError>;
