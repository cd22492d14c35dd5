//! Reveal configuration, targets, frames and the caller-owned animation state.

use std::time::Duration;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};

use super::easing::eased_progress;

/// Number of ticks in a default reveal.
pub const DEFAULT_REVEAL_STEPS: u32 = 60;

/// Length of a default reveal in milliseconds.
pub const DEFAULT_REVEAL_DURATION_MS: u64 = 2000;

/// Validated timing for a reveal run.
///
/// # Example
///
/// ```
/// use workforce_overview::reveal::RevealConfig;
/// use std::time::Duration;
///
/// let config = RevealConfig::new(Duration::from_millis(600), 60).unwrap();
/// assert_eq!(config.tick_interval(), Duration::from_millis(10));
///
/// assert!(RevealConfig::new(Duration::ZERO, 60).is_err());
/// assert!(RevealConfig::new(Duration::from_millis(600), 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealConfig {
    duration: Duration,
    steps: u32,
}

impl RevealConfig {
    /// Creates a configuration, failing fast on values that cannot produce a
    /// finite sequence of evenly spaced ticks.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::InvalidRevealConfig`] if `duration` is zero,
    /// `steps` is zero, or `duration / steps` is shorter than a nanosecond.
    pub fn new(duration: Duration, steps: u32) -> DashboardResult<Self> {
        if duration.is_zero() {
            return Err(DashboardError::InvalidRevealConfig {
                message: "duration must be positive".to_string(),
            });
        }
        if steps == 0 {
            return Err(DashboardError::InvalidRevealConfig {
                message: "steps must be greater than zero".to_string(),
            });
        }
        if (duration / steps).is_zero() {
            return Err(DashboardError::InvalidRevealConfig {
                message: format!(
                    "duration of {:?} is too short for {} steps",
                    duration, steps
                ),
            });
        }
        Ok(Self { duration, steps })
    }

    /// Creates a configuration from a signed millisecond duration, as found in
    /// configuration files.
    ///
    /// # Errors
    ///
    /// Zero or negative durations are rejected, in addition to the checks of
    /// [`RevealConfig::new`].
    pub fn from_millis(duration_ms: i64, steps: u32) -> DashboardResult<Self> {
        if duration_ms <= 0 {
            return Err(DashboardError::InvalidRevealConfig {
                message: format!("duration must be positive, got {}ms", duration_ms),
            });
        }
        Self::new(Duration::from_millis(duration_ms as u64), steps)
    }

    /// Total length of the reveal.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Number of ticks.
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Time between consecutive ticks, `duration / steps`.
    pub fn tick_interval(&self) -> Duration {
        self.duration / self.steps
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(DEFAULT_REVEAL_DURATION_MS),
            steps: DEFAULT_REVEAL_STEPS,
        }
    }
}

/// The final values a reveal converges on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealTargets {
    /// Employee headcount. Rounded to an integer at every tick.
    pub employees: u64,
    /// Mean performance rating. Emitted at full precision.
    pub performance: f64,
    /// Mean attendance percentage. Emitted at full precision.
    pub attendance: f64,
    /// Total payroll. Rounded to cents at every tick.
    pub payroll: Decimal,
}

/// The displayed values at one step of a reveal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealFrame {
    /// Step index, `0` for the initial frame and `steps` for the last.
    pub step: u32,
    /// Eased employee headcount.
    pub employees: u64,
    /// Eased mean performance rating.
    pub performance: f64,
    /// Eased mean attendance percentage.
    pub attendance: f64,
    /// Eased payroll.
    pub payroll: Decimal,
}

impl RevealFrame {
    /// Computes the frame at `step` of `steps` for `targets`.
    ///
    /// Each value is `target * (1 - (1 - t)^4)` with `t = step / steps`.
    /// Step 0 is all zeros and any step at or beyond `steps` is exactly the
    /// targets.
    ///
    /// # Example
    ///
    /// ```
    /// use workforce_overview::reveal::{RevealFrame, RevealTargets};
    /// use rust_decimal::Decimal;
    ///
    /// let targets = RevealTargets {
    ///     employees: 100,
    ///     performance: 4.0,
    ///     attendance: 96.0,
    ///     payroll: Decimal::new(100_000, 0),
    /// };
    /// let halfway = RevealFrame::at(&targets, 30, 60);
    /// assert_eq!(halfway.employees, 94); // 100 * 0.9375
    /// assert_eq!(halfway.performance, 3.75);
    /// ```
    pub fn at(targets: &RevealTargets, step: u32, steps: u32) -> Self {
        if step == 0 {
            return Self {
                step,
                employees: 0,
                performance: 0.0,
                attendance: 0.0,
                payroll: Decimal::ZERO,
            };
        }
        if step >= steps {
            return Self {
                step,
                employees: targets.employees,
                performance: targets.performance,
                attendance: targets.attendance,
                payroll: targets.payroll,
            };
        }

        let progress = eased_progress(step, steps);
        let payroll_progress = Decimal::from_f64(progress).unwrap_or_default();

        Self {
            step,
            employees: (targets.employees as f64 * progress).round() as u64,
            performance: targets.performance * progress,
            attendance: targets.attendance * progress,
            payroll: (targets.payroll * payroll_progress).round_dp(2),
        }
    }
}

/// Caller-owned state of one reveal run.
///
/// The lifecycle is explicit: [`RevealState::new`] creates it at step 0,
/// [`RevealState::tick`] advances one step, [`RevealState::cancel`] stops it,
/// and dropping it destroys it. A finished or cancelled state never yields
/// another frame; start over with a fresh state instead.
///
/// The state is also an [`Iterator`] over the remaining frames.
///
/// # Example
///
/// ```
/// use workforce_overview::reveal::{RevealConfig, RevealState, RevealTargets};
/// use rust_decimal::Decimal;
///
/// let targets = RevealTargets {
///     employees: 100,
///     performance: 4.5,
///     attendance: 95.0,
///     payroll: Decimal::new(1_000_000, 0),
/// };
/// let state = RevealState::new(RevealConfig::default(), targets);
/// let frames: Vec<_> = state.collect();
/// assert_eq!(frames.len(), 60);
/// assert_eq!(frames.last().unwrap().employees, 100);
/// ```
#[derive(Debug, Clone)]
pub struct RevealState {
    config: RevealConfig,
    targets: RevealTargets,
    current_step: u32,
    cancelled: bool,
}

impl RevealState {
    /// Creates a state at step 0.
    pub fn new(config: RevealConfig, targets: RevealTargets) -> Self {
        Self {
            config,
            targets,
            current_step: 0,
            cancelled: false,
        }
    }

    /// The run's configuration.
    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    /// The values the run converges on.
    pub fn targets(&self) -> &RevealTargets {
        &self.targets
    }

    /// The last step emitted, `0` before the first tick.
    pub fn current_step(&self) -> u32 {
        self.current_step
    }

    /// The frame for the current step.
    pub fn current_frame(&self) -> RevealFrame {
        RevealFrame::at(&self.targets, self.current_step, self.config.steps())
    }

    /// Advances one step and returns its frame.
    ///
    /// Returns `None` once the final step has been emitted or after
    /// [`RevealState::cancel`].
    pub fn tick(&mut self) -> Option<RevealFrame> {
        if self.cancelled || self.is_finished() {
            return None;
        }
        self.current_step += 1;
        Some(self.current_frame())
    }

    /// Stops the run. No further frames are produced.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Whether [`RevealState::cancel`] has been called.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Whether the final step has been emitted.
    pub fn is_finished(&self) -> bool {
        self.current_step >= self.config.steps()
    }
}

impl Iterator for RevealState {
    type Item = RevealFrame;

    fn next(&mut self) -> Option<Self::Item> {
        self.tick()
    }
}
