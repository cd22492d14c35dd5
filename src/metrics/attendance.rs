//! Today's attendance snapshot.

use crate::models::{AttendanceDaySample, AttendanceSnapshot};

/// Returns the counts of the last sample in `samples`.
///
/// The sequence is ordered oldest first, so the last element is today.
/// An empty sequence yields an all-zero snapshot.
///
/// # Examples
///
/// ```
/// use workforce_overview::metrics::today_snapshot;
/// use workforce_overview::models::AttendanceSnapshot;
///
/// assert_eq!(today_snapshot(&[]), AttendanceSnapshot::default());
/// ```
pub fn today_snapshot(samples: &[AttendanceDaySample]) -> AttendanceSnapshot {
    samples
        .last()
        .map(AttendanceDaySample::snapshot)
        .unwrap_or_default()
}
