//! Easing curve for the numeric reveal.

/// Quartic ease-out: `1 - (1 - t)^4`.
///
/// Starts fast and decelerates towards 1. `t` is expected in `[0, 1]`.
///
/// # Examples
///
/// ```
/// use workforce_overview::reveal::ease_out_quartic;
///
/// assert_eq!(ease_out_quartic(0.0), 0.0);
/// assert_eq!(ease_out_quartic(1.0), 1.0);
/// assert_eq!(ease_out_quartic(0.5), 0.9375);
/// ```
pub fn ease_out_quartic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(4)
}

/// Eased progress at `step` of `steps`, with `t = step / steps`.
pub(crate) fn eased_progress(step: u32, steps: u32) -> f64 {
    ease_out_quartic(f64::from(step) / f64::from(steps))
}
