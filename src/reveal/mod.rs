//! Numeric reveal animation.
//!
//! A reveal eases the four headline values from zero to their final
//! aggregates over a fixed number of evenly spaced ticks, using a quartic
//! ease-out curve. [`RevealState`] is the caller-owned, synchronous state
//! machine; [`RevealAnimator`] and [`RevealHandle`] drive it from a tokio
//! timer with cancellation.

mod easing;
mod runner;
mod state;

pub use easing::ease_out_quartic;
pub use runner::{RevealAnimator, RevealHandle, RevealOutcome};
pub use state::{
    DEFAULT_REVEAL_DURATION_MS, DEFAULT_REVEAL_STEPS, RevealConfig, RevealFrame, RevealState,
    RevealTargets,
};
