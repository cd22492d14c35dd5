//! Timer-driven reveal runs.
//!
//! A run is one tokio task driving one periodic [`tokio::time::Interval`].
//! Cancellation is signalled through a [`tokio::sync::watch`] channel whose
//! value is read under its lock immediately before each emission, so once
//! [`RevealHandle::cancel`] returns no further frame is delivered.

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::{debug, info};
use uuid::Uuid;

use super::state::{RevealConfig, RevealFrame, RevealState, RevealTargets};

/// How a reveal run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Every step was emitted.
    Completed {
        /// Number of frames delivered to the sink.
        frames: u32,
    },
    /// The run was cancelled before its final step.
    Cancelled {
        /// The last step delivered to the sink, `0` if none was.
        last_step: u32,
    },
}

/// Handle to a running reveal.
///
/// Dropping the handle cancels the run.
#[derive(Debug)]
pub struct RevealHandle {
    run_id: Uuid,
    cancel_tx: watch::Sender<bool>,
    task: JoinHandle<RevealOutcome>,
}

impl RevealHandle {
    /// Spawns a run that calls `sink` once per tick.
    ///
    /// Ticks are spaced [`RevealConfig::tick_interval`] apart, the first one
    /// a full interval after spawning. The sink must not cancel its own run.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn spawn<F>(config: RevealConfig, targets: RevealTargets, sink: F) -> Self
    where
        F: FnMut(RevealFrame) + Send + 'static,
    {
        let run_id = Uuid::new_v4();
        let (cancel_tx, cancel_rx) = watch::channel(false);
        let state = RevealState::new(config, targets);

        info!(
            run_id = %run_id,
            steps = config.steps(),
            duration_ms = config.duration().as_millis() as u64,
            "Starting reveal run"
        );

        let task = tokio::spawn(drive(run_id, state, sink, cancel_rx));

        Self {
            run_id,
            cancel_tx,
            task,
        }
    }

    /// Correlation id of this run.
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Cancels the run.
    ///
    /// Blocks until a frame currently being delivered has been handed to the
    /// sink; after that no further frame is delivered.
    ///
    /// # Deadlocks
    ///
    /// Calling this from inside the run's own sink never returns, since the
    /// sink call holds the lock `cancel` waits for.
    pub fn cancel(&self) {
        self.cancel_tx.send_replace(true);
    }

    /// Whether the run's task has ended.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Waits for the run to end and returns how it ended.
    ///
    /// # Panics
    ///
    /// Resumes the panic if the sink panicked.
    pub async fn finished(self) -> RevealOutcome {
        let Self {
            run_id,
            cancel_tx,
            task,
        } = self;

        let outcome = match task.await {
            Ok(outcome) => outcome,
            Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
            Err(_) => RevealOutcome::Cancelled { last_step: 0 },
        };
        debug!(run_id = %run_id, ?outcome, "Reveal run joined");
        drop(cancel_tx);
        outcome
    }
}

async fn drive<F>(
    run_id: Uuid,
    mut state: RevealState,
    mut sink: F,
    mut cancel_rx: watch::Receiver<bool>,
) -> RevealOutcome
where
    F: FnMut(RevealFrame) + Send + 'static,
{
    let period = state.config().tick_interval();
    let mut ticker = interval_at(Instant::now() + period, period);
    // A slow sink pushes later ticks back instead of bunching them up.
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            changed = cancel_rx.changed() => {
                // A dropped handle counts as a cancellation.
                if changed.is_err() {
                    state.cancel();
                }
            }
            _ = ticker.tick() => {}
        }

        {
            let cancelled = cancel_rx.borrow();
            if *cancelled {
                state.cancel();
            }
            match state.tick() {
                Some(frame) => sink(frame),
                None => break,
            }
        }

        if state.is_finished() {
            break;
        }
    }

    if state.is_cancelled() {
        debug!(
            run_id = %run_id,
            last_step = state.current_step(),
            "Reveal run cancelled"
        );
        RevealOutcome::Cancelled {
            last_step: state.current_step(),
        }
    } else {
        info!(
            run_id = %run_id,
            frames = state.current_step(),
            "Reveal run completed"
        );
        RevealOutcome::Completed {
            frames: state.current_step(),
        }
    }
}

/// Owner of the single active reveal run for one view.
///
/// Starting a new run cancels the previous one first, so two tick streams
/// never update the same displayed values.
#[derive(Debug, Default)]
pub struct RevealAnimator {
    active: Option<RevealHandle>,
}

impl RevealAnimator {
    /// Creates an animator with no active run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new run, cancelling any active one.
    ///
    /// Returns the previous run's handle, already cancelled, so the caller
    /// may await its outcome. Cancelling waits for a frame in delivery, as in
    /// [`RevealHandle::cancel`].
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    ///
    /// # Deadlocks
    ///
    /// Must not be called from the sink of this animator's active run.
    pub fn start<F>(
        &mut self,
        config: RevealConfig,
        targets: RevealTargets,
        sink: F,
    ) -> Option<RevealHandle>
    where
        F: FnMut(RevealFrame) + Send + 'static,
    {
        let previous = self.active.take();
        if let Some(handle) = &previous {
            debug!(run_id = %handle.run_id(), "Cancelling previous reveal run");
            handle.cancel();
        }
        self.active = Some(RevealHandle::spawn(config, targets, sink));
        previous
    }

    /// Correlation id of the active run, if any.
    pub fn active_run(&self) -> Option<Uuid> {
        self.active.as_ref().map(RevealHandle::run_id)
    }

    /// Cancels the active run, if any. Blocks like [`RevealHandle::cancel`].
    pub fn cancel(&mut self) {
        if let Some(handle) = &self.active {
            handle.cancel();
        }
    }

    /// Waits for the active run to end and clears it.
    pub async fn finished(&mut self) -> Option<RevealOutcome> {
        match self.active.take() {
            Some(handle) => Some(handle.finished().await),
            None => None,
        }
    }
}
