//! Tick source for the running task.
//!
//! The board is a pure state machine; [`TickDriver`] is the piece that
//! turns wall-clock time into `tick()` calls. It drives exactly one task
//! and stops as soon as the phase runs out, the task stops running for any
//! other reason, or the stop signal fires.

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::debug;

use super::engine::TaskBoard;
use crate::error::Result;
use crate::events::Event;
use crate::notify::Notifier;
use crate::task::TaskId;

/// Why [`TickDriver::run`] returned.
#[derive(Debug, Clone, PartialEq)]
pub enum DriveOutcome {
    /// The countdown hit zero; the next phase is loaded but not started.
    PhaseCompleted(Event),
    /// Stopped by the stop signal. The task has been paused.
    Stopped,
    /// The task could not be started (it is completed).
    NotStarted,
}

/// Delivers one tick per period to a single running task.
#[derive(Debug, Clone, Copy)]
pub struct TickDriver {
    period: Duration,
}

impl Default for TickDriver {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl TickDriver {
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Start `id` and tick it until its phase ends or `stop` flips to true.
    ///
    /// `on_change` is called after every tick and after the final pause,
    /// with the board in its new state; an error from it aborts the run
    /// and leaves the task running on the board.
    ///
    /// A dropped stop sender counts as a stop request.
    pub async fn run<N, F>(
        &self,
        board: &mut TaskBoard,
        id: &TaskId,
        notifier: &N,
        mut stop: watch::Receiver<bool>,
        mut on_change: F,
    ) -> Result<DriveOutcome>
    where
        N: Notifier + ?Sized,
        F: FnMut(&TaskBoard) -> Result<()>,
    {
        board.start(id)?;
        if !board.is_running(id) {
            return Ok(DriveOutcome::NotStarted);
        }
        on_change(board)?;

        let mut interval = tokio::time::interval(self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick of a tokio interval completes immediately.
        interval.tick().await;

        loop {
            if *stop.borrow() {
                return self.halt(board, id, &mut on_change);
            }
            tokio::select! {
                _ = interval.tick() => {
                    let event = board.tick(id);
                    on_change(board)?;
                    if let Some(event) = event.filter(Event::is_phase_completed) {
                        notifier.notify(&event);
                        return Ok(DriveOutcome::PhaseCompleted(event));
                    }
                    if !board.is_running(id) {
                        return Ok(DriveOutcome::Stopped);
                    }
                }
                changed = stop.changed() => {
                    if changed.is_err() || *stop.borrow() {
                        return self.halt(board, id, &mut on_change);
                    }
                }
            }
        }
    }

    fn halt<F>(&self, board: &mut TaskBoard, id: &TaskId, on_change: &mut F) -> Result<DriveOutcome>
    where
        F: FnMut(&TaskBoard) -> Result<()>,
    {
        board.pause(id)?;
        on_change(board)?;
        debug!(task_id = %id, "tick driver stopped");
        Ok(DriveOutcome::Stopped)
    }
}
