use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::task::TaskId;
use crate::timer::Phase;

/// Every state change on the board produces an Event.
/// The CLI prints them; the notifier listens for `PhaseCompleted`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TaskAdded {
        task_id: TaskId,
        at: DateTime<Utc>,
    },
    TaskDeleted {
        task_id: TaskId,
        /// The deleted task's timer was running and has been stopped.
        was_running: bool,
        at: DateTime<Utc>,
    },
    TaskCompleted {
        task_id: TaskId,
        at: DateTime<Utc>,
    },
    TaskReopened {
        task_id: TaskId,
        at: DateTime<Utc>,
    },
    EstimateAdjusted {
        task_id: TaskId,
        estimated_pomodoros: u32,
        at: DateTime<Utc>,
    },
    TimerStarted {
        task_id: TaskId,
        phase: Phase,
        remaining_secs: u32,
        /// Task whose timer was stopped to make room for this one.
        stopped: Option<TaskId>,
        at: DateTime<Utc>,
    },
    TimerPaused {
        task_id: TaskId,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    TimerReset {
        task_id: TaskId,
        at: DateTime<Utc>,
    },
    /// A phase ran down to zero. The timer is stopped and the next phase
    /// is loaded but not started.
    PhaseCompleted {
        task_id: TaskId,
        from: Phase,
        to: Phase,
        completed_pomodoros: u32,
        at: DateTime<Utc>,
    },
    TasksImported {
        count: usize,
        replaced: bool,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// True for the natural end of a work or break phase.
    pub fn is_phase_completed(&self) -> bool {
        matches!(self, Event::PhaseCompleted { .. })
    }
}
