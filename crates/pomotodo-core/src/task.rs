//! Task records owned by the [`TaskBoard`](crate::TaskBoard).
//!
//! A [`Task`] carries everything about a to-do item except whether its
//! timer is running: that lives on the board as a single `running` id, so
//! the "at most one running task" rule cannot be broken by a stale flag.
//! Rendering code receives [`TaskSnapshot`] copies with `isRunning` filled in.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::timer::{Phase, WORK_DURATION};

/// Opaque task identifier.
///
/// Fresh ids are UUID v4 strings. Stored records written by older builds
/// used numeric ids; those are accepted and kept as their decimal text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new() -> Self {
        TaskId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        TaskId(value.to_string())
    }
}

impl From<String> for TaskId {
    fn from(value: String) -> Self {
        TaskId(value)
    }
}

impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        match RawId::deserialize(deserializer)? {
            RawId::Text(s) => Ok(TaskId(s)),
            RawId::Number(n) => Ok(TaskId(n.to_string())),
        }
    }
}

/// A to-do item with its own pomodoro cycle.
///
/// Serialized form is the persisted record: camelCase keys and no
/// `isRunning` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub(crate) id: TaskId,
    pub(crate) text: String,
    #[serde(default)]
    pub(crate) completed: bool,
    #[serde(default = "default_estimate")]
    pub(crate) estimated_pomodoros: u32,
    #[serde(default)]
    pub(crate) completed_pomodoros: u32,
    #[serde(default)]
    pub(crate) current_phase: Phase,
    #[serde(default = "default_remaining")]
    pub(crate) remaining_time: u32,
}

fn default_estimate() -> u32 {
    1
}

fn default_remaining() -> u32 {
    WORK_DURATION
}

impl Task {
    /// Create a fresh task at the start of a work phase.
    ///
    /// The caller is responsible for rejecting empty text; the board and
    /// the import filter both do so before getting here.
    pub(crate) fn new(text: impl Into<String>, estimated_pomodoros: u32) -> Self {
        Self {
            id: TaskId::new(),
            text: text.into(),
            completed: false,
            estimated_pomodoros: estimated_pomodoros.max(1),
            completed_pomodoros: 0,
            current_phase: Phase::Work,
            remaining_time: WORK_DURATION,
        }
    }

    pub fn id(&self) -> &TaskId {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn estimated_pomodoros(&self) -> u32 {
        self.estimated_pomodoros
    }

    pub fn completed_pomodoros(&self) -> u32 {
        self.completed_pomodoros
    }

    pub fn current_phase(&self) -> Phase {
        self.current_phase
    }

    pub fn remaining_time(&self) -> u32 {
        self.remaining_time
    }

    /// Completed pomodoros over the estimate, capped at 1.0 for progress bars.
    pub fn progress(&self) -> f64 {
        if self.estimated_pomodoros == 0 {
            return 0.0;
        }
        (self.completed_pomodoros as f64 / self.estimated_pomodoros as f64).min(1.0)
    }

    /// Bring a loaded record back inside the task invariants.
    ///
    /// A zero countdown is treated as "not set" and restarts the phase; a
    /// countdown longer than its phase is clamped; a zero estimate becomes 1.
    pub(crate) fn normalized(mut self) -> Self {
        let full = self.current_phase.duration();
        if self.remaining_time == 0 {
            self.remaining_time = full;
        }
        self.remaining_time = self.remaining_time.min(full);
        self.estimated_pomodoros = self.estimated_pomodoros.max(1);
        self
    }

    pub(crate) fn restart_phase(&mut self, phase: Phase) {
        self.current_phase = phase;
        self.remaining_time = phase.duration();
    }
}

/// Read-only copy of a task for rendering, with the derived running flag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSnapshot {
    #[serde(flatten)]
    pub task: Task,
    pub is_running: bool,
}
