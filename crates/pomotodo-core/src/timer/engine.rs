//! Task board: the per-task pomodoro state machine.
//!
//! Every task cycles through work and break phases on its own countdown,
//! but only one task's timer may run at a time. The board owns all tasks
//! and holds that single running id; there is no separate timer table.
//!
//! ## State Transitions (per task)
//!
//! ```text
//!              start                  tick to 0 (pomodoro += 1)
//! Idle-Work ─────────> Running-Work ─────────────────────────> Idle-Break
//!     ^    <─────────                                               │
//!     │       pause                                          start  │
//!     │                                                             v
//!     └──────────────────────── tick to 0 ──────────────────── Running-Break
//! ```
//!
//! Start moves the task to the front of the board. Reset sends any state
//! to Idle-Work. Completing a task pauses it first; completed tasks ignore
//! start, tick, reset and estimate changes.
//!
//! The board does not own a clock. The caller delivers `tick()` once per
//! elapsed second to the running task (see [`TickDriver`](super::TickDriver)).

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::phase::Phase;
use crate::error::{CoreError, Result, ValidationError};
use crate::events::Event;
use crate::import::ImportMode;
use crate::task::{Task, TaskId, TaskSnapshot};

/// Owned, versioned collection of tasks.
///
/// `version` advances on every mutation so callers can tell when the
/// collection needs to be written back to storage.
#[derive(Debug, Clone, Default)]
pub struct TaskBoard {
    /// Most recent first.
    tasks: Vec<Task>,
    running: Option<TaskId>,
    version: u64,
}

/// Aggregate counts over the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSummary {
    pub total: usize,
    pub completed: usize,
    pub remaining: usize,
    pub completed_pomodoros: u64,
    /// Rounded share of completed tasks, 0..=100.
    pub percent_complete: u32,
    /// Board is non-empty and every task is completed.
    pub all_done: bool,
}

impl TaskBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from loaded records. Nothing is running afterwards.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: tasks.into_iter().map(Task::normalized).collect(),
            running: None,
            version: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    pub fn running(&self) -> Option<&TaskId> {
        self.running.as_ref()
    }

    pub fn is_running(&self, id: &TaskId) -> bool {
        self.running.as_ref() == Some(id)
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Copies of every task with the running flag filled in.
    pub fn snapshot(&self) -> Vec<TaskSnapshot> {
        self.tasks
            .iter()
            .map(|t| TaskSnapshot {
                task: t.clone(),
                is_running: self.is_running(&t.id),
            })
            .collect()
    }

    pub fn summary(&self) -> BoardSummary {
        let total = self.tasks.len();
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        let completed_pomodoros = self
            .tasks
            .iter()
            .map(|t| t.completed_pomodoros as u64)
            .sum();
        let percent_complete = if total == 0 {
            0
        } else {
            ((completed as f64 / total as f64) * 100.0).round() as u32
        };
        BoardSummary {
            total,
            completed,
            remaining: total - completed,
            completed_pomodoros,
            percent_complete,
            all_done: total > 0 && completed == total,
        }
    }

    /// Resolve a full id or a unique id prefix.
    pub fn resolve(&self, prefix: &str) -> Result<TaskId> {
        if let Some(task) = self.tasks.iter().find(|t| t.id.as_str() == prefix) {
            return Ok(task.id.clone());
        }
        let matches: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|t| !prefix.is_empty() && t.id.as_str().starts_with(prefix))
            .collect();
        match matches.as_slice() {
            [only] => Ok(only.id.clone()),
            [] => Err(CoreError::not_found(prefix)),
            many => Err(ValidationError::AmbiguousId {
                prefix: prefix.to_string(),
                count: many.len(),
            }
            .into()),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Add a task at the front of the board.
    pub fn add(&mut self, text: &str) -> Result<Event> {
        if text.trim().is_empty() {
            return Err(ValidationError::EmptyText.into());
        }
        let task = Task::new(text, 1);
        let task_id = task.id.clone();
        self.tasks.insert(0, task);
        self.bump();
        debug!(task_id = %task_id, "task added");
        Ok(Event::TaskAdded {
            task_id,
            at: Utc::now(),
        })
    }

    /// Remove a task, stopping its timer if it was running.
    pub fn delete(&mut self, id: &TaskId) -> Result<Event> {
        let index = self.index_of(id)?;
        let was_running = self.stop_if_running(id);
        self.tasks.remove(index);
        self.bump();
        debug!(task_id = %id, was_running, "task deleted");
        Ok(Event::TaskDeleted {
            task_id: id.clone(),
            was_running,
            at: Utc::now(),
        })
    }

    /// Flip `completed`. Completing a running task stops its timer first;
    /// reopening leaves phase and countdown as they were.
    pub fn toggle_complete(&mut self, id: &TaskId) -> Result<Event> {
        let index = self.index_of(id)?;
        let event = if self.tasks[index].completed {
            self.tasks[index].completed = false;
            debug!(task_id = %id, "task reopened");
            Event::TaskReopened {
                task_id: id.clone(),
                at: Utc::now(),
            }
        } else {
            self.stop_if_running(id);
            self.tasks[index].completed = true;
            debug!(task_id = %id, "task completed");
            Event::TaskCompleted {
                task_id: id.clone(),
                at: Utc::now(),
            }
        };
        self.bump();
        Ok(event)
    }

    /// Change the estimate by `delta`, never going below one pomodoro.
    /// Ignored for completed tasks.
    pub fn adjust_estimate(&mut self, id: &TaskId, delta: i64) -> Result<Option<Event>> {
        let index = self.index_of(id)?;
        let task = &mut self.tasks[index];
        if task.completed {
            return Ok(None);
        }
        let next = (task.estimated_pomodoros as i64)
            .saturating_add(delta)
            .clamp(1, u32::MAX as i64) as u32;
        if next == task.estimated_pomodoros {
            return Ok(None);
        }
        task.estimated_pomodoros = next;
        self.bump();
        debug!(task_id = %id, estimated = next, "estimate adjusted");
        Ok(Some(Event::EstimateAdjusted {
            task_id: id.clone(),
            estimated_pomodoros: next,
            at: Utc::now(),
        }))
    }

    /// Start the task's timer, stopping whichever task was running.
    ///
    /// The started task moves to the front of the board. Ignored if the
    /// task is already running or completed.
    pub fn start(&mut self, id: &TaskId) -> Result<Option<Event>> {
        let index = self.index_of(id)?;
        if self.is_running(id) || self.tasks[index].completed {
            return Ok(None);
        }
        let stopped = self.running.replace(id.clone());
        let task = self.tasks.remove(index);
        self.tasks.insert(0, task);
        self.bump();
        let task = &self.tasks[0];
        debug!(task_id = %id, stopped = ?stopped, phase = %task.current_phase, "timer started");
        Ok(Some(Event::TimerStarted {
            task_id: id.clone(),
            phase: task.current_phase,
            remaining_secs: task.remaining_time,
            stopped,
            at: Utc::now(),
        }))
    }

    /// Advance the running task by one second.
    ///
    /// Returns `Some(Event::PhaseCompleted)` when the countdown reaches zero.
    /// The timer is then stopped with the next phase loaded. Ticks for a task
    /// that is not running (or no longer exists) are dropped.
    pub fn tick(&mut self, id: &TaskId) -> Option<Event> {
        if !self.is_running(id) {
            return None;
        }
        let index = self.tasks.iter().position(|t| &t.id == id)?;
        let task = &mut self.tasks[index];
        task.remaining_time = task.remaining_time.saturating_sub(1);
        if task.remaining_time > 0 {
            self.bump();
            return None;
        }

        let from = task.current_phase;
        if from == Phase::Work {
            task.completed_pomodoros += 1;
        }
        task.restart_phase(from.next());
        let to = task.current_phase;
        let completed_pomodoros = task.completed_pomodoros;
        self.running = None;
        self.bump();
        info!(task_id = %id, %from, %to, completed_pomodoros, "phase completed");
        Some(Event::PhaseCompleted {
            task_id: id.clone(),
            from,
            to,
            completed_pomodoros,
            at: Utc::now(),
        })
    }

    /// Stop the task's timer, keeping its phase and countdown.
    pub fn pause(&mut self, id: &TaskId) -> Result<Option<Event>> {
        let index = self.index_of(id)?;
        if !self.stop_if_running(id) {
            return Ok(None);
        }
        self.bump();
        let remaining_secs = self.tasks[index].remaining_time;
        debug!(task_id = %id, remaining_secs, "timer paused");
        Ok(Some(Event::TimerPaused {
            task_id: id.clone(),
            remaining_secs,
            at: Utc::now(),
        }))
    }

    /// Stop the timer and return to the start of a work phase.
    /// Pomodoro counts and the estimate are kept. Ignored for completed tasks.
    pub fn reset(&mut self, id: &TaskId) -> Result<Option<Event>> {
        let index = self.index_of(id)?;
        if self.tasks[index].completed {
            return Ok(None);
        }
        self.stop_if_running(id);
        self.tasks[index].restart_phase(Phase::Work);
        self.bump();
        debug!(task_id = %id, "timer reset");
        Ok(Some(Event::TimerReset {
            task_id: id.clone(),
            at: Utc::now(),
        }))
    }

    /// Put imported tasks on the board.
    ///
    /// `Merge` places them ahead of the existing tasks in source order.
    /// `Replace` drops every existing task first, stopping any timer.
    pub fn import(&mut self, tasks: Vec<Task>, mode: ImportMode) -> Event {
        let count = tasks.len();
        let replaced = mode == ImportMode::Replace;
        if replaced {
            self.running = None;
            self.tasks.clear();
        }
        let existing = std::mem::take(&mut self.tasks);
        self.tasks = tasks
            .into_iter()
            .map(Task::normalized)
            .chain(existing)
            .collect();
        self.bump();
        info!(count, replaced, "tasks imported");
        Event::TasksImported {
            count,
            replaced,
            at: Utc::now(),
        }
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn index_of(&self, id: &TaskId) -> Result<usize> {
        self.tasks
            .iter()
            .position(|t| &t.id == id)
            .ok_or_else(|| CoreError::not_found(id.as_str()))
    }

    fn stop_if_running(&mut self, id: &TaskId) -> bool {
        if self.is_running(id) {
            self.running = None;
            true
        } else {
            false
        }
    }

    fn bump(&mut self) {
        self.version += 1;
    }

    #[cfg(test)]
    pub(crate) fn task_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| &t.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::{BREAK_DURATION, WORK_DURATION};

    fn board_with(texts: &[&str]) -> (TaskBoard, Vec<TaskId>) {
        let mut board = TaskBoard::new();
        let mut ids = Vec::new();
        for text in texts {
            match board.add(text).unwrap() {
                Event::TaskAdded { task_id, .. } => ids.push(task_id),
                other => panic!("Expected TaskAdded, got {other:?}"),
            }
        }
        (board, ids)
    }

    fn run_to_phase_end(board: &mut TaskBoard, id: &TaskId) -> Option<Event> {
        let mut completed = None;
        for _ in 0..WORK_DURATION {
            if let Some(event) = board.tick(id) {
                completed = Some(event);
                break;
            }
        }
        completed
    }

    #[test]
    fn add_rejects_blank_text() {
        let mut board = TaskBoard::new();
        let err = board.add("   ").unwrap_err();
        assert!(matches!(err, CoreError::Validation(ValidationError::EmptyText)));
        assert!(board.is_empty());
        assert_eq!(board.version(), 0);
    }

    #[test]
    fn add_inserts_most_recent_first() {
        let (board, ids) = board_with(&["first", "second"]);
        assert_eq!(board.tasks()[0].id(), &ids[1]);
        assert_eq!(board.tasks()[1].id(), &ids[0]);
        assert_eq!(board.tasks()[0].text(), "second");
    }

    #[test]
    fn add_keeps_text_as_given() {
        let (board, _) = board_with(&["  padded  "]);
        assert_eq!(board.tasks()[0].text(), "  padded  ");
    }

    #[test]
    fn start_stops_previous_timer_without_touching_it() {
        let (mut board, ids) = board_with(&["a", "b"]);
        board.start(&ids[0]).unwrap();
        board.tick(&ids[0]);
        board.tick(&ids[0]);

        let event = board.start(&ids[1]).unwrap().unwrap();
        match event {
            Event::TimerStarted { stopped, .. } => assert_eq!(stopped, Some(ids[0].clone())),
            other => panic!("Expected TimerStarted, got {other:?}"),
        }
        assert!(!board.is_running(&ids[0]));
        assert!(board.is_running(&ids[1]));
        let a = board.get(&ids[0]).unwrap();
        assert_eq!(a.remaining_time(), WORK_DURATION - 2);
        assert_eq!(a.current_phase(), Phase::Work);
    }

    #[test]
    fn start_moves_task_to_front() {
        let (mut board, ids) = board_with(&["a", "b"]);
        let texts: Vec<&str> = board.tasks().iter().map(|t| t.text()).collect();
        assert_eq!(texts, vec!["b", "a"]);

        let version = board.version();
        board.start(&ids[0]).unwrap();
        let texts: Vec<&str> = board.tasks().iter().map(|t| t.text()).collect();
        assert_eq!(texts, vec!["a", "b"]);
        assert!(board.version() > version);

        // Completed tasks are not started and stay where they are.
        board.toggle_complete(&ids[1]).unwrap();
        assert!(board.start(&ids[1]).unwrap().is_none());
        assert_eq!(board.tasks()[1].id(), &ids[1]);
    }

    #[test]
    fn start_is_idempotent() {
        let (mut board, ids) = board_with(&["a"]);
        assert!(board.start(&ids[0]).unwrap().is_some());
        let version = board.version();
        assert!(board.start(&ids[0]).unwrap().is_none());
        assert_eq!(board.version(), version);
        assert!(board.is_running(&ids[0]));
    }

    #[test]
    fn start_ignores_completed_task() {
        let (mut board, ids) = board_with(&["a"]);
        board.toggle_complete(&ids[0]).unwrap();
        assert!(board.start(&ids[0]).unwrap().is_none());
        assert!(board.running().is_none());
    }

    #[test]
    fn unknown_id_is_not_found() {
        let (mut board, _) = board_with(&["a"]);
        let ghost = TaskId::from("ghost");
        assert!(matches!(board.start(&ghost), Err(CoreError::NotFound { .. })));
        assert!(matches!(board.pause(&ghost), Err(CoreError::NotFound { .. })));
        assert!(matches!(board.reset(&ghost), Err(CoreError::NotFound { .. })));
        assert!(matches!(board.delete(&ghost), Err(CoreError::NotFound { .. })));
        assert!(matches!(
            board.toggle_complete(&ghost),
            Err(CoreError::NotFound { .. })
        ));
        assert!(matches!(
            board.adjust_estimate(&ghost, 1),
            Err(CoreError::NotFound { .. })
        ));
        assert!(board.tick(&ghost).is_none());
    }

    #[test]
    fn tick_on_idle_task_is_dropped() {
        let (mut board, ids) = board_with(&["a"]);
        assert!(board.tick(&ids[0]).is_none());
        assert_eq!(board.get(&ids[0]).unwrap().remaining_time(), WORK_DURATION);
    }

    #[test]
    fn full_work_phase_completes_one_pomodoro() {
        let (mut board, ids) = board_with(&["a"]);
        board.start(&ids[0]).unwrap();

        let mut transitions = 0;
        for _ in 0..WORK_DURATION {
            if let Some(event) = board.tick(&ids[0]) {
                transitions += 1;
                match event {
                    Event::PhaseCompleted {
                        from,
                        to,
                        completed_pomodoros,
                        ..
                    } => {
                        assert_eq!(from, Phase::Work);
                        assert_eq!(to, Phase::Break);
                        assert_eq!(completed_pomodoros, 1);
                    }
                    other => panic!("Expected PhaseCompleted, got {other:?}"),
                }
            }
        }

        assert_eq!(transitions, 1);
        let task = board.get(&ids[0]).unwrap();
        assert_eq!(task.current_phase(), Phase::Break);
        assert_eq!(task.remaining_time(), BREAK_DURATION);
        assert_eq!(task.completed_pomodoros(), 1);
        assert!(!board.is_running(&ids[0]));
    }

    #[test]
    fn break_expiry_returns_to_work_without_counting() {
        let (mut board, ids) = board_with(&["a"]);
        board.start(&ids[0]).unwrap();
        run_to_phase_end(&mut board, &ids[0]).unwrap();

        board.start(&ids[0]).unwrap();
        let event = run_to_phase_end(&mut board, &ids[0]).unwrap();
        match event {
            Event::PhaseCompleted { from, to, completed_pomodoros, .. } => {
                assert_eq!(from, Phase::Break);
                assert_eq!(to, Phase::Work);
                assert_eq!(completed_pomodoros, 1);
            }
            other => panic!("Expected PhaseCompleted, got {other:?}"),
        }
        let task = board.get(&ids[0]).unwrap();
        assert_eq!(task.remaining_time(), WORK_DURATION);
        assert!(board.running().is_none());
    }

    #[test]
    fn pause_keeps_countdown() {
        let (mut board, ids) = board_with(&["a"]);
        board.start(&ids[0]).unwrap();
        for _ in 0..10 {
            board.tick(&ids[0]);
        }
        let event = board.pause(&ids[0]).unwrap().unwrap();
        assert!(matches!(event, Event::TimerPaused { remaining_secs: 1490, .. }));
        assert!(board.pause(&ids[0]).unwrap().is_none());
        assert_eq!(board.get(&ids[0]).unwrap().remaining_time(), 1490);
    }

    #[test]
    fn reset_returns_to_work_and_keeps_counts() {
        let (mut board, ids) = board_with(&["a"]);
        board.adjust_estimate(&ids[0], 3).unwrap();
        board.start(&ids[0]).unwrap();
        run_to_phase_end(&mut board, &ids[0]).unwrap();
        board.start(&ids[0]).unwrap();
        board.tick(&ids[0]);

        let event = board.reset(&ids[0]).unwrap();
        assert!(matches!(event, Some(Event::TimerReset { .. })));
        let task = board.get(&ids[0]).unwrap();
        assert_eq!(task.current_phase(), Phase::Work);
        assert_eq!(task.remaining_time(), WORK_DURATION);
        assert_eq!(task.completed_pomodoros(), 1);
        assert_eq!(task.estimated_pomodoros(), 4);
        assert!(board.running().is_none());
    }

    #[test]
    fn reset_ignores_completed_task() {
        let (mut board, ids) = board_with(&["a"]);
        board.start(&ids[0]).unwrap();
        run_to_phase_end(&mut board, &ids[0]).unwrap();
        board.start(&ids[0]).unwrap();
        board.tick(&ids[0]);
        board.toggle_complete(&ids[0]).unwrap();

        let version = board.version();
        assert!(board.reset(&ids[0]).unwrap().is_none());
        assert_eq!(board.version(), version);
        let task = board.get(&ids[0]).unwrap();
        assert_eq!(task.current_phase(), Phase::Break);
        assert_eq!(task.remaining_time(), BREAK_DURATION - 1);
    }

    #[test]
    fn completing_running_task_stops_it() {
        let (mut board, ids) = board_with(&["a"]);
        board.start(&ids[0]).unwrap();
        board.tick(&ids[0]);
        board.toggle_complete(&ids[0]).unwrap();
        assert!(board.running().is_none());
        assert!(board.get(&ids[0]).unwrap().completed());
        assert!(board.tick(&ids[0]).is_none());
    }

    #[test]
    fn reopening_keeps_phase_and_does_not_start() {
        let (mut board, ids) = board_with(&["a"]);
        board.start(&ids[0]).unwrap();
        for _ in 0..5 {
            board.tick(&ids[0]);
        }
        board.toggle_complete(&ids[0]).unwrap();
        let event = board.toggle_complete(&ids[0]).unwrap();
        assert!(matches!(event, Event::TaskReopened { .. }));
        let task = board.get(&ids[0]).unwrap();
        assert!(!task.completed());
        assert_eq!(task.remaining_time(), WORK_DURATION - 5);
        assert!(board.running().is_none());
    }

    #[test]
    fn estimate_has_floor_of_one() {
        let (mut board, ids) = board_with(&["a"]);
        assert!(board.adjust_estimate(&ids[0], -1).unwrap().is_none());
        assert_eq!(board.get(&ids[0]).unwrap().estimated_pomodoros(), 1);

        board.adjust_estimate(&ids[0], 4).unwrap();
        board.adjust_estimate(&ids[0], -100).unwrap();
        assert_eq!(board.get(&ids[0]).unwrap().estimated_pomodoros(), 1);
    }

    #[test]
    fn estimate_frozen_when_completed() {
        let (mut board, ids) = board_with(&["a"]);
        board.toggle_complete(&ids[0]).unwrap();
        assert!(board.adjust_estimate(&ids[0], 2).unwrap().is_none());
        assert_eq!(board.get(&ids[0]).unwrap().estimated_pomodoros(), 1);
    }

    #[test]
    fn deleting_running_task_clears_timer() {
        let (mut board, ids) = board_with(&["a", "b"]);
        board.start(&ids[1]).unwrap();
        let event = board.delete(&ids[1]).unwrap();
        assert!(matches!(event, Event::TaskDeleted { was_running: true, .. }));
        assert!(board.running().is_none());
        assert_eq!(board.len(), 1);
        assert!(board.tick(&ids[1]).is_none());
    }

    #[test]
    fn import_merge_prepends_in_source_order() {
        let (mut board, ids) = board_with(&["existing"]);
        board.start(&ids[0]).unwrap();
        let imported = vec![Task::new("one", 1), Task::new("two", 3)];
        let event = board.import(imported, ImportMode::Merge);
        assert!(matches!(event, Event::TasksImported { count: 2, replaced: false, .. }));
        let texts: Vec<&str> = board.tasks().iter().map(|t| t.text()).collect();
        assert_eq!(texts, vec!["one", "two", "existing"]);
        assert!(board.is_running(&ids[0]));
    }

    #[test]
    fn import_replace_drops_existing_and_stops_timer() {
        let (mut board, ids) = board_with(&["existing"]);
        board.start(&ids[0]).unwrap();
        board.import(vec![Task::new("fresh", 1)], ImportMode::Replace);
        assert_eq!(board.len(), 1);
        assert_eq!(board.tasks()[0].text(), "fresh");
        assert!(board.running().is_none());
    }

    #[test]
    fn summary_counts_and_all_done() {
        let (mut board, ids) = board_with(&["a", "b", "c"]);
        assert!(!board.summary().all_done);
        board.toggle_complete(&ids[0]).unwrap();
        let summary = board.summary();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.remaining, 2);
        assert_eq!(summary.percent_complete, 33);

        board.toggle_complete(&ids[1]).unwrap();
        board.toggle_complete(&ids[2]).unwrap();
        assert!(board.summary().all_done);
        assert!(!TaskBoard::new().summary().all_done);
    }

    #[test]
    fn resolve_accepts_unique_prefix() {
        let board = TaskBoard::from_tasks(vec![
            serde_json::from_str(r#"{"id": "abc123", "text": "a"}"#).unwrap(),
            serde_json::from_str(r#"{"id": "abd456", "text": "b"}"#).unwrap(),
        ]);
        assert_eq!(board.resolve("abc").unwrap().as_str(), "abc123");
        assert_eq!(board.resolve("abd456").unwrap().as_str(), "abd456");
        assert!(matches!(
            board.resolve("ab"),
            Err(CoreError::Validation(ValidationError::AmbiguousId { count: 2, .. }))
        ));
        assert!(matches!(board.resolve("zz"), Err(CoreError::NotFound { .. })));
    }

    #[test]
    fn snapshot_marks_only_running_task() {
        let (mut board, ids) = board_with(&["a", "b"]);
        board.start(&ids[0]).unwrap();
        let snap = board.snapshot();
        let running: Vec<_> = snap.iter().filter(|s| s.is_running).collect();
        assert_eq!(running.len(), 1);
        assert_eq!(running[0].task.id(), &ids[0]);
    }
}
