//! # Pomotodo Core Library
//!
//! A to-do list where every task runs its own pomodoro cycle: 25 minutes of
//! work, then a 5 minute break, with a running count of finished pomodoros.
//! Only one task's timer may run at a time. The CLI is a thin layer over
//! this library.
//!
//! ## Architecture
//!
//! - **Task board**: owned, versioned collection of tasks and the single
//!   running timer; a pure state machine driven by `tick()`
//! - **Tick driver**: tokio interval that feeds ticks to the running task
//! - **Import**: turns today's open to-dos from an iCalendar export into
//!   fresh tasks
//! - **Storage**: SQLite key-value persistence and TOML configuration
//!
//! ## Key Components
//!
//! - [`TaskBoard`]: task collection and timer state machine
//! - [`TickDriver`]: periodic tick source
//! - [`extract_today_tasks`]: calendar import filter
//! - [`TaskStore`]: task list and locale persistence
//! - [`Config`]: application configuration management

pub mod error;
pub mod events;
pub mod import;
pub mod locale;
pub mod notify;
pub mod storage;
pub mod task;
pub mod timer;

pub use error::{ConfigError, CoreError, DatabaseError, ValidationError};
pub use events::Event;
pub use import::{extract_tasks_due, extract_today_tasks, ImportMode};
pub use locale::Locale;
pub use notify::{Notifier, RecordingNotifier, SilentNotifier, TerminalNotifier};
pub use storage::{Config, Database, TaskStore};
pub use task::{Task, TaskId, TaskSnapshot};
pub use timer::{
    format_remaining, BoardSummary, DriveOutcome, Phase, TaskBoard, TickDriver, BREAK_DURATION,
    WORK_DURATION,
};
