//! Task list and locale persistence on top of the kv table.
//!
//! The task list is stored as one JSON array under [`TASKS_KEY`]. Records
//! never carry a running flag; a loaded board always starts with every
//! timer stopped.

use tracing::{debug, warn};

use super::database::Database;
use crate::error::Result;
use crate::locale::Locale;
use crate::task::Task;
use crate::timer::TaskBoard;

pub const TASKS_KEY: &str = "todos";
pub const LOCALE_KEY: &str = "locale";

/// Loads and saves the board, skipping writes when nothing changed.
pub struct TaskStore {
    db: Database,
    saved_version: Option<u64>,
}

impl TaskStore {
    pub fn new(db: Database) -> Self {
        Self {
            db,
            saved_version: None,
        }
    }

    /// Open the store in the default data directory.
    pub fn open() -> Result<Self> {
        Ok(Self::new(Database::open()?))
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Load the persisted board.
    ///
    /// Records that fail to parse are dropped with a warning. A stored value
    /// that is not a JSON array is an error.
    pub fn load_board(&mut self) -> Result<TaskBoard> {
        let Some(json) = self.db.kv_get(TASKS_KEY)? else {
            self.saved_version = Some(0);
            return Ok(TaskBoard::new());
        };
        let records: Vec<serde_json::Value> = serde_json::from_str(&json)?;
        let total = records.len();
        let tasks: Vec<Task> = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value::<Task>(record) {
                Ok(task) if !task.text().trim().is_empty() => Some(task),
                Ok(_) => {
                    warn!(index, "skipping stored task with empty text");
                    None
                }
                Err(e) => {
                    warn!(index, error = %e, "skipping malformed stored task");
                    None
                }
            })
            .collect();
        debug!(loaded = tasks.len(), total, "loaded task list");
        let board = TaskBoard::from_tasks(tasks);
        self.saved_version = Some(board.version());
        Ok(board)
    }

    /// Write the full task list.
    pub fn save_board(&mut self, board: &TaskBoard) -> Result<()> {
        let json = serde_json::to_string(board.tasks())?;
        self.db.kv_set(TASKS_KEY, &json)?;
        self.saved_version = Some(board.version());
        debug!(count = board.len(), version = board.version(), "saved task list");
        Ok(())
    }

    /// Write the task list if the board changed since the last load or save.
    /// Returns whether a write happened.
    pub fn save_if_changed(&mut self, board: &TaskBoard) -> Result<bool> {
        if self.saved_version == Some(board.version()) {
            return Ok(false);
        }
        self.save_board(board)?;
        Ok(true)
    }

    /// Stored locale, or the default when unset or unrecognised.
    pub fn locale(&self) -> Result<Locale> {
        let stored = self.db.kv_get(LOCALE_KEY)?;
        Ok(match stored {
            Some(tag) => tag.parse().unwrap_or_else(|_| {
                warn!(tag = %tag, "unknown stored locale, using default");
                Locale::default()
            }),
            None => Locale::default(),
        })
    }

    pub fn set_locale(&self, locale: Locale) -> Result<()> {
        self.db.kv_set(LOCALE_KEY, locale.tag())
    }
}
