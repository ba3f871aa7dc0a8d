//! Bulk task creation from external files.

mod ics;

pub use ics::{estimate_pomodoros, extract_tasks_due, extract_today_tasks};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// How imported tasks combine with the tasks already on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportMode {
    /// Imported tasks go in front of the existing ones.
    #[default]
    Merge,
    /// Existing tasks are discarded first.
    Replace,
}

impl fmt::Display for ImportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportMode::Merge => f.write_str("merge"),
            ImportMode::Replace => f.write_str("replace"),
        }
    }
}

impl FromStr for ImportMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "merge" => Ok(ImportMode::Merge),
            "replace" => Ok(ImportMode::Replace),
            other => Err(ValidationError::InvalidValue {
                field: "import.mode".to_string(),
                message: format!("expected 'merge' or 'replace', got '{other}'"),
            }),
        }
    }
}
