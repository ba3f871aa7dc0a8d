//! Today's to-dos from an iCalendar export.
//!
//! A narrow line scanner, not an iCalendar parser:
//! it looks at `VTODO` blocks only, reads four properties by their line
//! prefix, and keeps the entries due today that are not finished.
//! Anything it does not understand is skipped without error.

use std::sync::LazyLock;

use chrono::{Local, NaiveDate};
use regex::Regex;
use tracing::debug;

use crate::task::Task;

const BLOCK_MARKER: &str = "BEGIN:VTODO";
const SUMMARY_PREFIX: &str = "SUMMARY:";
const DUE_PREFIX: &str = "DUE;VALUE=DATE:";
const STATUS_PREFIX: &str = "STATUS:";
const DESCRIPTION_PREFIX: &str = "DESCRIPTION:";
const COMPLETED_STATUS: &str = "COMPLETED";

/// Two pomodoros per hour of estimated work.
const POMODOROS_PER_HOUR: f64 = 2.0;

static HOURS_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"PT(\d+(?:\.\d+)?)H").expect("static pattern is valid"));

/// Fields of one `VTODO` block. Absent properties stay empty.
#[derive(Debug, Default, PartialEq, Eq)]
struct TodoFields<'a> {
    summary: &'a str,
    due: &'a str,
    status: &'a str,
    description: &'a str,
}

impl<'a> TodoFields<'a> {
    /// Later lines with the same prefix overwrite earlier ones.
    fn scan(block: &'a str) -> Self {
        let mut fields = Self::default();
        for line in block.lines() {
            if let Some(value) = line.strip_prefix(SUMMARY_PREFIX) {
                fields.summary = value.trim();
            } else if let Some(value) = line.strip_prefix(DUE_PREFIX) {
                fields.due = value.trim();
            } else if let Some(value) = line.strip_prefix(STATUS_PREFIX) {
                fields.status = value.trim();
            } else if let Some(value) = line.strip_prefix(DESCRIPTION_PREFIX) {
                fields.description = value.trim();
            }
        }
        fields
    }

    fn is_due_and_open(&self, today: &str) -> bool {
        self.due == today && self.status != COMPLETED_STATUS && !self.summary.is_empty()
    }
}

/// Extract the open to-dos due on the current local date.
pub fn extract_today_tasks(raw: &str) -> Vec<Task> {
    extract_tasks_due(raw, Local::now().date_naive())
}

/// Extract the open to-dos due on `date`, in source order.
///
/// Every returned task is fresh: new id, work phase at full length, no
/// completed pomodoros.
pub fn extract_tasks_due(raw: &str, date: NaiveDate) -> Vec<Task> {
    let today = date.format("%Y%m%d").to_string();
    let mut blocks = 0usize;
    let tasks: Vec<Task> = raw
        .split(BLOCK_MARKER)
        .skip(1)
        .inspect(|_| blocks += 1)
        .map(TodoFields::scan)
        .filter(|fields| fields.is_due_and_open(&today))
        .map(|fields| Task::new(fields.summary, estimate_pomodoros(fields.description)))
        .collect();
    debug!(blocks, matched = tasks.len(), date = %today, "scanned calendar export");
    tasks
}

/// Pomodoro estimate from a `PT<hours>H` token in a description.
///
/// Rounds up and never returns less than one. Without a token the
/// estimate is one pomodoro.
pub fn estimate_pomodoros(description: &str) -> u32 {
    HOURS_TOKEN
        .captures(description)
        .and_then(|caps| caps[1].parse::<f64>().ok())
        .filter(|hours| hours.is_finite())
        .map(|hours| (hours * POMODOROS_PER_HOUR).ceil().clamp(1.0, u32::MAX as f64) as u32)
        .unwrap_or(1)
}
