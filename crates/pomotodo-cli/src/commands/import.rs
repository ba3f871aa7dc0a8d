//! Calendar import command.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use pomotodo_core::{extract_tasks_due, extract_today_tasks, Config, ImportMode};
use tracing::debug;

use super::{open_board, print_event};

#[derive(Args)]
pub struct ImportArgs {
    /// Path to the .ics file
    pub file: PathBuf,
    /// merge (prepend to existing tasks) or replace (discard existing tasks).
    /// Defaults to `import.mode` from the config.
    #[arg(long)]
    pub mode: Option<ImportMode>,
    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

pub fn run(args: ImportArgs) -> Result<(), Box<dyn std::error::Error>> {
    debug!(file = %args.file.display(), "reading calendar export");
    let content = std::fs::read_to_string(&args.file)
        .map_err(|e| format!("cannot read {}: {e}", args.file.display()))?;

    let tasks = match args.date {
        Some(date) => extract_tasks_due(&content, date),
        None => extract_today_tasks(&content),
    };
    if tasks.is_empty() {
        println!("No to-dos due today were found.");
        return Ok(());
    }

    let mode = match args.mode {
        Some(mode) => mode,
        None => Config::load()?.import.mode,
    };

    let (mut store, mut board) = open_board()?;
    let event = board.import(tasks, mode);
    print_event(&event)?;
    store.save_if_changed(&board)?;
    Ok(())
}
