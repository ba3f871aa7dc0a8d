//! Task management commands for CLI.

use clap::Subcommand;
use pomotodo_core::{format_remaining, TaskSnapshot};

use super::{open_board, print_event, print_outcome};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a new task at the top of the list
    Add {
        /// Task text
        text: String,
    },
    /// List tasks, most recent first
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Delete a task
    Delete {
        /// Task ID or unique prefix
        id: String,
    },
    /// Mark a task done, or reopen a done task
    Toggle {
        /// Task ID or unique prefix
        id: String,
    },
    /// Change the pomodoro estimate (never below 1)
    Estimate {
        /// Task ID or unique prefix
        id: String,
        /// Amount to add, e.g. 1 or -1
        #[arg(allow_hyphen_values = true)]
        delta: i64,
    },
    /// Show completion counts
    Summary {
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
}

fn format_row(snap: &TaskSnapshot) -> String {
    let task = &snap.task;
    let short_id: String = task.id().as_str().chars().take(8).collect();
    let done = if task.completed() { "x" } else { " " };
    let running = if snap.is_running { ">" } else { " " };
    format!(
        "{short_id:<8} [{done}]{running} {:>2}/{:<2} {:>3}% {:<5} {}  {}",
        task.completed_pomodoros(),
        task.estimated_pomodoros(),
        (task.progress() * 100.0).round() as u32,
        task.current_phase(),
        format_remaining(task.remaining_time()),
        task.text(),
    )
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let (mut store, mut board) = open_board()?;

    match action {
        TaskAction::Add { text } => {
            let event = board.add(&text)?;
            print_event(&event)?;
        }
        TaskAction::List { json } => {
            let snapshot = board.snapshot();
            if json {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else if snapshot.is_empty() {
                println!("No tasks.");
            } else {
                for snap in &snapshot {
                    println!("{}", format_row(snap));
                }
            }
        }
        TaskAction::Delete { id } => {
            let id = board.resolve(&id)?;
            let event = board.delete(&id)?;
            print_event(&event)?;
        }
        TaskAction::Toggle { id } => {
            let id = board.resolve(&id)?;
            let event = board.toggle_complete(&id)?;
            print_event(&event)?;
            if board.summary().all_done {
                println!("All done!");
            }
        }
        TaskAction::Estimate { id, delta } => {
            let id = board.resolve(&id)?;
            print_outcome(board.adjust_estimate(&id, delta)?)?;
        }
        TaskAction::Summary { json } => {
            let summary = board.summary();
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!(
                    "{}/{} done ({}%), {} remaining, {} pomodoros completed",
                    summary.completed,
                    summary.total,
                    summary.percent_complete,
                    summary.remaining,
                    summary.completed_pomodoros,
                );
            }
        }
    }

    store.save_if_changed(&board)?;
    Ok(())
}
