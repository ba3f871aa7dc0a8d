pub mod config;
pub mod import;
pub mod locale;
pub mod task;
pub mod timer;

use pomotodo_core::{Event, TaskBoard, TaskStore};

/// Open the store and load the persisted board.
pub fn open_board() -> Result<(TaskStore, TaskBoard), Box<dyn std::error::Error>> {
    let mut store = TaskStore::open()?;
    let board = store.load_board()?;
    Ok((store, board))
}

pub fn print_event(event: &Event) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(event)?);
    Ok(())
}

/// Print the event if there is one, otherwise a no-op marker.
pub fn print_outcome(event: Option<Event>) -> Result<(), Box<dyn std::error::Error>> {
    match event {
        Some(event) => print_event(&event),
        None => {
            println!("{{\"type\": \"Unchanged\"}}");
            Ok(())
        }
    }
}
