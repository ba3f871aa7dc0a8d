mod driver;
mod engine;
mod phase;

pub use driver::{DriveOutcome, TickDriver};
pub use engine::{BoardSummary, TaskBoard};
pub use phase::{format_remaining, Phase, BREAK_DURATION, WORK_DURATION};
