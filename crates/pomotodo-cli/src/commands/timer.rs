use std::io::Write;

use clap::Subcommand;
use pomotodo_core::{
    format_remaining, Config, DriveOutcome, Notifier, SilentNotifier, TerminalNotifier, TickDriver,
};
use tokio::sync::watch;

use super::{open_board, print_event, print_outcome};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Start a task's timer and count down in the foreground (Ctrl-C pauses)
    Run {
        /// Task ID or unique prefix
        id: String,
    },
    /// Stop the timer and go back to a full work phase (ignored for completed tasks)
    Reset {
        /// Task ID or unique prefix
        id: String,
    },
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TimerAction::Run { id } => run_foreground(&id),
        TimerAction::Reset { id } => {
            let (mut store, mut board) = open_board()?;
            let id = board.resolve(&id)?;
            print_outcome(board.reset(&id)?)?;
            store.save_if_changed(&board)?;
            Ok(())
        }
    }
}

fn run_foreground(id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let (mut store, mut board) = open_board()?;
    let id = board.resolve(id)?;

    let notifier: Box<dyn Notifier> = if config.notifications.enabled {
        Box::new(TerminalNotifier::new(config.notifications.bell))
    } else {
        Box::new(SilentNotifier)
    };
    let driver = TickDriver::new(config.timer.tick_interval());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let outcome = runtime.block_on(async {
        let (stop_tx, stop_rx) = watch::channel(false);
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                let _ = stop_tx.send(true);
            }
        });

        driver
            .run(&mut board, &id, notifier.as_ref(), stop_rx, |board| {
                if let Some(task) = board.get(&id) {
                    let mut stderr = std::io::stderr().lock();
                    let _ = write!(
                        stderr,
                        "\r{} {}  {}",
                        task.current_phase(),
                        format_remaining(task.remaining_time()),
                        task.text()
                    );
                    let _ = stderr.flush();
                }
                store.save_if_changed(board).map(|_| ())
            })
            .await
    });
    eprintln!();

    match outcome? {
        DriveOutcome::PhaseCompleted(event) => print_event(&event)?,
        DriveOutcome::Stopped => {
            let remaining = board
                .get(&id)
                .map(|t| format_remaining(t.remaining_time()))
                .unwrap_or_default();
            println!("Paused at {remaining}");
        }
        DriveOutcome::NotStarted => println!("Task is completed; reopen it to run the timer."),
    }
    store.save_if_changed(&board)?;
    Ok(())
}
