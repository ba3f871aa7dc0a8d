//! Phase-complete notifications.
//!
//! The board only reports that a phase ran out. What the user sees or hears
//! is up to a [`Notifier`]; failures are swallowed, since a missed bell must
//! never disturb the timer state.

use std::io::Write;
use std::sync::Mutex;

use crate::events::Event;
use crate::timer::Phase;

/// Receives fire-and-forget notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, event: &Event);
}

/// Prints a line to stderr and optionally rings the terminal bell.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier {
    pub bell: bool,
}

impl TerminalNotifier {
    pub fn new(bell: bool) -> Self {
        Self { bell }
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, event: &Event) {
        let Event::PhaseCompleted {
            to,
            completed_pomodoros,
            ..
        } = event
        else {
            return;
        };
        let message = match to {
            Phase::Break => format!("Pomodoro #{completed_pomodoros} done. Time for a break."),
            Phase::Work => "Break is over. Ready for the next pomodoro.".to_string(),
        };
        let mut stderr = std::io::stderr().lock();
        let bell = if self.bell { "\x07" } else { "" };
        let _ = writeln!(stderr, "{bell}{message}");
        let _ = stderr.flush();
    }
}

/// Drops every notification. Used when notifications are disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, _event: &Event) {}
}

/// Keeps every event it receives, for inspection in tests.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<Event>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, event: &Event) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn recording_notifier_keeps_events() {
        let notifier = RecordingNotifier::new();
        let event = Event::PhaseCompleted {
            task_id: "t".into(),
            from: Phase::Work,
            to: Phase::Break,
            completed_pomodoros: 1,
            at: Utc::now(),
        };
        notifier.notify(&event);
        assert_eq!(notifier.events(), vec![event]);
    }

    #[test]
    fn terminal_notifier_ignores_other_events() {
        // Only exercises the early return; output goes to stderr.
        TerminalNotifier::new(false).notify(&Event::TimerReset {
            task_id: "t".into(),
            at: Utc::now(),
        });
    }
}
