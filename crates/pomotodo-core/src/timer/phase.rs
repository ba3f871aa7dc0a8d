use serde::{Deserialize, Serialize};

/// Length of a work phase in seconds (25 minutes).
pub const WORK_DURATION: u32 = 25 * 60;
/// Length of a break phase in seconds (5 minutes).
pub const BREAK_DURATION: u32 = 5 * 60;

/// The two halves of the pomodoro cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Work,
    Break,
}

impl Phase {
    /// Full duration of this phase in seconds.
    pub fn duration(self) -> u32 {
        match self {
            Phase::Work => WORK_DURATION,
            Phase::Break => BREAK_DURATION,
        }
    }

    /// The phase that follows this one on natural expiry.
    pub fn next(self) -> Phase {
        match self {
            Phase::Work => Phase::Break,
            Phase::Break => Phase::Work,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Phase::Work => "work",
            Phase::Break => "break",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

/// Format a second count as `MM:SS`.
///
/// Minutes are not wrapped into hours, so 3600 renders as `60:00`.
pub fn format_remaining(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_are_fixed() {
        assert_eq!(Phase::Work.duration(), 1500);
        assert_eq!(Phase::Break.duration(), 300);
    }

    #[test]
    fn next_alternates() {
        assert_eq!(Phase::Work.next(), Phase::Break);
        assert_eq!(Phase::Break.next(), Phase::Work);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Phase::Break).unwrap(), "\"break\"");
        let parsed: Phase = serde_json::from_str("\"work\"").unwrap();
        assert_eq!(parsed, Phase::Work);
    }

    #[test]
    fn format_remaining_pads() {
        assert_eq!(format_remaining(0), "00:00");
        assert_eq!(format_remaining(59), "00:59");
        assert_eq!(format_remaining(60), "01:00");
        assert_eq!(format_remaining(119), "01:59");
        assert_eq!(format_remaining(1500), "25:00");
        assert_eq!(format_remaining(3599), "59:59");
        assert_eq!(format_remaining(3600), "60:00");
    }
}
