// Recorder: the in-progress interval's start time.
//
// Purpose
// - Track whether a recording is active and since when.
// - Expose the elapsed time as the HH:MM:SS counter shown while recording.
//
// Boundaries
// - Pure. The current time is always passed in.

use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecorderState {
    pub date_start: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecorderAction {
    Start { at: DateTime<Utc> },
    Stop,
}

impl RecorderState {
    pub fn is_recording(&self) -> bool {
        self.date_start.is_some()
    }

    pub fn elapsed(&self, now: DateTime<Utc>) -> Elapsed {
        match self.date_start {
            Some(start) => Elapsed::from_seconds((now - start).num_seconds()),
            None => Elapsed::default(),
        }
    }
}

/// A second start keeps the first start time.
pub fn evolve_recorder(state: RecorderState, action: RecorderAction) -> RecorderState {
    match (state.date_start, action) {
        (None, RecorderAction::Start { at }) => RecorderState {
            date_start: Some(at),
        },
        (Some(_), RecorderAction::Start { .. }) => state,
        (_, RecorderAction::Stop) => RecorderState { date_start: None },
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Elapsed {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Elapsed {
    pub fn from_seconds(total: i64) -> Self {
        let total = total.max(0);
        Self {
            hours: total / 3600,
            minutes: (total % 3600) / 60,
            seconds: total % 60,
        }
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}
