// User event: a titled time interval persisted on the events backend.
//
// Purpose
// - Define the wire and domain shape of an event and of the draft sent to create or update one.
//
// Responsibilities
// - Keep the interval invariant: date_start must not be after date_end.
// - Serialize with camelCase keys (dateStart, dateEnd) so the JSON matches the REST collaborator.
//
// Boundaries
// - No input or output here.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Title given to every event produced by the recorder.
pub const DEFAULT_TITLE: &str = "no name";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserEventId(pub u64);

impl fmt::Display for UserEventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UserEventId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("end date must not be before start date")]
    InvalidInterval,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEvent {
    pub id: UserEventId,
    pub title: String,
    pub date_start: DateTime<Utc>,
    pub date_end: DateTime<Utc>,
}

impl UserEvent {
    pub fn draft(&self) -> UserEventDraft {
        UserEventDraft {
            title: self.title.clone(),
            date_start: self.date_start,
            date_end: self.date_end,
        }
    }

    /// Draft of this event carrying a new title, the body of a rename.
    pub fn with_title(&self, title: impl Into<String>) -> UserEventDraft {
        UserEventDraft {
            title: title.into(),
            ..self.draft()
        }
    }

    pub fn duration(&self) -> Duration {
        self.date_end - self.date_start
    }

    pub fn has_valid_interval(&self) -> bool {
        self.date_start <= self.date_end
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEventDraft {
    pub title: String,
    pub date_start: DateTime<Utc>,
    pub date_end: DateTime<Utc>,
}

impl UserEventDraft {
    pub fn new(
        title: impl Into<String>,
        date_start: DateTime<Utc>,
        date_end: DateTime<Utc>,
    ) -> Result<Self, DecideError> {
        let draft = Self {
            title: title.into(),
            date_start,
            date_end,
        };
        draft.validate()?;
        Ok(draft)
    }

    pub fn validate(&self) -> Result<(), DecideError> {
        if self.date_end < self.date_start {
            return Err(DecideError::InvalidInterval);
        }
        Ok(())
    }

    pub fn into_event(self, id: UserEventId) -> UserEvent {
        UserEvent {
            id,
            title: self.title,
            date_start: self.date_start,
            date_end: self.date_end,
        }
    }
}
