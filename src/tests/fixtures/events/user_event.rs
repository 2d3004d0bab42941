// Shared test fixture for UserEvent values.
// The default event is read from the JSON file next to this module, in the wire shape the
// events backend returns.

use crate::modules::user_events::core::event::{UserEvent, UserEventId};
use chrono::{DateTime, Utc};
use std::fs;

const USER_EVENT_JSON: &str = "./src/tests/fixtures/events/json/user_event.json";

pub fn make_user_event() -> UserEvent {
    let json_str = fs::read_to_string(USER_EVENT_JSON).unwrap();
    serde_json::from_str(&json_str).unwrap()
}

pub struct UserEventBuilder {
    inner: UserEvent,
}

impl Default for UserEventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl UserEventBuilder {
    pub fn new() -> Self {
        Self {
            inner: make_user_event(),
        }
    }

    pub fn id(mut self, v: u64) -> Self {
        self.inner.id = UserEventId(v);
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn date_start(mut self, v: DateTime<Utc>) -> Self {
        self.inner.date_start = v;
        self
    }

    pub fn date_end(mut self, v: DateTime<Utc>) -> Self {
        self.inner.date_end = v;
        self
    }

    pub fn build(self) -> UserEvent {
        self.inner
    }
}

#[cfg(test)]
mod user_event_builder_tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = UserEventBuilder::default().build();
        assert_eq!(built.id, UserEventId(1));
        assert_eq!(built.title, "no name");
        assert_eq!(built.date_start, Utc.with_ymd_and_hms(2024, 1, 5, 9, 0, 0).unwrap());
        assert_eq!(built.date_end, Utc.with_ymd_and_hms(2024, 1, 5, 10, 30, 0).unwrap());
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let start = Utc.with_ymd_and_hms(2023, 7, 1, 12, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2023, 7, 1, 13, 0, 0).unwrap();
        let custom = UserEventBuilder::new()
            .id(12)
            .title("Standup")
            .date_start(start)
            .date_end(end)
            .build();

        assert_eq!(custom.id, UserEventId(12));
        assert_eq!(custom.title, "Standup");
        assert_eq!(custom.date_start, start);
        assert_eq!(custom.date_end, end);
    }
}
