// Group events into calendar days for display.
//
// Purpose
// - Bucket every event under the UTC day it starts on, and also under the UTC day it ends on
//   when that differs (an event spanning midnight shows on both days).
//
// Responsibilities
// - Keep input order inside a bucket.
// - Return buckets sorted ascending by day.
//
// Boundaries
// - Pure. Only the start and end days are keyed, days strictly in between are not.

use crate::modules::user_events::core::event::UserEvent;
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGroup {
    pub day: NaiveDate,
    pub events: Vec<UserEvent>,
}

impl DayGroup {
    pub fn key(&self) -> String {
        format_day_key(self.day)
    }

    /// Display label such as "5 January".
    pub fn label(&self) -> String {
        self.day.format("%-d %B").to_string()
    }
}

pub fn day_key(timestamp: &DateTime<Utc>) -> NaiveDate {
    timestamp.date_naive()
}

pub fn format_day_key(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

pub fn group_events_by_day(events: &[UserEvent]) -> Vec<DayGroup> {
    let mut groups: BTreeMap<NaiveDate, Vec<UserEvent>> = BTreeMap::new();

    for event in events {
        let start_key = day_key(&event.date_start);
        let end_key = day_key(&event.date_end);

        groups.entry(start_key).or_default().push(event.clone());
        if start_key != end_key {
            groups.entry(end_key).or_default().push(event.clone());
        }
    }

    groups
        .into_iter()
        .map(|(day, events)| DayGroup { day, events })
        .collect()
}

#[cfg(test)]
mod day_groups_tests {
    use super::*;
    use crate::tests::fixtures::events::user_event::UserEventBuilder;
    use chrono::TimeZone;
    use rstest::rstest;

    fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, day, hour, minute, 0).unwrap()
    }

    fn keys(groups: &[DayGroup]) -> Vec<String> {
        groups.iter().map(DayGroup::key).collect()
    }

    fn ids(group: &DayGroup) -> Vec<u64> {
        group.events.iter().map(|event| event.id.0).collect()
    }

    #[rstest]
    fn it_should_return_no_groups_without_events() {
        assert!(group_events_by_day(&[]).is_empty());
    }

    #[rstest]
    fn it_should_place_an_event_under_its_start_day() {
        let event = UserEventBuilder::new()
            .id(1)
            .date_start(at(5, 9, 0))
            .date_end(at(5, 11, 0))
            .build();
        let groups = group_events_by_day(&[event.clone()]);
        assert_eq!(keys(&groups), vec!["2024-01-05"]);
        assert_eq!(groups[0].events, vec![event]);
    }

    #[rstest]
    fn it_should_place_an_event_spanning_midnight_under_both_days() {
        let event = UserEventBuilder::new()
            .id(1)
            .date_start(at(5, 23, 30))
            .date_end(at(6, 0, 45))
            .build();
        let groups = group_events_by_day(&[event]);
        assert_eq!(keys(&groups), vec!["2024-01-05", "2024-01-06"]);
        assert_eq!(ids(&groups[0]), vec![1]);
        assert_eq!(ids(&groups[1]), vec![1]);
    }

    #[rstest]
    fn it_should_keep_the_events_already_grouped_under_the_end_day() {
        let morning = UserEventBuilder::new()
            .id(1)
            .date_start(at(6, 8, 0))
            .date_end(at(6, 9, 0))
            .build();
        let overnight = UserEventBuilder::new()
            .id(2)
            .date_start(at(5, 22, 0))
            .date_end(at(6, 2, 0))
            .build();
        let groups = group_events_by_day(&[morning, overnight]);
        assert_eq!(keys(&groups), vec!["2024-01-05", "2024-01-06"]);
        assert_eq!(ids(&groups[0]), vec![2]);
        assert_eq!(ids(&groups[1]), vec![1, 2]);
    }

    #[rstest]
    fn it_should_sort_the_days_chronologically() {
        let events = vec![
            UserEventBuilder::new().id(1).date_start(at(20, 9, 0)).date_end(at(20, 10, 0)).build(),
            UserEventBuilder::new().id(2).date_start(at(3, 9, 0)).date_end(at(3, 10, 0)).build(),
            UserEventBuilder::new().id(3).date_start(at(11, 9, 0)).date_end(at(11, 10, 0)).build(),
            UserEventBuilder::new().id(4).date_start(at(3, 14, 0)).date_end(at(3, 15, 0)).build(),
        ];
        let groups = group_events_by_day(&events);
        assert_eq!(keys(&groups), vec!["2024-01-03", "2024-01-11", "2024-01-20"]);
        assert_eq!(ids(&groups[0]), vec![2, 4]);
    }

    #[rstest]
    fn it_should_sort_across_month_and_year_boundaries() {
        let late = Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap();
        let early = Utc.with_ymd_and_hms(2023, 12, 31, 9, 0, 0).unwrap();
        let groups = group_events_by_day(&[
            UserEventBuilder::new().id(1).date_start(late).date_end(late).build(),
            UserEventBuilder::new().id(2).date_start(early).date_end(early).build(),
        ]);
        assert_eq!(keys(&groups), vec!["2023-12-31", "2024-01-02"]);
    }

    #[rstest]
    fn it_should_only_key_the_start_and_end_days() {
        let event = UserEventBuilder::new()
            .id(1)
            .date_start(at(1, 12, 0))
            .date_end(at(3, 12, 0))
            .build();
        let groups = group_events_by_day(&[event]);
        assert_eq!(keys(&groups), vec!["2024-01-01", "2024-01-03"]);
    }

    #[rstest]
    fn it_should_use_the_utc_day() {
        let event = UserEventBuilder::new()
            .id(1)
            .date_start(
                DateTime::parse_from_rfc3339("2024-01-05T23:30:00-02:00")
                    .unwrap()
                    .with_timezone(&Utc),
            )
            .date_end(at(6, 2, 0))
            .build();
        let groups = group_events_by_day(&[event]);
        assert_eq!(keys(&groups), vec!["2024-01-06"]);
    }

    #[rstest]
    #[case(at(5, 12, 0), "5 January")]
    #[case(Utc.with_ymd_and_hms(2024, 11, 21, 0, 0, 0).unwrap(), "21 November")]
    fn it_should_label_the_day(#[case] start: DateTime<Utc>, #[case] label: &str) {
        let groups =
            group_events_by_day(&[UserEventBuilder::new().date_start(start).date_end(start).build()]);
        assert_eq!(groups[0].label(), label);
    }
}
