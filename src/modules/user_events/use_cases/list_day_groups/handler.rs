// Day groups query: the events in the store, bucketed by UTC day for display.

use crate::modules::user_events::core::day_groups::{DayGroup, group_events_by_day};
use crate::modules::user_events::use_cases::stores::UserEventsStore;
use std::sync::Arc;

pub struct ListDayGroupsQuery {
    store: Arc<UserEventsStore>,
}

impl ListDayGroupsQuery {
    pub fn new(store: Arc<UserEventsStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Vec<DayGroup> {
        let events = self.store.select(|state| state.events()).await;
        group_events_by_day(&events)
    }
}
