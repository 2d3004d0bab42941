// Normalized store of user events after folding actions.
//
// Invariant
// - Every id in all_ids has an entry in by_ids and vice versa. all_ids holds no duplicates.
//
// Boundaries
// - This file must not perform input or output.

use crate::modules::user_events::core::actions::ActionKind;
use crate::modules::user_events::core::event::{UserEvent, UserEventId};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserEventsState {
    pub by_ids: HashMap<UserEventId, UserEvent>,
    /// Load and creation order.
    pub all_ids: Vec<UserEventId>,
    pub pending: Option<ActionKind>,
    pub error: Option<String>,
}

impl UserEventsState {
    /// Events in load and creation order.
    pub fn events(&self) -> Vec<UserEvent> {
        self.all_ids
            .iter()
            .filter_map(|id| self.by_ids.get(id))
            .cloned()
            .collect()
    }

    pub fn get(&self, id: UserEventId) -> Option<&UserEvent> {
        self.by_ids.get(&id)
    }

    pub fn len(&self) -> usize {
        self.all_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_ids.is_empty()
    }
}
