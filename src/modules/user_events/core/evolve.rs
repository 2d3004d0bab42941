// Evolve function: combine a prior store state with an action to produce the next state.
//
// Purpose
// - Define deterministic transitions for each action.
// - Merge and remove events while keeping by_ids and all_ids in step.
//
// Boundaries
// - No input or output. No side effects.

use crate::modules::user_events::core::actions::UserEventsAction;
use crate::modules::user_events::core::event::{UserEvent, UserEventId};
use crate::modules::user_events::core::state::UserEventsState;
use std::collections::HashMap;

pub fn evolve(state: UserEventsState, action: UserEventsAction) -> UserEventsState {
    let kind = action.kind();
    match action {
        UserEventsAction::LoadRequested
        | UserEventsAction::CreateRequested
        | UserEventsAction::UpdateRequested
        | UserEventsAction::DeleteRequested => UserEventsState {
            pending: Some(kind),
            ..state
        },
        UserEventsAction::LoadSucceeded { events } => load(events),
        UserEventsAction::CreateSucceeded { event } | UserEventsAction::UpdateSucceeded { event } => {
            settled(upsert(state, event))
        }
        UserEventsAction::DeleteSucceeded { event_id } => settled(remove(state, event_id)),
        UserEventsAction::LoadFailed { error }
        | UserEventsAction::CreateFailed { error }
        | UserEventsAction::UpdateFailed { error }
        | UserEventsAction::DeleteFailed { error } => UserEventsState {
            pending: None,
            error: Some(error),
            ..state
        },
    }
}

fn load(events: Vec<UserEvent>) -> UserEventsState {
    let mut by_ids = HashMap::with_capacity(events.len());
    let mut all_ids = Vec::with_capacity(events.len());
    for event in events {
        if by_ids.insert(event.id, event.clone()).is_none() {
            all_ids.push(event.id);
        }
    }
    UserEventsState {
        by_ids,
        all_ids,
        pending: None,
        error: None,
    }
}

fn upsert(mut state: UserEventsState, event: UserEvent) -> UserEventsState {
    let id = event.id;
    if state.by_ids.insert(id, event).is_none() {
        state.all_ids.push(id);
    }
    state
}

fn remove(mut state: UserEventsState, event_id: UserEventId) -> UserEventsState {
    if state.by_ids.remove(&event_id).is_some() {
        state.all_ids.retain(|id| *id != event_id);
    }
    state
}

fn settled(state: UserEventsState) -> UserEventsState {
    UserEventsState {
        pending: None,
        error: None,
        ..state
    }
}
