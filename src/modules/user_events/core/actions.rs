// Actions dispatched against the user events store.
//
// Purpose
// - Provide a single type to pattern match in evolve.
//
// Structure
// - Every remote operation has a request, a success and a failure action.
// - ActionKind names the operation and carries its generic failure message.

use crate::modules::user_events::core::event::{UserEvent, UserEventId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Load,
    Create,
    Update,
    Delete,
}

impl ActionKind {
    pub fn failure_message(self) -> &'static str {
        match self {
            ActionKind::Load => "Failed to load events.",
            ActionKind::Create => "Failed to create event.",
            ActionKind::Update => "Failed to update events.",
            ActionKind::Delete => "Failed to delete events.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserEventsAction {
    LoadRequested,
    LoadSucceeded { events: Vec<UserEvent> },
    LoadFailed { error: String },

    CreateRequested,
    CreateSucceeded { event: UserEvent },
    CreateFailed { error: String },

    UpdateRequested,
    UpdateSucceeded { event: UserEvent },
    UpdateFailed { error: String },

    DeleteRequested,
    DeleteSucceeded { event_id: UserEventId },
    DeleteFailed { error: String },
}

impl UserEventsAction {
    pub fn requested(kind: ActionKind) -> Self {
        match kind {
            ActionKind::Load => UserEventsAction::LoadRequested,
            ActionKind::Create => UserEventsAction::CreateRequested,
            ActionKind::Update => UserEventsAction::UpdateRequested,
            ActionKind::Delete => UserEventsAction::DeleteRequested,
        }
    }

    /// Failure action carrying the generic message of its kind.
    pub fn failed(kind: ActionKind) -> Self {
        let error = kind.failure_message().to_string();
        match kind {
            ActionKind::Load => UserEventsAction::LoadFailed { error },
            ActionKind::Create => UserEventsAction::CreateFailed { error },
            ActionKind::Update => UserEventsAction::UpdateFailed { error },
            ActionKind::Delete => UserEventsAction::DeleteFailed { error },
        }
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            UserEventsAction::LoadRequested
            | UserEventsAction::LoadSucceeded { .. }
            | UserEventsAction::LoadFailed { .. } => ActionKind::Load,
            UserEventsAction::CreateRequested
            | UserEventsAction::CreateSucceeded { .. }
            | UserEventsAction::CreateFailed { .. } => ActionKind::Create,
            UserEventsAction::UpdateRequested
            | UserEventsAction::UpdateSucceeded { .. }
            | UserEventsAction::UpdateFailed { .. } => ActionKind::Update,
            UserEventsAction::DeleteRequested
            | UserEventsAction::DeleteSucceeded { .. }
            | UserEventsAction::DeleteFailed { .. } => ActionKind::Delete,
        }
    }
}
