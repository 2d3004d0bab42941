// Concrete stores the handlers dispatch into.

use crate::modules::user_events::core::actions::UserEventsAction;
use crate::modules::user_events::core::evolve::evolve;
use crate::modules::user_events::core::recorder::{RecorderAction, RecorderState, evolve_recorder};
use crate::modules::user_events::core::state::UserEventsState;
use crate::shared::infrastructure::state_store::StateStore;

pub type UserEventsStore = StateStore<UserEventsState, UserEventsAction>;
pub type RecorderStore = StateStore<RecorderState, RecorderAction>;

pub fn user_events_store() -> UserEventsStore {
    StateStore::new(evolve)
}

pub fn recorder_store() -> RecorderStore {
    StateStore::new(evolve_recorder)
}
