use crate::modules::user_events::core::event::{UserEvent, UserEventId};
use crate::modules::user_events::core::ports::UserEventsApi;
use crate::modules::user_events::use_cases::application_error::ApplicationError;
use crate::modules::user_events::use_cases::create_user_event::handler::CreateUserEventHandler;
use crate::modules::user_events::use_cases::delete_user_event::handler::DeleteUserEventHandler;
use crate::modules::user_events::use_cases::list_day_groups::handler::ListDayGroupsQuery;
use crate::modules::user_events::use_cases::load_user_events::handler::LoadUserEventsHandler;
use crate::modules::user_events::use_cases::stores::{
    RecorderStore, UserEventsStore, recorder_store, user_events_store,
};
use crate::modules::user_events::use_cases::toggle_recorder::handler::ToggleRecorderHandler;
use crate::modules::user_events::use_cases::update_user_event::handler::UpdateUserEventHandler;
use crate::shared::core::clock::Clock;
use std::sync::Arc;

/// Client side wiring: one store pair and every handler over the same API.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<UserEventsStore>,
    pub recorder: Arc<RecorderStore>,
    pub clock: Arc<dyn Clock>,
    pub load_handler: Arc<LoadUserEventsHandler<dyn UserEventsApi>>,
    pub create_handler: Arc<CreateUserEventHandler<dyn UserEventsApi>>,
    pub update_handler: Arc<UpdateUserEventHandler<dyn UserEventsApi>>,
    pub delete_handler: Arc<DeleteUserEventHandler<dyn UserEventsApi>>,
    pub toggle_handler: Arc<ToggleRecorderHandler<dyn UserEventsApi>>,
    pub day_groups: Arc<ListDayGroupsQuery>,
}

impl AppState {
    pub fn new(api: Arc<dyn UserEventsApi>, clock: Arc<dyn Clock>) -> Self {
        let store = Arc::new(user_events_store());
        let recorder = Arc::new(recorder_store());
        let create_handler = Arc::new(CreateUserEventHandler::new(
            api.clone(),
            store.clone(),
            recorder.clone(),
            clock.clone(),
        ));
        Self {
            load_handler: Arc::new(LoadUserEventsHandler::new(api.clone(), store.clone())),
            update_handler: Arc::new(UpdateUserEventHandler::new(api.clone(), store.clone())),
            delete_handler: Arc::new(DeleteUserEventHandler::new(api, store.clone())),
            toggle_handler: Arc::new(ToggleRecorderHandler::new(
                recorder.clone(),
                create_handler.clone(),
                clock.clone(),
            )),
            day_groups: Arc::new(ListDayGroupsQuery::new(store.clone())),
            create_handler,
            store,
            recorder,
            clock,
        }
    }

    /// Renames an event that is present in the store.
    pub async fn rename(
        &self,
        id: UserEventId,
        title: &str,
    ) -> Result<UserEvent, ApplicationError> {
        let event = self
            .store
            .select(|state| state.get(id).cloned())
            .await
            .ok_or(ApplicationError::UnknownEvent(id))?;
        self.update_handler.handle(&event, title).await
    }
}

/// State of the development backend router.
#[derive(Clone)]
pub struct BackendState {
    pub api: Arc<dyn UserEventsApi>,
}
