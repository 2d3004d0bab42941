// Load handler: fetch every event from the backend and replace the store with them.
//
// Responsibilities
// - Dispatch LoadRequested, call the port, dispatch LoadSucceeded or the generic LoadFailed.
// - Log the cause of a failure; callers only see the generic message.

use crate::modules::user_events::core::actions::{ActionKind, UserEventsAction};
use crate::modules::user_events::core::event::UserEvent;
use crate::modules::user_events::core::ports::UserEventsApi;
use crate::modules::user_events::use_cases::application_error::ApplicationError;
use crate::modules::user_events::use_cases::stores::UserEventsStore;
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

pub struct LoadUserEventsHandler<TApi>
where
    TApi: UserEventsApi + ?Sized + 'static,
{
    api: Arc<TApi>,
    store: Arc<UserEventsStore>,
}

impl<TApi> LoadUserEventsHandler<TApi>
where
    TApi: UserEventsApi + ?Sized + 'static,
{
    pub fn new(api: Arc<TApi>, store: Arc<UserEventsStore>) -> Self {
        Self { api, store }
    }

    pub async fn handle(&self) -> Result<Vec<UserEvent>, ApplicationError> {
        let span = tracing::info_span!("load_user_events", request_id = %Uuid::now_v7());
        async {
            self.store.dispatch(UserEventsAction::LoadRequested).await;

            match self.api.list().await {
                Ok(events) => {
                    for event in events.iter().filter(|e| !e.has_valid_interval()) {
                        tracing::warn!(event_id = %event.id, "event ends before it starts");
                    }
                    tracing::info!(count = events.len(), "events loaded");
                    self.store
                        .dispatch(UserEventsAction::LoadSucceeded {
                            events: events.clone(),
                        })
                        .await;
                    Ok(events)
                }
                Err(source) => {
                    tracing::warn!(error = %source, "loading events failed");
                    self.store
                        .dispatch(UserEventsAction::failed(ActionKind::Load))
                        .await;
                    Err(ApplicationError::Failed {
                        kind: ActionKind::Load,
                        source,
                    })
                }
            }
        }
        .instrument(span)
        .await
    }
}
