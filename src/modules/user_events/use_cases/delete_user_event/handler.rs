// Delete handler: remove an event from the backend, then from the store.
//
// Responsibilities
// - Only a successful response removes the event locally. Anything else dispatches DeleteFailed.

use crate::modules::user_events::core::actions::{ActionKind, UserEventsAction};
use crate::modules::user_events::core::event::UserEventId;
use crate::modules::user_events::core::ports::UserEventsApi;
use crate::modules::user_events::use_cases::application_error::ApplicationError;
use crate::modules::user_events::use_cases::stores::UserEventsStore;
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

pub struct DeleteUserEventHandler<TApi>
where
    TApi: UserEventsApi + ?Sized + 'static,
{
    api: Arc<TApi>,
    store: Arc<UserEventsStore>,
}

impl<TApi> DeleteUserEventHandler<TApi>
where
    TApi: UserEventsApi + ?Sized + 'static,
{
    pub fn new(api: Arc<TApi>, store: Arc<UserEventsStore>) -> Self {
        Self { api, store }
    }

    pub async fn handle(&self, event_id: UserEventId) -> Result<(), ApplicationError> {
        let span = tracing::info_span!(
            "delete_user_event",
            request_id = %Uuid::now_v7(),
            event_id = %event_id
        );
        async {
            self.store.dispatch(UserEventsAction::DeleteRequested).await;

            match self.api.delete(event_id).await {
                Ok(()) => {
                    tracing::info!("event deleted");
                    self.store
                        .dispatch(UserEventsAction::DeleteSucceeded { event_id })
                        .await;
                    Ok(())
                }
                Err(source) => {
                    tracing::warn!(error = %source, "deleting event failed");
                    self.store
                        .dispatch(UserEventsAction::failed(ActionKind::Delete))
                        .await;
                    Err(ApplicationError::Failed {
                        kind: ActionKind::Delete,
                        source,
                    })
                }
            }
        }
        .instrument(span)
        .await
    }
}
