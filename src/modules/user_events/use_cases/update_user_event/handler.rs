// Update handler: rename an event.
//
// Responsibilities
// - Send the event's full draft with the new title.
// - Merge the backend's response into the store, or dispatch the generic UpdateFailed.

use crate::modules::user_events::core::actions::{ActionKind, UserEventsAction};
use crate::modules::user_events::core::event::UserEvent;
use crate::modules::user_events::core::ports::UserEventsApi;
use crate::modules::user_events::use_cases::application_error::ApplicationError;
use crate::modules::user_events::use_cases::stores::UserEventsStore;
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

pub struct UpdateUserEventHandler<TApi>
where
    TApi: UserEventsApi + ?Sized + 'static,
{
    api: Arc<TApi>,
    store: Arc<UserEventsStore>,
}

impl<TApi> UpdateUserEventHandler<TApi>
where
    TApi: UserEventsApi + ?Sized + 'static,
{
    pub fn new(api: Arc<TApi>, store: Arc<UserEventsStore>) -> Self {
        Self { api, store }
    }

    pub async fn handle(
        &self,
        event: &UserEvent,
        title: impl Into<String>,
    ) -> Result<UserEvent, ApplicationError> {
        let span = tracing::info_span!(
            "update_user_event",
            request_id = %Uuid::now_v7(),
            event_id = %event.id
        );
        let draft = event.with_title(title);
        async {
            self.store.dispatch(UserEventsAction::UpdateRequested).await;

            match self.api.update(event.id, draft).await {
                Ok(updated) => {
                    tracing::info!(title = %updated.title, "event updated");
                    self.store
                        .dispatch(UserEventsAction::UpdateSucceeded {
                            event: updated.clone(),
                        })
                        .await;
                    Ok(updated)
                }
                Err(source) => {
                    tracing::warn!(error = %source, "updating event failed");
                    self.store
                        .dispatch(UserEventsAction::failed(ActionKind::Update))
                        .await;
                    Err(ApplicationError::Failed {
                        kind: ActionKind::Update,
                        source,
                    })
                }
            }
        }
        .instrument(span)
        .await
    }
}
