// Create handler: turn the running recording into a persisted event.
//
// Responsibilities
// - Read the recorder start and the current time, and build the "no name" draft.
// - Dispatch CreateRequested, call the port, merge the created event or dispatch CreateFailed.
// - Leave the recorder untouched. Stopping it is the toggle handler's job.

use crate::modules::user_events::core::actions::{ActionKind, UserEventsAction};
use crate::modules::user_events::core::event::{DEFAULT_TITLE, UserEvent, UserEventDraft};
use crate::modules::user_events::core::ports::UserEventsApi;
use crate::modules::user_events::use_cases::application_error::ApplicationError;
use crate::modules::user_events::use_cases::stores::{RecorderStore, UserEventsStore};
use crate::shared::core::clock::Clock;
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

pub struct CreateUserEventHandler<TApi>
where
    TApi: UserEventsApi + ?Sized + 'static,
{
    api: Arc<TApi>,
    store: Arc<UserEventsStore>,
    recorder: Arc<RecorderStore>,
    clock: Arc<dyn Clock>,
}

impl<TApi> CreateUserEventHandler<TApi>
where
    TApi: UserEventsApi + ?Sized + 'static,
{
    pub fn new(
        api: Arc<TApi>,
        store: Arc<UserEventsStore>,
        recorder: Arc<RecorderStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            api,
            store,
            recorder,
            clock,
        }
    }

    pub async fn handle(&self) -> Result<UserEvent, ApplicationError> {
        let span = tracing::info_span!("create_user_event", request_id = %Uuid::now_v7());
        async {
            let date_start = self
                .recorder
                .select(|recorder| recorder.date_start)
                .await
                .ok_or(ApplicationError::NotRecording)?;
            let draft = UserEventDraft::new(DEFAULT_TITLE, date_start, self.clock.now())?;

            self.store.dispatch(UserEventsAction::CreateRequested).await;

            match self.api.create(draft).await {
                Ok(event) => {
                    tracing::info!(event_id = %event.id, duration_secs = event.duration().num_seconds(), "event created");
                    self.store
                        .dispatch(UserEventsAction::CreateSucceeded {
                            event: event.clone(),
                        })
                        .await;
                    Ok(event)
                }
                Err(source) => {
                    tracing::warn!(error = %source, "creating event failed");
                    self.store
                        .dispatch(UserEventsAction::failed(ActionKind::Create))
                        .await;
                    Err(ApplicationError::Failed {
                        kind: ActionKind::Create,
                        source,
                    })
                }
            }
        }
        .instrument(span)
        .await
    }
}
