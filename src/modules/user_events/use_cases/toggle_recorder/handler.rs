// Toggle handler: the record button.
//
// Responsibilities
// - Idle: start the recorder at the current time.
// - Recording: create the event for the recorded interval, then stop the recorder whatever the
//   outcome of the creation. A failed creation is returned after the recorder is stopped.

use crate::modules::user_events::core::event::UserEvent;
use crate::modules::user_events::core::ports::UserEventsApi;
use crate::modules::user_events::core::recorder::RecorderAction;
use crate::modules::user_events::use_cases::application_error::ApplicationError;
use crate::modules::user_events::use_cases::create_user_event::handler::CreateUserEventHandler;
use crate::modules::user_events::use_cases::stores::RecorderStore;
use crate::shared::core::clock::Clock;
use chrono::{DateTime, Utc};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecorderTransition {
    Started { at: DateTime<Utc> },
    Stopped { event: UserEvent },
}

pub struct ToggleRecorderHandler<TApi>
where
    TApi: UserEventsApi + ?Sized + 'static,
{
    recorder: Arc<RecorderStore>,
    create: Arc<CreateUserEventHandler<TApi>>,
    clock: Arc<dyn Clock>,
}

impl<TApi> ToggleRecorderHandler<TApi>
where
    TApi: UserEventsApi + ?Sized + 'static,
{
    pub fn new(
        recorder: Arc<RecorderStore>,
        create: Arc<CreateUserEventHandler<TApi>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            recorder,
            create,
            clock,
        }
    }

    pub async fn handle(&self) -> Result<RecorderTransition, ApplicationError> {
        if !self.recorder.select(|recorder| recorder.is_recording()).await {
            let at = self.clock.now();
            self.recorder.dispatch(RecorderAction::Start { at }).await;
            tracing::info!(%at, "recorder started");
            return Ok(RecorderTransition::Started { at });
        }

        let created = self.create.handle().await;
        self.recorder.dispatch(RecorderAction::Stop).await;
        tracing::info!(created = created.is_ok(), "recorder stopped");
        created.map(|event| RecorderTransition::Stopped { event })
    }
}
