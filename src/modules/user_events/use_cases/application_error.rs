use crate::modules::user_events::core::actions::ActionKind;
use crate::modules::user_events::core::event::{DecideError, UserEventId};
use crate::modules::user_events::core::ports::UserEventsApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Displays only the generic message of the action kind. The cause stays in `source`.
    #[error("{}", .kind.failure_message())]
    Failed {
        kind: ActionKind,
        #[source]
        source: UserEventsApiError,
    },

    #[error("the recorder is not running")]
    NotRecording,

    #[error("event {0} is not loaded")]
    UnknownEvent(UserEventId),

    #[error("domain rejected: {0}")]
    Domain(#[from] DecideError),
}
