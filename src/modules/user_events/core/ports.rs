// Ports define what the core needs from the outside world, without implementing it.
//
// Purpose
// - Describe the REST events collaborator as a trait: list, create, update and delete.
//
// Boundaries
// - No concrete input or output here. Adapters implement this trait (HTTP, in memory).
//
// Testing guidance
// - Use the in memory implementation for handler tests and the development backend.

use crate::modules::user_events::core::event::{UserEvent, UserEventDraft, UserEventId};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserEventsApiError {
    #[error("event {0} not found")]
    NotFound(UserEventId),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait UserEventsApi: Send + Sync {
    async fn list(&self) -> Result<Vec<UserEvent>, UserEventsApiError>;
    async fn create(&self, draft: UserEventDraft) -> Result<UserEvent, UserEventsApiError>;
    async fn update(
        &self,
        id: UserEventId,
        draft: UserEventDraft,
    ) -> Result<UserEvent, UserEventsApiError>;
    async fn delete(&self, id: UserEventId) -> Result<(), UserEventsApiError>;
}
