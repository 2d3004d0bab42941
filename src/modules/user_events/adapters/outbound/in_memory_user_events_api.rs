// In memory implementation of the UserEventsApi port.
//
// Purpose
// - Support handler tests and back the development backend without an external server.
//
// Responsibilities
// - Keep events in insertion order and assign incrementing ids, like a JSON REST server does.
// - Fail every call while offline.

use crate::modules::user_events::core::event::{UserEvent, UserEventDraft, UserEventId};
use crate::modules::user_events::core::ports::{UserEventsApi, UserEventsApiError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

struct Inner {
    events: Vec<UserEvent>,
    // None once u64::MAX has been handed out.
    next_id: Option<u64>,
}

pub struct InMemoryUserEventsApi {
    inner: RwLock<Inner>,
    is_offline: AtomicBool,
}

impl Default for InMemoryUserEventsApi {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryUserEventsApi {
    pub fn new() -> Self {
        Self::with_events(Vec::new())
    }

    /// Seed with existing events. New ids continue after the highest seeded id.
    pub fn with_events(events: Vec<UserEvent>) -> Self {
        let next_id = events
            .iter()
            .map(|e| e.id.0)
            .max()
            .unwrap_or(0)
            .checked_add(1);
        Self {
            inner: RwLock::new(Inner { events, next_id }),
            is_offline: AtomicBool::new(false),
        }
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), UserEventsApiError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(UserEventsApiError::Backend("Events backend offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl UserEventsApi for InMemoryUserEventsApi {
    async fn list(&self) -> Result<Vec<UserEvent>, UserEventsApiError> {
        self.ensure_online()?;
        Ok(self.inner.read().await.events.clone())
    }

    async fn create(&self, draft: UserEventDraft) -> Result<UserEvent, UserEventsApiError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        let id = guard
            .next_id
            .ok_or_else(|| UserEventsApiError::Backend("event ids exhausted".into()))?;
        let event = draft.into_event(UserEventId(id));
        guard.next_id = id.checked_add(1);
        guard.events.push(event.clone());
        Ok(event)
    }

    async fn update(
        &self,
        id: UserEventId,
        draft: UserEventDraft,
    ) -> Result<UserEvent, UserEventsApiError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        let slot = guard
            .events
            .iter_mut()
            .find(|event| event.id == id)
            .ok_or(UserEventsApiError::NotFound(id))?;
        *slot = draft.into_event(id);
        Ok(slot.clone())
    }

    async fn delete(&self, id: UserEventId) -> Result<(), UserEventsApiError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        let before = guard.events.len();
        guard.events.retain(|event| event.id != id);
        if guard.events.len() == before {
            return Err(UserEventsApiError::NotFound(id));
        }
        Ok(())
    }
}
