// HTTP implementation of the UserEventsApi port.
//
// Purpose
// - Talk JSON to the REST events collaborator: GET/POST /events, PUT/DELETE /events/{id}.
//
// Responsibilities
// - Map transport failures, unexpected statuses and undecodable bodies to UserEventsApiError.
// - A 404 on an id route becomes NotFound.

use crate::modules::user_events::core::event::{UserEvent, UserEventDraft, UserEventId};
use crate::modules::user_events::core::ports::{UserEventsApi, UserEventsApiError};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub struct HttpUserEventsApi {
    client: Client,
    base_url: String,
}

impl HttpUserEventsApi {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, UserEventsApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| UserEventsApiError::Transport(err.to_string()))?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn events_url(&self) -> String {
        format!("{}/events", self.base_url)
    }

    fn event_url(&self, id: UserEventId) -> String {
        format!("{}/events/{id}", self.base_url)
    }
}

fn transport(err: reqwest::Error) -> UserEventsApiError {
    UserEventsApiError::Transport(err.to_string())
}

fn check_status(response: Response, id: Option<UserEventId>) -> Result<Response, UserEventsApiError> {
    let status = response.status();
    match (status, id) {
        (s, _) if s.is_success() => Ok(response),
        (StatusCode::NOT_FOUND, Some(id)) => Err(UserEventsApiError::NotFound(id)),
        (s, _) => Err(UserEventsApiError::Status(s.as_u16())),
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, UserEventsApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| UserEventsApiError::Decode(err.to_string()))
}

#[async_trait]
impl UserEventsApi for HttpUserEventsApi {
    async fn list(&self) -> Result<Vec<UserEvent>, UserEventsApiError> {
        let response = self
            .client
            .get(self.events_url())
            .send()
            .await
            .map_err(transport)?;
        decode(check_status(response, None)?).await
    }

    async fn create(&self, draft: UserEventDraft) -> Result<UserEvent, UserEventsApiError> {
        let response = self
            .client
            .post(self.events_url())
            .json(&draft)
            .send()
            .await
            .map_err(transport)?;
        decode(check_status(response, None)?).await
    }

    async fn update(
        &self,
        id: UserEventId,
        draft: UserEventDraft,
    ) -> Result<UserEvent, UserEventsApiError> {
        let response = self
            .client
            .put(self.event_url(id))
            .json(&draft)
            .send()
            .await
            .map_err(transport)?;
        decode(check_status(response, Some(id))?).await
    }

    async fn delete(&self, id: UserEventId) -> Result<(), UserEventsApiError> {
        let response = self
            .client
            .delete(self.event_url(id))
            .send()
            .await
            .map_err(transport)?;
        check_status(response, Some(id))?;
        Ok(())
    }
}
