// Inbound HTTP adapter: the events REST API served by the development backend.
//
// Responsibilities
// - Map GET/POST/PUT/DELETE on /events to the UserEventsApi port held in BackendState.
// - Reject malformed bodies and inverted intervals with 422 before they reach the port.
// - Map NotFound to 404 and every other port failure to 500.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::user_events::core::event::{UserEventDraft, UserEventId};
use crate::modules::user_events::core::ports::UserEventsApiError;
use crate::shell::state::BackendState;

fn port_failure(err: UserEventsApiError) -> Response {
    match err {
        UserEventsApiError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
        other => {
            tracing::warn!(error = %other, "events port failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn valid_draft(body: Result<Json<UserEventDraft>, JsonRejection>) -> Option<UserEventDraft> {
    let Json(draft) = body.ok()?;
    draft.validate().ok()?;
    Some(draft)
}

pub async fn list(State(state): State<BackendState>) -> Response {
    match state.api.list().await {
        Ok(events) => Json(events).into_response(),
        Err(err) => port_failure(err),
    }
}

pub async fn create(
    State(state): State<BackendState>,
    body: Result<Json<UserEventDraft>, JsonRejection>,
) -> Response {
    let Some(draft) = valid_draft(body) else {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    };

    match state.api.create(draft).await {
        Ok(event) => (StatusCode::CREATED, Json(event)).into_response(),
        Err(err) => port_failure(err),
    }
}

pub async fn update(
    State(state): State<BackendState>,
    id: Result<Path<u64>, PathRejection>,
    body: Result<Json<UserEventDraft>, JsonRejection>,
) -> Response {
    // Ids are numeric; anything else cannot name a stored event.
    let Ok(Path(id)) = id else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let Some(draft) = valid_draft(body) else {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    };

    match state.api.update(UserEventId(id), draft).await {
        Ok(event) => Json(event).into_response(),
        Err(err) => port_failure(err),
    }
}

pub async fn delete(
    State(state): State<BackendState>,
    id: Result<Path<u64>, PathRejection>,
) -> Response {
    let Ok(Path(id)) = id else {
        return StatusCode::NOT_FOUND.into_response();
    };

    match state.api.delete(UserEventId(id)).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => port_failure(err),
    }
}
