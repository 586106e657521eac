use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::modules::events::core::EventDraft;
use crate::modules::events::store::{LeaveOutcome, RsvpError};
use crate::shared::core::envelope::{ApiError, ApiResult};
use crate::shared::core::identity::CurrentUser;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListEventsParams {
    /// Restrict the listing to events this user organizes or attends.
    pub participant: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateEventBody {
    pub title: String,
    pub description: String,
    pub datetime: String,
    pub location: String,
}

fn rsvp_error(err: RsvpError) -> ApiError {
    let message = err.to_string();
    match err {
        RsvpError::EventNotFound => ApiError::NotFound(message),
        RsvpError::OrganizerCannotLeave => ApiError::Forbidden(message),
    }
}

/// GET /events
pub async fn list(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Query(params): Query<ListEventsParams>,
) -> ApiResult<Response> {
    let events = match params.participant {
        Some(user_id) => state.events.find_by_participant(&user_id).await,
        None => state.events.list().await,
    };
    Ok(Json(json!({ "events": events })).into_response())
}

/// POST /events
pub async fn create(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    body: Result<Json<CreateEventBody>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(body) = body.map_err(|_| ApiError::BadRequest("Invalid request body".to_string()))?;
    let draft = EventDraft::compose(
        body.title,
        body.description,
        body.datetime,
        body.location,
        user.id,
    )
    .map_err(|e| ApiError::Validation(e.to_string()))?;
    let event = state.events.create(draft).await;
    Ok((StatusCode::CREATED, Json(json!({ "event": event }))).into_response())
}

/// GET /events/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let event = state
        .events
        .find_by_id(&id)
        .await
        .ok_or_else(|| ApiError::NotFound("Event not found".to_string()))?;
    Ok(Json(json!({ "event": event })).into_response())
}

/// POST /events/{id}/rsvp
pub async fn join(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let event = state.events.join(&id, &user.id).await.map_err(rsvp_error)?;
    Ok(Json(json!({ "event": event })).into_response())
}

/// DELETE /events/{id}/rsvp
pub async fn leave(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let outcome = state
        .events
        .leave(&id, &user.id)
        .await
        .map_err(rsvp_error)?;
    let body = match outcome {
        LeaveOutcome::Left(event) => json!({
            "message": "You have left the event",
            "event": event,
        }),
        LeaveOutcome::NotAttending(event) => json!({
            "message": "You are not attending this event",
            "event": event,
        }),
    };
    Ok(Json(body).into_response())
}
