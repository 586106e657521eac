use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::modules::events::core::Event;
use crate::modules::messages::core::MessageDraft;
use crate::shared::core::envelope::{ApiError, ApiResult};
use crate::shared::core::identity::CurrentUser;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct PostMessageBody {
    pub text: String,
}

// Attendance is checked against the freshly loaded event on every request;
// there is no cached permission state.
async fn load_event_for_attendee(
    state: &AppState,
    event_id: &str,
    user_id: &str,
    refusal: &str,
) -> ApiResult<Event> {
    let event = state
        .events
        .find_by_id(event_id)
        .await
        .ok_or_else(|| ApiError::NotFound("Event not found".to_string()))?;
    if !event.is_attendee(user_id) {
        return Err(ApiError::Forbidden(refusal.to_string()));
    }
    Ok(event)
}

/// GET /events/{id}/messages
pub async fn list(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(event_id): Path<String>,
) -> ApiResult<Response> {
    let event = load_event_for_attendee(
        &state,
        &event_id,
        &user.id,
        "You must be an attendee to view messages",
    )
    .await?;
    let messages = state.messages.find_by_event_id(&event.id).await;
    Ok(Json(json!({ "messages": messages })).into_response())
}

/// POST /events/{id}/messages
pub async fn post(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(event_id): Path<String>,
    body: Result<Json<PostMessageBody>, JsonRejection>,
) -> ApiResult<Response> {
    let event = load_event_for_attendee(
        &state,
        &event_id,
        &user.id,
        "You must be an attendee to send messages",
    )
    .await?;
    let Json(body) = body.map_err(|_| ApiError::BadRequest("Invalid request body".to_string()))?;
    let draft = MessageDraft::compose(event.id, user.id, &body.text)
        .map_err(|e| ApiError::Validation(e.to_string()))?;
    let message = state.messages.append(draft).await;
    Ok((StatusCode::CREATED, Json(json!({ "message": message }))).into_response())
}

#[cfg(test)]
mod messages_http_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::modules::events::core::Event;
    use crate::modules::events::in_memory::InMemoryEventStore;
    use crate::modules::messages::core::Message;
    use crate::modules::messages::in_memory::InMemoryMessageStore;
    use crate::modules::users::core::User;
    use crate::modules::users::in_memory::InMemoryUserStore;
    use crate::shell::state::AppState;

    use super::{list, post};

    fn make_test_state() -> AppState {
        let users = Arc::new(InMemoryUserStore::with_records(vec![
            User {
                id: "1".to_string(),
                name: "Test User".to_string(),
                email: "test@example.com".to_string(),
                bio: None,
            },
            User {
                id: "2".to_string(),
                name: "Second User".to_string(),
                email: "second@example.com".to_string(),
                bio: None,
            },
        ]));
        let events = Arc::new(InMemoryEventStore::with_records(vec![Event {
            id: "1".to_string(),
            title: "Demo Event".to_string(),
            description: "This is a demo event for testing the API.".to_string(),
            datetime: "2023-12-31T19:00:00Z".to_string(),
            location: "Virtual".to_string(),
            organizer_id: "1".to_string(),
            attendees: vec!["1".to_string()],
        }]));
        let messages = Arc::new(InMemoryMessageStore::with_records(vec![Message {
            id: "1".to_string(),
            event_id: "1".to_string(),
            sender_id: "1".to_string(),
            text: "Welcome to the demo event chat!".to_string(),
            timestamp: "2023-12-30T18:00:00Z".to_string(),
        }]));
        AppState::new(users, events, messages)
    }

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/events/{id}/messages", get(list).post(post))
            .with_state(state)
    }

    #[tokio::test]
    async fn it_should_list_messages_for_an_attendee() {
        let response = app(make_test_state())
            .oneshot(
                Request::get("/events/1/messages")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["messages"].as_array().unwrap().len(), 1);
        assert_eq!(json["messages"][0]["text"], "Welcome to the demo event chat!");
    }

    #[tokio::test]
    async fn it_should_return_403_for_a_non_attendee() {
        let state = make_test_state().with_identity("2");
        let response = app(state)
            .oneshot(
                Request::get("/events/1/messages")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"]["code"], "FORBIDDEN");
        assert_eq!(
            json["error"]["message"],
            "You must be an attendee to view messages"
        );
    }

    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_event() {
        let response = app(make_test_state())
            .oneshot(
                Request::get("/events/404/messages")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn it_should_append_a_message_from_an_attendee() {
        let response = app(make_test_state())
            .oneshot(
                Request::post("/events/1/messages")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"text":"  hi  "}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["message"]["text"], "hi");
        assert_eq!(json["message"]["senderId"], "1");
        assert_eq!(json["message"]["eventId"], "1");
        assert_eq!(json["message"]["id"], "2");
    }

    #[tokio::test]
    async fn it_should_refuse_posts_from_a_non_attendee() {
        let state = make_test_state().with_identity("2");
        let response = app(state)
            .oneshot(
                Request::post("/events/1/messages")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"text":"hi"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            json["error"]["message"],
            "You must be an attendee to send messages"
        );
    }

    #[tokio::test]
    async fn it_should_reject_blank_message_text() {
        let response = app(make_test_state())
            .oneshot(
                Request::post("/events/1/messages")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"text":"   "}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(json["error"]["message"], "Message text is required");
    }

    #[tokio::test]
    async fn it_should_reject_message_text_over_the_limit() {
        let text = "a".repeat(501);
        let body = serde_json::json!({ "text": text }).to_string();

        let response = app(make_test_state())
            .oneshot(
                Request::post("/events/1/messages")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }
}
