// Router assembly. Maps each resource path to its module handlers and hangs
// the cross-cutting layers (request tracing, permissive CORS) off the top.

use axum::{
    Json, Router,
    http::{Method, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::{SecondsFormat, Utc};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::modules::events::http as events_http;
use crate::modules::messages::http as messages_http;
use crate::modules::users::http as users_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    // The CORS layer also answers OPTIONS preflight for every route.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/health", get(health))
        .route("/events", get(events_http::list).post(events_http::create))
        .route("/events/{id}", get(events_http::get_by_id))
        .route(
            "/events/{id}/rsvp",
            post(events_http::join).delete(events_http::leave),
        )
        .route(
            "/events/{id}/messages",
            get(messages_http::list).post(messages_http::post),
        )
        .route(
            "/profile",
            get(users_http::get_profile).put(users_http::update_profile),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - liveness probe, no identity required.
async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "message": "API is up and running",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}
