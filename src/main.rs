use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use event_chat::modules::events::in_memory::InMemoryEventStore;
use event_chat::modules::messages::in_memory::InMemoryMessageStore;
use event_chat::modules::users::in_memory::InMemoryUserStore;
use event_chat::shell::state::AppState;
use event_chat::shell::{http, seed};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let users = Arc::new(InMemoryUserStore::with_records(seed::demo_users()));
    let events = Arc::new(InMemoryEventStore::with_records(seed::demo_events()));
    let messages = Arc::new(InMemoryMessageStore::with_records(seed::demo_messages()));
    let state = AppState::new(users, events, messages);

    let app = http::router(state);

    let addr =
        std::env::var("EVENT_CHAT_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
