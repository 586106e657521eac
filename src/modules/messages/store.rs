// Port for the append-only message log.

use async_trait::async_trait;

use crate::modules::messages::core::{Message, MessageDraft};

#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Messages for the event in insertion order. Appends are the only write,
    /// so this is also chronological order.
    async fn find_by_event_id(&self, event_id: &str) -> Vec<Message>;

    /// Assigns the next id and the current timestamp, then appends.
    async fn append(&self, draft: MessageDraft) -> Message;
}
