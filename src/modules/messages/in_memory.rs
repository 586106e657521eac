// In memory implementation of the MessageStore port.
//
// Responsibilities
// - Assign ids from a monotonic counter and timestamps from the process
//   clock, both inside the write lock so appends keep their order.

use chrono::{SecondsFormat, Utc};
use tokio::sync::RwLock;

use crate::modules::messages::core::{Message, MessageDraft};
use crate::modules::messages::store::MessageStore;

pub struct InMemoryMessageStore {
    inner: RwLock<MessageRecords>,
}

struct MessageRecords {
    messages: Vec<Message>,
    next_id: u64,
}

impl InMemoryMessageStore {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(messages: Vec<Message>) -> Self {
        let next_id = messages.len() as u64 + 1;
        Self {
            inner: RwLock::new(MessageRecords { messages, next_id }),
        }
    }
}

impl Default for InMemoryMessageStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl MessageStore for InMemoryMessageStore {
    async fn find_by_event_id(&self, event_id: &str) -> Vec<Message> {
        let guard = self.inner.read().await;
        guard
            .messages
            .iter()
            .filter(|message| message.event_id == event_id)
            .cloned()
            .collect()
    }

    async fn append(&self, draft: MessageDraft) -> Message {
        let mut guard = self.inner.write().await;
        let message = Message {
            id: guard.next_id.to_string(),
            event_id: draft.event_id,
            sender_id: draft.sender_id,
            text: draft.text,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        guard.next_id += 1;
        guard.messages.push(message.clone());
        message
    }
}
