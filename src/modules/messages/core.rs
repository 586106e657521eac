use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound on message text, counted in characters after trimming.
pub const MAX_TEXT_CHARS: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub event_id: String,
    pub sender_id: String,
    pub text: String,
    pub timestamp: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComposeError {
    #[error("Message text is required")]
    EmptyText,
    #[error("Message text is too long (max {MAX_TEXT_CHARS} characters)")]
    TextTooLong,
}

/// A validated message waiting for the store to assign its id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDraft {
    pub event_id: String,
    pub sender_id: String,
    pub text: String,
}

impl MessageDraft {
    /// Trims the text and enforces the 1..=500 character bound.
    pub fn compose(
        event_id: String,
        sender_id: String,
        text: &str,
    ) -> Result<Self, ComposeError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ComposeError::EmptyText);
        }
        if text.chars().count() > MAX_TEXT_CHARS {
            return Err(ComposeError::TextTooLong);
        }
        Ok(Self {
            event_id,
            sender_id,
            text: text.to_string(),
        })
    }
}
