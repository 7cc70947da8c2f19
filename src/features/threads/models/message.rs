use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    Assistant,
}

impl std::fmt::Display for MessageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
        }
    }
}

/// Message in a thread; append-only on the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub thread_id: String,
    pub role: MessageRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Prefix of locally synthesized message ids
pub const TEMP_ID_PREFIX: &str = "temp-";

impl Message {
    /// Unsaved user message shown before the server confirms it
    pub fn optimistic(thread_id: &str, content: &str) -> Self {
        Self {
            id: format!("{}{}", TEMP_ID_PREFIX, uuid::Uuid::now_v7()),
            thread_id: thread_id.to_string(),
            role: MessageRole::User,
            content: content.to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn is_optimistic(&self) -> bool {
        self.id.starts_with(TEMP_ID_PREFIX)
    }
}

/// Order messages by creation time; stable for equal timestamps
pub fn sort_by_creation(messages: &mut [Message]) {
    messages.sort_by_key(|m| m.created_at);
}
