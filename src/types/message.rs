//! Chat message types as delivered by the model runtime.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A message in a conversation. Parts are kept as raw JSON because tool
/// parts have no stable shape; see [`crate::invocation`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    #[serde(default)]
    pub parts: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl ChatMessage {
    /// Create a user message with a fresh id and a single text part.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role: Role::User,
            parts: vec![text_part(text)],
            created_at: Some(Utc::now()),
        }
    }

    /// Create an assistant message from raw parts.
    pub fn assistant(id: impl Into<String>, parts: Vec<Value>) -> Self {
        Self {
            id: id.into(),
            role: Role::Assistant,
            parts,
            created_at: Some(Utc::now()),
        }
    }

    /// Concatenate the text parts.
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .filter(|part| part.get("type").and_then(Value::as_str) == Some("text"))
            .filter_map(|part| part.get("text").and_then(Value::as_str))
            .collect::<Vec<_>>()
            .join("")
    }
}

/// Conversation role.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// Build a `{"type": "text"}` part.
pub fn text_part(text: impl Into<String>) -> Value {
    serde_json::json!({ "type": "text", "text": text.into() })
}
