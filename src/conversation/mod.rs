//! Conversation surface: ordered messages and their presentation records.
//!
//! Thin consumer of the normalizer and renderer. It walks message parts in
//! order, hands tool-shaped parts to [`Renderer`], and keys each record by
//! message id and part position.

use serde::Serialize;
use serde_json::Value;

use crate::invocation::{normalize, Phase, TOOL_TYPE_PREFIX};
use crate::render::{CallPresentation, Renderer, ResultPresentation};
use crate::types::message::{ChatMessage, Role};

/// Position of a part within the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PartKey {
    pub message_id: String,
    pub part_index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "body", rename_all = "snake_case")]
pub enum PartBody {
    Text(String),
    Call(CallPresentation),
    Result(ResultPresentation),
}

/// One rendered message part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartPresentation {
    pub key: PartKey,
    pub role: Role,
    pub body: PartBody,
}

/// Request lifecycle, used to gate input while a turn is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationStatus {
    #[default]
    Ready,
    Submitted,
    Streaming,
}

/// Whether a raw part should be routed through the tool renderer.
pub fn is_tool_part(part: &Value) -> bool {
    match part.get("type").and_then(Value::as_str) {
        Some(tag) if tag.starts_with(TOOL_TYPE_PREFIX) || tag == "dynamic-tool" => true,
        _ => part.get("toolName").is_some() || part.get("toolInvocation").is_some(),
    }
}

/// Render every displayable part of one message, in part order.
pub fn present_message(message: &ChatMessage, renderer: &Renderer<'_>) -> Vec<PartPresentation> {
    message
        .parts
        .iter()
        .enumerate()
        .filter_map(|(part_index, part)| {
            let body = if part.get("type").and_then(Value::as_str) == Some("text") {
                PartBody::Text(
                    part.get("text")
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_string(),
                )
            } else if is_tool_part(part) {
                let invocation = normalize(part);
                match invocation.phase {
                    Phase::Call => PartBody::Call(renderer.render_call(&invocation)),
                    Phase::Result => PartBody::Result(renderer.render_result(&invocation)),
                }
            } else {
                return None;
            };

            Some(PartPresentation {
                key: PartKey {
                    message_id: message.id.clone(),
                    part_index,
                },
                role: message.role,
                body,
            })
        })
        .collect()
}

/// Ordered chat transcript.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    status: ConversationStatus,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn status(&self) -> ConversationStatus {
        self.status
    }

    /// Append a user message. Blank input, or input while a submission is
    /// still awaiting its first update, is ignored.
    pub fn submit(&mut self, text: &str) -> Option<&ChatMessage> {
        if text.trim().is_empty() || self.status == ConversationStatus::Submitted {
            return None;
        }
        self.messages.push(ChatMessage::user(text));
        self.status = ConversationStatus::Submitted;
        self.messages.last()
    }

    /// Insert or replace a message by id. Streaming updates resend the whole
    /// message, so a known id is replaced in place.
    pub fn apply_update(&mut self, message: ChatMessage) {
        if message.role == Role::Assistant {
            self.status = ConversationStatus::Streaming;
        }
        match self.messages.iter_mut().find(|m| m.id == message.id) {
            Some(existing) => *existing = message,
            None => self.messages.push(message),
        }
    }

    /// Mark the current turn as complete.
    pub fn finish(&mut self) {
        self.status = ConversationStatus::Ready;
    }

    /// Start a new chat.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.status = ConversationStatus::Ready;
    }

    /// Presentation records for the whole transcript.
    pub fn presentations(&self, renderer: &Renderer<'_>) -> Vec<PartPresentation> {
        self.messages
            .iter()
            .flat_map(|message| present_message(message, renderer))
            .collect()
    }
}
