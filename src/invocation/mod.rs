//! Normalization of raw tool invocation events.
//!
//! The model runtime has shipped several incompatible encodings of tool parts
//! (typed `tool-<id>` parts, `tool-call`/`tool-result` wrappers carrying a
//! `toolName`, and `tool-invocation` envelopes). [`normalize`] folds all of
//! them into one [`NormalizedInvocation`] and is total: malformed input maps to
//! empty defaults, never to an error.
//!
//! Identifier precedence:
//! 1. an explicit `toolName` / `tool_name` field with a non-empty value,
//! 2. the remainder of a `type` tag starting with `tool-`,
//! 3. otherwise [`ToolIdentity::Unknown`].

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::{Display, EnumString};

/// Tag prefix of typed tool parts (`tool-webSearch`).
pub const TOOL_TYPE_PREFIX: &str = "tool-";

const EXPLICIT_ID_FIELDS: [&str; 2] = ["toolName", "tool_name"];
const CALL_ID_FIELDS: [&str; 2] = ["toolCallId", "tool_call_id"];
const ARGS_FIELDS: [&str; 2] = ["input", "args"];
const RESULT_FIELDS: [&str; 2] = ["output", "result"];
const ERROR_TEXT_FIELD: &str = "errorText";
const ENVELOPE_FIELD: &str = "toolInvocation";

// `tool-call`, `tool-result` and `tool-invocation` name the wrapper, not a tool.
const WRAPPER_TAGS: [&str; 3] = ["call", "result", "invocation"];
const RESULT_STATES: [&str; 3] = ["output-available", "output-error", "result"];

/// Which tool an event refers to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum ToolIdentity {
    Known(String),
    Unknown,
}

impl ToolIdentity {
    pub fn as_deref(&self) -> Option<&str> {
        match self {
            Self::Known(id) => Some(id),
            Self::Unknown => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }
}

/// Whether an event is the call step or the result step of an invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    Call,
    Result,
}

/// Stable view of one tool event: which tool, what arguments, what outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedInvocation {
    pub tool: ToolIdentity,
    pub phase: Phase,
    pub call_id: Option<String>,
    pub args: Option<Value>,
    pub result: Option<Value>,
}

impl NormalizedInvocation {
    fn empty() -> Self {
        Self {
            tool: ToolIdentity::Unknown,
            phase: Phase::Call,
            call_id: None,
            args: None,
            result: None,
        }
    }

    pub fn tool_id(&self) -> Option<&str> {
        self.tool.as_deref()
    }
}

/// An opaque event object as delivered by the model runtime.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawInvocationEvent(Value);

impl RawInvocationEvent {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Parse JSON text; unparseable text becomes an empty event.
    pub fn parse(raw: &str) -> Self {
        match serde_json::from_str(raw) {
            Ok(value) => Self(value),
            Err(e) => {
                tracing::debug!(error = %e, "unparseable tool event, treating as empty");
                Self(Value::Null)
            }
        }
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn normalize(&self) -> NormalizedInvocation {
        normalize(&self.0)
    }
}

impl From<Value> for RawInvocationEvent {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Normalize one raw event. Never panics, never fails.
pub fn normalize(raw: &Value) -> NormalizedInvocation {
    let Some(outer) = raw.as_object() else {
        return NormalizedInvocation::empty();
    };
    let fields = flatten_envelope(outer);

    let tool = resolve_tool(&fields);
    let args = first_present(&fields, &ARGS_FIELDS);
    let result = first_present(&fields, &RESULT_FIELDS).or_else(|| {
        fields
            .get(ERROR_TEXT_FIELD)
            .and_then(Value::as_str)
            .map(|text| serde_json::json!({ "error": text }))
    });

    let phase = if result.is_some() || marks_result(&fields) {
        Phase::Result
    } else {
        Phase::Call
    };

    let call_id = CALL_ID_FIELDS
        .iter()
        .find_map(|key| fields.get(*key).and_then(Value::as_str))
        .map(ToString::to_string);

    NormalizedInvocation {
        tool,
        phase,
        call_id,
        args,
        result,
    }
}

/// Identifier resolution alone, in precedence order.
pub fn resolve_tool(fields: &Map<String, Value>) -> ToolIdentity {
    explicit_id(fields)
        .or_else(|| id_from_type(fields))
        .map(|id| ToolIdentity::Known(id.to_string()))
        .unwrap_or(ToolIdentity::Unknown)
}

fn explicit_id(fields: &Map<String, Value>) -> Option<&str> {
    EXPLICIT_ID_FIELDS
        .iter()
        .filter_map(|key| fields.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .find(|id| !id.is_empty())
}

fn id_from_type(fields: &Map<String, Value>) -> Option<&str> {
    let tag = fields.get("type")?.as_str()?;
    let rest = tag.strip_prefix(TOOL_TYPE_PREFIX)?.trim();
    if rest.is_empty() || WRAPPER_TAGS.contains(&rest) {
        return None;
    }
    Some(rest)
}

fn marks_result(fields: &Map<String, Value>) -> bool {
    let is_result_wrapper = fields.get("type").and_then(Value::as_str) == Some("tool-result");
    let has_result_state = fields
        .get("state")
        .and_then(Value::as_str)
        .is_some_and(|state| RESULT_STATES.contains(&state));
    is_result_wrapper || has_result_state
}

fn first_present(fields: &Map<String, Value>, keys: &[&str]) -> Option<Value> {
    keys.iter()
        .find_map(|key| fields.get(*key).filter(|v| !v.is_null()))
        .cloned()
}

/// Lift the fields of a nested `toolInvocation` envelope; outer values win.
fn flatten_envelope(outer: &Map<String, Value>) -> Cow<'_, Map<String, Value>> {
    let Some(inner) = outer.get(ENVELOPE_FIELD).and_then(Value::as_object) else {
        return Cow::Borrowed(outer);
    };

    let mut merged = inner.clone();
    for (key, value) in outer {
        if key != ENVELOPE_FIELD && !value.is_null() {
            merged.insert(key.clone(), value.clone());
        }
    }
    Cow::Owned(merged)
}
