//! Outcome of one image generation invocation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// User-facing message for every image generation failure.
pub const IMAGE_FAILURE_MESSAGE: &str = "Failed to generate image. Please try again later.";
/// Diagnostic detail when the provider answered without any image.
pub const NO_IMAGE_DETAILS: &str = "No image data received from the image provider.";

const EMPTY_RESULT_DETAILS: &str = "Result carried neither an image URL nor an error.";

/// Success-or-failure result of the image generation tool.
///
/// Serialized untagged, so the wire shape is either
/// `{"imageUrl", "revisedPrompt"?}` or `{"error", "details"?}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageResult {
    #[serde(rename_all = "camelCase")]
    Failure {
        error: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Success {
        image_url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        revised_prompt: Option<String>,
    },
}

impl ImageResult {
    pub fn success(image_url: impl Into<String>, revised_prompt: Option<String>) -> Self {
        Self::Success {
            image_url: image_url.into(),
            revised_prompt,
        }
    }

    pub fn failure(error: impl Into<String>, details: Option<String>) -> Self {
        Self::Failure {
            error: error.into(),
            details,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Decode an arbitrary result payload.
    ///
    /// A truthy `error` field wins; otherwise a non-empty `imageUrl` string is a
    /// success. Anything else is coerced to a failure rather than a success
    /// with a missing URL.
    pub fn from_payload(payload: &Value) -> Self {
        let Some(obj) = payload.as_object() else {
            return Self::failure(IMAGE_FAILURE_MESSAGE, Some(EMPTY_RESULT_DETAILS.to_string()));
        };

        if let Some(error) = error_message(payload) {
            let details = obj
                .get("details")
                .and_then(Value::as_str)
                .map(ToString::to_string);
            return Self::failure(error, details);
        }

        match obj.get("imageUrl").and_then(Value::as_str) {
            Some(url) if !url.trim().is_empty() => Self::success(
                url,
                obj.get("revisedPrompt")
                    .and_then(Value::as_str)
                    .map(ToString::to_string),
            ),
            _ => Self::failure(IMAGE_FAILURE_MESSAGE, Some(EMPTY_RESULT_DETAILS.to_string())),
        }
    }
}

/// Text of a result's `error` field, when it signals a failure.
///
/// `null`, `false`, `0` and blank strings do not count as errors; strings are
/// returned verbatim and other values as JSON text.
pub(crate) fn error_message(payload: &Value) -> Option<String> {
    match payload.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(text_of(other)),
    }
}

/// Display text of a JSON value: strings verbatim, everything else as JSON.
pub(crate) fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
