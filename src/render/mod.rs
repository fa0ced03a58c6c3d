//! Presentation records for tool calls and tool results.
//!
//! Rendering is a pure function of a [`NormalizedInvocation`] and the contract
//! registry. It never fails: unknown tools fall back to the default contract,
//! and malformed payloads fall back to placeholder summaries.

use serde::Serialize;
use serde_json::Value;

use crate::config::{OnBrandConfig, DEFAULT_CAPTION_LIMIT};
use crate::contracts::{ContractRegistry, IconRef, ToolContract, GENERATE_IMAGE};
use crate::invocation::{NormalizedInvocation, Phase};
use crate::types::image::{error_message, text_of, ImageResult};

/// Summary shown when an object payload has no recognizable field.
pub const ARGUMENTS_PLACEHOLDER: &str = "Arguments not available";

const ELLIPSIS: char = '…';

/// How a pending tool call is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallPresentation {
    pub tool_id: Option<String>,
    pub label: String,
    pub icon: IconRef,
    pub arg_summary: String,
    /// Only tools with a custom formatter show their summary inline.
    pub show_summary: bool,
}

/// How a finished tool invocation is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResultPresentation {
    Media {
        tool_id: String,
        image_url: String,
        caption: Option<String>,
    },
    Error {
        tool_id: Option<String>,
        message: String,
    },
    Generic {
        tool_id: Option<String>,
        label: String,
        icon: IconRef,
        arg_summary: Option<String>,
    },
}

impl ResultPresentation {
    /// The primary text a transcript shows for this outcome.
    pub fn text(&self) -> &str {
        match self {
            Self::Media { caption, .. } => caption.as_deref().unwrap_or_default(),
            Self::Error { message, .. } => message,
            Self::Generic { label, .. } => label,
        }
    }
}

/// Renders normalized invocations against a contract registry.
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a> {
    registry: &'a ContractRegistry,
    caption_limit: usize,
}

impl Default for Renderer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer<'static> {
    /// Renderer over the built-in registry with the default caption limit.
    pub fn new() -> Self {
        Self::with_registry(ContractRegistry::builtin())
    }

    pub fn from_config(config: &OnBrandConfig) -> Self {
        Self::new().with_caption_limit(config.display().caption_limit)
    }
}

impl<'a> Renderer<'a> {
    pub fn with_registry(registry: &'a ContractRegistry) -> Self {
        Self {
            registry,
            caption_limit: DEFAULT_CAPTION_LIMIT,
        }
    }

    pub fn with_caption_limit(mut self, limit: usize) -> Self {
        self.caption_limit = limit.max(1);
        self
    }

    pub fn caption_limit(&self) -> usize {
        self.caption_limit
    }

    pub fn render_call(&self, invocation: &NormalizedInvocation) -> CallPresentation {
        let tool_id = invocation.tool_id();
        let contract = self.registry.lookup(tool_id);
        let arg_summary =
            format_arguments(tool_id.unwrap_or_default(), invocation.args.as_ref(), contract);

        CallPresentation {
            tool_id: tool_id.map(ToString::to_string),
            label: contract.call_label.to_string(),
            icon: contract.call_icon,
            show_summary: contract.format_args.is_some() && !arg_summary.is_empty(),
            arg_summary,
        }
    }

    pub fn render_result(&self, invocation: &NormalizedInvocation) -> ResultPresentation {
        let tool_id = invocation.tool_id();

        // Media-producing tools are special-cased by identifier before the
        // generic path. A finished image call without a payload produced no
        // image, so it decodes as the coerced failure.
        if tool_id == Some(GENERATE_IMAGE) && invocation.phase == Phase::Result {
            let decoded = match invocation.result.as_ref() {
                Some(payload) => ImageResult::from_payload(payload),
                None => ImageResult::from_payload(&Value::Null),
            };
            return match decoded {
                ImageResult::Success {
                    image_url,
                    revised_prompt,
                } => ResultPresentation::Media {
                    tool_id: GENERATE_IMAGE.to_string(),
                    image_url,
                    caption: revised_prompt
                        .map(|prompt| truncate_caption(&prompt, self.caption_limit))
                        .filter(|caption| !caption.is_empty()),
                },
                ImageResult::Failure { error, .. } => ResultPresentation::Error {
                    tool_id: Some(GENERATE_IMAGE.to_string()),
                    message: error,
                },
            };
        }

        if let Some(message) = invocation.result.as_ref().and_then(error_message) {
            return ResultPresentation::Error {
                tool_id: tool_id.map(ToString::to_string),
                message,
            };
        }

        let contract = self.registry.lookup(tool_id);
        let arg_summary = invocation
            .args
            .as_ref()
            .map(|args| format_arguments(tool_id.unwrap_or_default(), Some(args), contract))
            .filter(|summary| !summary.is_empty());

        ResultPresentation::Generic {
            tool_id: tool_id.map(ToString::to_string),
            label: contract.result_label.to_string(),
            icon: contract.result_icon,
            arg_summary,
        }
    }
}

/// Render a call with the built-in registry.
pub fn render_call(invocation: &NormalizedInvocation) -> CallPresentation {
    Renderer::new().render_call(invocation)
}

/// Render a result with the built-in registry.
pub fn render_result(invocation: &NormalizedInvocation) -> ResultPresentation {
    Renderer::new().render_result(invocation)
}

/// One-line argument summary.
///
/// Uses the contract's formatter when it has one. Otherwise: absent or null
/// payloads give an empty summary, scalars their text, and objects their
/// `query` or `prompt` field, else [`ARGUMENTS_PLACEHOLDER`].
pub fn format_arguments(tool_id: &str, args: Option<&Value>, contract: &ToolContract) -> String {
    if let Some(format) = contract.format_args {
        return format(tool_id, args);
    }

    match args {
        None | Some(Value::Null) => String::new(),
        Some(Value::Object(obj)) => ["query", "prompt"]
            .iter()
            .find_map(|key| obj.get(*key).filter(|v| !v.is_null()))
            .map(text_of)
            .unwrap_or_else(|| ARGUMENTS_PLACEHOLDER.to_string()),
        Some(Value::Array(_)) => ARGUMENTS_PLACEHOLDER.to_string(),
        Some(scalar) => text_of(scalar),
    }
}

/// Truncate to at most `limit` characters, ellipsis included.
pub fn truncate_caption(text: &str, limit: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut caption: String = text.chars().take(limit.saturating_sub(1)).collect();
    caption.truncate(caption.trim_end().len());
    caption.push(ELLIPSIS);
    caption
}
