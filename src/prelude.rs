//! Convenience re-exports for common use.

pub use crate::config::OnBrandConfig;
pub use crate::contracts::{lookup, ContractRegistry, IconRef, ToolContract};
pub use crate::conversation::{Conversation, PartBody, PartPresentation};
pub use crate::error::{OnBrandError, Result};
pub use crate::invocation::{normalize, NormalizedInvocation, Phase, RawInvocationEvent, ToolIdentity};
pub use crate::provider::ImageSynthesizer;
pub use crate::render::{render_call, render_result, CallPresentation, Renderer, ResultPresentation};
pub use crate::tools::{GenerateImageTool, Tool, ToolArguments};
pub use crate::types::{ChatMessage, ImageResult, Role};
