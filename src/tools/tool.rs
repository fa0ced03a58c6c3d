//! Tool trait exposed to the model-serving runtime.

use async_trait::async_trait;

use super::arguments::ToolArguments;
use super::types::ParameterSchema;
use crate::error::OnBrandError;

/// Context available during tool execution.
#[derive(Debug, Clone, Default)]
pub struct ToolExecutionContext {
    /// Call id assigned by the runtime, when it has one.
    pub call_id: Option<String>,
    /// Additional metadata for the tool.
    pub metadata: serde_json::Value,
}

/// A named, schema-declared capability the model may invoke.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Tool name (must match what the model calls).
    fn name(&self) -> &str;

    /// Human-readable description.
    fn description(&self) -> &str;

    /// JSON Schema parameters.
    fn parameters(&self) -> &ParameterSchema;

    /// Declaration handed to the runtime: `{name, description, parameters}`.
    fn definition(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name(),
            "description": self.description(),
            "parameters": self.parameters().schema,
        })
    }

    /// Execute the tool with parsed arguments.
    async fn execute(
        &self,
        args: &ToolArguments,
        ctx: &ToolExecutionContext,
    ) -> Result<serde_json::Value, OnBrandError>;
}
