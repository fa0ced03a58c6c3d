//! Typed access to tool call arguments.

use crate::error::OnBrandError;

/// Wrapper around the arguments the runtime passed to a tool.
#[derive(Debug, Clone, Default)]
pub struct ToolArguments {
    value: serde_json::Value,
}

impl ToolArguments {
    /// Wrap a JSON value. A JSON-encoded string is decoded first, since some
    /// runtimes forward arguments as the raw text the model produced.
    pub fn new(value: serde_json::Value) -> Self {
        let value = match value {
            serde_json::Value::String(raw) => {
                serde_json::from_str(raw.trim()).unwrap_or(serde_json::Value::String(raw))
            }
            other => other,
        };
        Self { value }
    }

    /// Get the raw JSON value.
    pub fn raw(&self) -> &serde_json::Value {
        &self.value
    }

    /// Get a string argument by key.
    pub fn get_str(&self, key: &str) -> Result<&str, OnBrandError> {
        self.get_str_opt(key)
            .ok_or_else(|| OnBrandError::InvalidArgument(format!("Missing string argument: {key}")))
    }

    /// Get an optional string argument.
    pub fn get_str_opt(&self, key: &str) -> Option<&str> {
        self.value.get(key).and_then(|v| v.as_str())
    }

    /// Deserialize the arguments into a typed struct.
    pub fn deserialize<T: serde::de::DeserializeOwned>(&self) -> Result<T, OnBrandError> {
        serde_json::from_value(self.value.clone()).map_err(|e| {
            OnBrandError::InvalidArgument(format!("Failed to deserialize arguments: {e}"))
        })
    }
}

impl From<serde_json::Value> for ToolArguments {
    fn from(value: serde_json::Value) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_encoded_arguments_are_decoded() {
        let args = ToolArguments::new(json!("{\"prompt\": \"poster\"}"));
        assert_eq!(args.get_str("prompt").unwrap(), "poster");
    }

    #[test]
    fn missing_key_is_invalid_argument() {
        let args = ToolArguments::new(json!({}));
        assert!(matches!(args.get_str("prompt"), Err(OnBrandError::InvalidArgument(_))));
        assert_eq!(args.get_str_opt("prompt"), None);
    }

    #[test]
    fn deserialize_into_struct() {
        #[derive(serde::Deserialize)]
        struct Params {
            prompt: String,
        }
        let params: Params = ToolArguments::new(json!({"prompt": "banner"})).deserialize().unwrap();
        assert_eq!(params.prompt, "banner");
    }
}
