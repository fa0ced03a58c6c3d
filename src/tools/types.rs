//! Parameter schemas for tool declarations.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use strum::{AsRefStr, Display};

/// JSON type of one declared tool parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum PropertyKind {
    String,
    Number,
    Boolean,
}

/// JSON Schema describing the object a tool accepts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ParameterSchema {
    pub schema: Value,
}

impl ParameterSchema {
    /// Wrap a hand-written schema.
    pub fn from_schema(schema: Value) -> Self {
        Self { schema }
    }

    /// Start a closed object schema.
    pub fn object() -> ParameterBuilder {
        ParameterBuilder::default()
    }

    /// Names listed under `required`.
    pub fn required(&self) -> Vec<&str> {
        self.schema
            .get("required")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_str)
            .collect()
    }
}

#[derive(Debug, Default)]
pub struct ParameterBuilder {
    properties: Map<String, Value>,
    required: Vec<String>,
}

impl ParameterBuilder {
    /// Declare one property.
    pub fn property(
        mut self,
        name: impl Into<String>,
        kind: PropertyKind,
        description: impl Into<String>,
        required: bool,
    ) -> Self {
        let name = name.into();
        self.properties.insert(
            name.clone(),
            json!({ "type": kind.as_ref(), "description": description.into() }),
        );
        if required {
            self.required.push(name);
        }
        self
    }

    pub fn string(self, name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        self.property(name, PropertyKind::String, description, required)
    }

    /// Finish the schema. Undeclared properties are rejected by validation.
    pub fn build(self) -> ParameterSchema {
        ParameterSchema {
            schema: json!({
                "type": "object",
                "properties": self.properties,
                "required": self.required,
                "additionalProperties": false,
            }),
        }
    }
}
