//! Top-level validation of tool arguments against a parameter schema.

use serde_json::Value;

use crate::error::OnBrandError;

/// Check object shape, required fields, declared property types and, when the
/// schema sets `additionalProperties: false`, undeclared fields.
pub fn validate_arguments(args: &Value, schema: &Value) -> Result<(), OnBrandError> {
    let Some(obj) = args.as_object() else {
        return Err(OnBrandError::InvalidArgument(format!(
            "expected object arguments, got {}",
            json_type_name(args)
        )));
    };

    let properties = schema.get("properties").and_then(Value::as_object);

    for name in schema
        .get("required")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
    {
        if !obj.contains_key(name) {
            return Err(OnBrandError::InvalidArgument(format!(
                "missing required field '{name}'"
            )));
        }
    }

    let closed = schema.get("additionalProperties") == Some(&Value::Bool(false));
    for (key, value) in obj {
        let declared = properties.and_then(|props| props.get(key));
        match declared.and_then(|prop| prop.get("type")).and_then(Value::as_str) {
            Some(expected) if !value_matches_type(value, expected) => {
                return Err(OnBrandError::InvalidArgument(format!(
                    "field '{key}' expected type '{expected}', got {}",
                    json_type_name(value)
                )));
            }
            _ if declared.is_none() && closed => {
                return Err(OnBrandError::InvalidArgument(format!(
                    "unexpected field '{key}'"
                )));
            }
            _ => {}
        }
    }

    Ok(())
}

fn value_matches_type(value: &Value, expected: &str) -> bool {
    match expected {
        "string" => value.is_string(),
        "number" => value.is_number(),
        "integer" => value.is_i64() || value.is_u64(),
        "boolean" => value.is_boolean(),
        "object" => value.is_object(),
        "array" => value.is_array(),
        "null" => value.is_null(),
        _ => true,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
