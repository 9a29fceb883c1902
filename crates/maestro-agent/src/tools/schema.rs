//! Argument validation against a tool's JSON Schema.
//!
//! Covers the subset of JSON Schema the built-in tools declare: `type`,
//! `properties`, `required`, `items` and `enum`. Unknown keywords are ignored.

use serde_json::Value;

use crate::error::ToolError;

/// Check `args` against `schema`.
///
/// Arguments must be a JSON object. Optional fields may be `null`.
pub fn validate_arguments(schema: &Value, args: &Value) -> Result<(), ToolError> {
    if !args.is_object() {
        return Err(ToolError::InvalidArguments(format!(
            "arguments must be a JSON object, got {}",
            kind_of(args)
        )));
    }
    check(schema, args, "").map_err(ToolError::InvalidArguments)
}

fn check(schema: &Value, value: &Value, path: &str) -> Result<(), String> {
    if let Some(expected) = schema.get("type").and_then(Value::as_str) {
        if !matches_type(expected, value) {
            return Err(format!(
                "{} must be {} {expected}, got {}",
                label(path),
                article(expected),
                kind_of(value)
            ));
        }
    }

    if let Some(allowed) = schema.get("enum").and_then(Value::as_array) {
        if !allowed.contains(value) {
            let options: Vec<String> = allowed
                .iter()
                .map(|v| v.as_str().map(String::from).unwrap_or_else(|| v.to_string()))
                .collect();
            return Err(format!(
                "{} must be one of: {} (got {value})",
                label(path),
                options.join(", ")
            ));
        }
    }

    match value {
        Value::Object(map) => {
            let required: Vec<&str> = schema
                .get("required")
                .and_then(Value::as_array)
                .map(|names| names.iter().filter_map(Value::as_str).collect())
                .unwrap_or_default();

            for name in &required {
                if map.get(*name).map_or(true, Value::is_null) {
                    return Err(format!("missing required parameter '{}'", join(path, name)));
                }
            }

            if let Some(properties) = schema.get("properties").and_then(Value::as_object) {
                for (name, sub_schema) in properties {
                    match map.get(name) {
                        Some(Value::Null) | None => {}
                        Some(field) => check(sub_schema, field, &join(path, name))?,
                    }
                }
            }
        }
        Value::Array(items) => {
            if let Some(item_schema) = schema.get("items") {
                for (i, item) in items.iter().enumerate() {
                    check(item_schema, item, &format!("{path}[{i}]"))?;
                }
            }
        }
        _ => {}
    }

    Ok(())
}

fn matches_type(expected: &str, value: &Value) -> bool {
    match expected {
        "string" => value.is_string(),
        "number" => value.is_number(),
        "integer" => value.is_i64() || value.is_u64() || value.as_f64().is_some_and(|f| f.fract() == 0.0),
        "boolean" => value.is_boolean(),
        "array" => value.is_array(),
        "object" => value.is_object(),
        "null" => value.is_null(),
        _ => true,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn article(type_name: &str) -> &'static str {
    match type_name {
        "integer" | "array" | "object" => "an",
        _ => "a",
    }
}

fn label(path: &str) -> String {
    if path.is_empty() {
        "arguments".to_string()
    } else {
        format!("parameter '{path}'")
    }
}

fn join(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{path}.{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn calculator_schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "operation": { "type": "string", "enum": ["add", "subtract", "multiply", "divide"] },
                "a": { "type": "number" },
                "b": { "type": "number" }
            },
            "required": ["operation", "a", "b"]
        })
    }

    fn invalid(err: ToolError) -> String {
        match err {
            ToolError::InvalidArguments(msg) => msg,
            other => panic!("expected InvalidArguments, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_arguments() {
        let args = json!({"operation": "multiply", "a": 25, "b": 4});
        assert!(validate_arguments(&calculator_schema(), &args).is_ok());
    }

    #[test]
    fn test_missing_required() {
        let err = validate_arguments(&calculator_schema(), &json!({"operation": "add", "a": 1}));
        assert_eq!(invalid(err.unwrap_err()), "missing required parameter 'b'");
    }

    #[test]
    fn test_required_null_counts_as_missing() {
        let err = validate_arguments(&calculator_schema(), &json!({"operation": "add", "a": 1, "b": null}));
        assert_eq!(invalid(err.unwrap_err()), "missing required parameter 'b'");
    }

    #[test]
    fn test_wrong_type() {
        let err = validate_arguments(&calculator_schema(), &json!({"operation": "add", "a": "1", "b": 2}));
        assert_eq!(invalid(err.unwrap_err()), "parameter 'a' must be a number, got string");
    }

    #[test]
    fn test_enum_violation() {
        let err = validate_arguments(&calculator_schema(), &json!({"operation": "power", "a": 2, "b": 3}));
        let msg = invalid(err.unwrap_err());
        assert!(msg.starts_with("parameter 'operation' must be one of: add, subtract, multiply, divide"));
        assert!(msg.contains("power"));
    }

    #[test]
    fn test_non_object_arguments() {
        let err = validate_arguments(&calculator_schema(), &json!("{not json"));
        assert_eq!(invalid(err.unwrap_err()), "arguments must be a JSON object, got string");
    }

    #[test]
    fn test_nested_array_items() {
        let schema = json!({
            "type": "object",
            "properties": {
                "ingredients": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": { "name": {"type": "string"}, "grams": {"type": "number"} },
                        "required": ["name", "grams"]
                    }
                },
                "servings": { "type": "integer" }
            },
            "required": ["ingredients"]
        });

        let ok = json!({"ingredients": [{"name": "rice", "grams": 200}], "servings": 2});
        assert!(validate_arguments(&schema, &ok).is_ok());

        let bad_item = json!({"ingredients": [{"name": "rice", "grams": 200}, {"name": "salt"}]});
        assert_eq!(
            invalid(validate_arguments(&schema, &bad_item).unwrap_err()),
            "missing required parameter 'ingredients[1].grams'"
        );

        let bad_integer = json!({"ingredients": [], "servings": 2.5});
        assert_eq!(
            invalid(validate_arguments(&schema, &bad_integer).unwrap_err()),
            "parameter 'servings' must be an integer, got number"
        );
    }

    #[test]
    fn test_optional_null_and_unknown_fields_pass() {
        let schema = json!({
            "type": "object",
            "properties": { "note": {"type": "string"} },
            "required": []
        });
        assert!(validate_arguments(&schema, &json!({"note": null, "extra": 1})).is_ok());
        assert!(validate_arguments(&schema, &json!({})).is_ok());
    }
}
