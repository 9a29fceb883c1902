//! Tool trait — the interface every agent tool implements.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;

use maestro_core::types::ToolDefinition;

use crate::error::ToolError;

// ─────────────────────────────────────────────
// Tool trait
// ─────────────────────────────────────────────

/// Every agent tool implements this trait.
///
/// The registry advertises tools via `to_definition()`, validates the
/// model's arguments against `parameters()`, and only then calls `execute()`.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Unique name used by the LLM to call this tool (e.g. `"calculator"`).
    fn name(&self) -> &str;

    /// Human-readable description shown to the LLM.
    fn description(&self) -> &str;

    /// JSON Schema describing the parameters.
    ///
    /// Must be `{"type": "object", "properties": {...}, "required": [...]}`.
    fn parameters(&self) -> Value;

    /// Execute the tool with already-validated arguments.
    ///
    /// Returns the text the LLM reads as the tool result.
    async fn execute(&self, params: HashMap<String, Value>) -> Result<String, ToolError>;

    /// Build the `ToolDefinition` sent to the LLM.
    fn to_definition(&self) -> ToolDefinition {
        ToolDefinition::new(self.name(), self.description(), self.parameters())
    }
}

// ─────────────────────────────────────────────
// Param helpers
// ─────────────────────────────────────────────

/// Extract a required `String` param.
pub fn require_string(params: &HashMap<String, Value>, key: &str) -> Result<String, ToolError> {
    params
        .get(key)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| ToolError::InvalidArguments(format!("missing required parameter '{key}'")))
}

/// Extract a required numeric param as `f64`.
pub fn require_number(params: &HashMap<String, Value>, key: &str) -> Result<f64, ToolError> {
    params
        .get(key)
        .and_then(|v| v.as_f64())
        .ok_or_else(|| ToolError::InvalidArguments(format!("missing required parameter '{key}'")))
}

/// Render a number the way people write it: `100`, not `100.0`.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_require_string() {
        let mut params = HashMap::new();
        params.insert("task".into(), json!("write a haiku"));
        params.insert("count".into(), json!(3));

        assert_eq!(require_string(&params, "task").unwrap(), "write a haiku");
        assert!(require_string(&params, "count").is_err());
        assert_eq!(
            require_string(&params, "missing").unwrap_err(),
            ToolError::InvalidArguments("missing required parameter 'missing'".into())
        );
    }

    #[test]
    fn test_require_number_accepts_integers_and_floats() {
        let mut params = HashMap::new();
        params.insert("a".into(), json!(25));
        params.insert("b".into(), json!(0.5));
        params.insert("c".into(), json!("7"));

        assert_eq!(require_number(&params, "a").unwrap(), 25.0);
        assert_eq!(require_number(&params, "b").unwrap(), 0.5);
        assert!(require_number(&params, "c").is_err());
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(-42.0), "-42");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333333333");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[tokio::test]
    async fn test_to_definition_default() {
        struct DummyTool;

        #[async_trait]
        impl Tool for DummyTool {
            fn name(&self) -> &str {
                "dummy"
            }

            fn description(&self) -> &str {
                "A test tool"
            }

            fn parameters(&self) -> Value {
                json!({
                    "type": "object",
                    "properties": { "msg": { "type": "string" } },
                    "required": ["msg"]
                })
            }

            async fn execute(&self, _params: HashMap<String, Value>) -> Result<String, ToolError> {
                Ok("ok".into())
            }
        }

        let def = DummyTool.to_definition();
        assert_eq!(def.function.name, "dummy");
        assert_eq!(def.function.description, "A test tool");
        assert_eq!(def.tool_type, "function");
        assert_eq!(DummyTool.execute(HashMap::new()).await.unwrap(), "ok");
    }
}
