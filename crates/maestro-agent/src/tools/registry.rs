//! Tool Registry — per-agent store of tools, keyed by name.
//!
//! The agent loop advertises the registry's definitions to the model and
//! dispatches the model's tool requests through [`ToolRegistry::invoke`].

use std::collections::HashMap;
use std::sync::Arc;

use maestro_core::types::ToolDefinition;
use serde_json::Value;
use tracing::{debug, info};

use super::base::Tool;
use super::schema::validate_arguments;
use crate::error::{RegistryError, ToolError};

// ─────────────────────────────────────────────
// Registry
// ─────────────────────────────────────────────

/// Stores tools in registration order and dispatches calls by name.
///
/// Owns `Arc<dyn Tool>` so one tool instance can be shared by several agents.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool. Names are unique within one registry.
    pub fn register(&mut self, tool: Arc<dyn Tool>) -> Result<(), RegistryError> {
        let name = tool.name().to_string();
        if self.index.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }
        info!(tool = %name, "registered tool");
        self.index.insert(name, self.tools.len());
        self.tools.push(tool);
        Ok(())
    }

    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.index.get(name).map(|&i| &self.tools[i])
    }

    /// Check if a tool is registered.
    pub fn has(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Names of all registered tools, in registration order.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    /// LLM-facing definitions for all registered tools, in registration order.
    pub fn describe(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(|t| t.to_definition()).collect()
    }

    /// Validate `arguments` and execute the named tool.
    pub async fn invoke(&self, name: &str, arguments: &Value) -> Result<String, ToolError> {
        let tool = self
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;

        validate_arguments(&tool.parameters(), arguments)?;

        let params: HashMap<String, Value> = arguments
            .as_object()
            .map(|map| map.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
            .unwrap_or_default();

        let result = tool.execute(params).await?;
        debug!(tool = name, result_len = result.len(), "tool result");
        Ok(result)
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;

    /// Minimal test tool.
    struct EchoTool;

    #[async_trait]
    impl Tool for EchoTool {
        fn name(&self) -> &str {
            "echo"
        }
        fn description(&self) -> &str {
            "Echoes back the input"
        }
        fn parameters(&self) -> Value {
            json!({
                "type": "object",
                "properties": {
                    "text": { "type": "string", "description": "Text to echo" }
                },
                "required": ["text"]
            })
        }
        async fn execute(&self, params: HashMap<String, Value>) -> Result<String, ToolError> {
            let text = params.get("text").and_then(|v| v.as_str()).unwrap_or("(empty)");
            Ok(format!("Echo: {text}"))
        }
    }

    /// Tool that always fails.
    struct FailTool;

    #[async_trait]
    impl Tool for FailTool {
        fn name(&self) -> &str {
            "fail"
        }
        fn description(&self) -> &str {
            "Always fails"
        }
        fn parameters(&self) -> Value {
            json!({"type": "object", "properties": {}, "required": []})
        }
        async fn execute(&self, _params: HashMap<String, Value>) -> Result<String, ToolError> {
            Err(ToolError::Failed("intentional failure".into()))
        }
    }

    fn registry() -> ToolRegistry {
        let mut reg = ToolRegistry::new();
        reg.register(Arc::new(FailTool)).unwrap();
        reg.register(Arc::new(EchoTool)).unwrap();
        reg
    }

    #[test]
    fn test_register_and_lookup() {
        let reg = registry();
        assert!(reg.has("echo"));
        assert!(!reg.has("nope"));
        assert_eq!(reg.get("fail").unwrap().name(), "fail");
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut reg = registry();
        let err = reg.register(Arc::new(EchoTool)).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateName("echo".into()));
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn test_registration_order_kept() {
        let reg = registry();
        assert_eq!(reg.tool_names(), vec!["fail", "echo"]);
        let names: Vec<String> = reg.describe().into_iter().map(|d| d.function.name).collect();
        assert_eq!(names, vec!["fail", "echo"]);
    }

    #[test]
    fn test_describe_is_idempotent() {
        let reg = registry();
        assert_eq!(reg.describe(), reg.describe());
    }

    #[tokio::test]
    async fn test_invoke_success() {
        let result = registry().invoke("echo", &json!({"text": "hello"})).await;
        assert_eq!(result.unwrap(), "Echo: hello");
    }

    #[tokio::test]
    async fn test_invoke_unknown_tool() {
        let err = registry().invoke("missing", &json!({})).await.unwrap_err();
        assert_eq!(err, ToolError::UnknownTool("missing".into()));
    }

    #[tokio::test]
    async fn test_invoke_validates_before_execute() {
        let err = registry().invoke("echo", &json!({"text": 5})).await.unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));

        let err = registry().invoke("echo", &json!("raw text")).await.unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[tokio::test]
    async fn test_invoke_error_propagated() {
        let err = registry().invoke("fail", &json!({})).await.unwrap_err();
        assert_eq!(err.to_string(), "intentional failure");
    }

    #[test]
    fn test_default() {
        assert!(ToolRegistry::default().is_empty());
    }
}
