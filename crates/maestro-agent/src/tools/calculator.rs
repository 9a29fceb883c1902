//! Calculator tool — the four basic arithmetic operations.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;

use super::base::{format_number, require_number, require_string, Tool};
use crate::error::ToolError;

/// Basic arithmetic on two numbers.
pub struct CalculatorTool;

#[async_trait]
impl Tool for CalculatorTool {
    fn name(&self) -> &str {
        "calculator"
    }

    fn description(&self) -> &str {
        "Performs basic arithmetic (add, subtract, multiply, divide) on two numbers. \
         Use it whenever the user asks to calculate something."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "operation": {
                    "type": "string",
                    "enum": ["add", "subtract", "multiply", "divide"],
                    "description": "The operation to perform"
                },
                "a": { "type": "number", "description": "First operand" },
                "b": { "type": "number", "description": "Second operand" }
            },
            "required": ["operation", "a", "b"]
        })
    }

    async fn execute(&self, params: HashMap<String, Value>) -> Result<String, ToolError> {
        let operation = require_string(&params, "operation")?;
        let a = require_number(&params, "a")?;
        let b = require_number(&params, "b")?;

        let result = match operation.as_str() {
            "add" => a + b,
            "subtract" => a - b,
            "multiply" => a * b,
            "divide" => {
                if b == 0.0 {
                    return Err(ToolError::InvalidArguments("division by zero".into()));
                }
                a / b
            }
            other => {
                return Err(ToolError::InvalidArguments(format!("unknown operation '{other}'")));
            }
        };

        if !result.is_finite() {
            return Err(ToolError::Failed(format!(
                "{operation} of {} and {} overflows",
                format_number(a),
                format_number(b)
            )));
        }

        Ok(format_number(result))
    }
}
