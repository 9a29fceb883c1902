//! Current-time tool.

use async_trait::async_trait;
use chrono::Local;
use serde_json::{json, Value};
use std::collections::HashMap;

use super::base::Tool;
use crate::error::ToolError;

/// Timestamp format returned to the model.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Reads the local system clock.
pub struct CurrentTimeTool;

#[async_trait]
impl Tool for CurrentTimeTool {
    fn name(&self) -> &str {
        "current_time"
    }

    fn description(&self) -> &str {
        "Returns the current local date and time. Use it when asked what time or day it is."
    }

    fn parameters(&self) -> Value {
        json!({ "type": "object", "properties": {}, "required": [] })
    }

    async fn execute(&self, _params: HashMap<String, Value>) -> Result<String, ToolError> {
        Ok(Local::now().format(TIME_FORMAT).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[tokio::test]
    async fn test_returns_parseable_timestamp() {
        let out = CurrentTimeTool.execute(HashMap::new()).await.unwrap();
        assert_eq!(out.len(), 19);
        assert!(NaiveDateTime::parse_from_str(&out, TIME_FORMAT).is_ok());
    }
}
