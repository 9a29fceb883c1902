//! Delegate tool — hands a task to an expert agent.
//!
//! To the model this is an ordinary tool. Executing it runs a full turn on
//! the chosen expert, whose history keeps growing across delegations.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use maestro_core::utils::truncate_string;

use super::base::{require_string, Tool};
use crate::error::ToolError;
use crate::roster::Roster;

/// Routes a task to one expert in the roster.
pub struct DelegateTool {
    roster: Arc<Roster>,
    description: String,
}

impl DelegateTool {
    pub fn new(roster: Arc<Roster>) -> Self {
        let experts: Vec<String> = roster
            .iter()
            .map(|(id, agent)| format!("- {id}: {}", agent.description()))
            .collect();
        let description = format!(
            "Ask a specialised expert agent to handle a task and return its answer. \
             The expert remembers earlier tasks you gave it. Available experts:\n{}",
            experts.join("\n")
        );
        Self { roster, description }
    }
}

#[async_trait]
impl Tool for DelegateTool {
    fn name(&self) -> &str {
        "delegate"
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "expert": {
                    "type": "string",
                    "enum": self.roster.ids(),
                    "description": "Which expert to consult"
                },
                "task": {
                    "type": "string",
                    "description": "The question or task for the expert, including any details it needs"
                }
            },
            "required": ["expert", "task"]
        })
    }

    async fn execute(&self, params: HashMap<String, Value>) -> Result<String, ToolError> {
        let expert_id = require_string(&params, "expert")?;
        let task = require_string(&params, "task")?;

        let expert = self
            .roster
            .get(&expert_id)
            .ok_or_else(|| ToolError::UnknownExpert(expert_id.clone()))?;

        info!(expert = %expert_id, task = %truncate_string(&task, 80), "delegating to expert");

        match expert.run_turn(&task).await {
            Ok(answer) => {
                debug!(expert = %expert_id, answer_len = answer.len(), "expert answered");
                Ok(answer)
            }
            Err(e) => {
                warn!(expert = %expert_id, error = %e, "expert turn failed");
                Err(ToolError::Failed(format!("expert '{expert_id}' failed: {e}")))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::{Agent, AgentSettings};
    use crate::test_support::{final_answer, ScriptedProvider};
    use maestro_providers::ProviderError;

    fn roster_with(provider: Arc<ScriptedProvider>) -> Arc<Roster> {
        let mut roster = Roster::new();
        roster
            .add(
                "writing",
                Agent::new("writing", "Drafting and editing text", "You are a writer.", provider, &AgentSettings::default()),
            )
            .unwrap();
        Arc::new(roster)
    }

    fn params(expert: &str, task: &str) -> HashMap<String, Value> {
        HashMap::from([
            ("expert".to_string(), json!(expert)),
            ("task".to_string(), json!(task)),
        ])
    }

    #[test]
    fn test_schema_lists_roster() {
        let tool = DelegateTool::new(roster_with(Arc::new(ScriptedProvider::scripted(vec![]))));
        assert_eq!(tool.parameters()["properties"]["expert"]["enum"], json!(["writing"]));
        assert!(tool.description().contains("- writing: Drafting and editing text"));
    }

    #[tokio::test]
    async fn test_returns_expert_answer() {
        let provider = Arc::new(ScriptedProvider::scripted(vec![final_answer("Dear team, ...")]));
        let roster = roster_with(provider.clone());
        let tool = DelegateTool::new(roster.clone());

        let out = tool.execute(params("writing", "draft a vacation email")).await.unwrap();
        assert_eq!(out, "Dear team, ...");

        let history = roster.get("writing").unwrap().history_snapshot().await;
        assert_eq!(history.len(), 2);
        assert_eq!(history.messages()[0].text(), Some("draft a vacation email"));
    }

    #[tokio::test]
    async fn test_unknown_expert() {
        let tool = DelegateTool::new(roster_with(Arc::new(ScriptedProvider::scripted(vec![]))));
        let err = tool.execute(params("astrology", "read my stars")).await.unwrap_err();
        assert_eq!(err, ToolError::UnknownExpert("astrology".into()));
    }

    #[tokio::test]
    async fn test_expert_failure_becomes_tool_error() {
        let provider = Arc::new(ScriptedProvider::with_results(vec![Err(
            ProviderError::Unavailable("connection reset".into()),
        )]));
        let tool = DelegateTool::new(roster_with(provider));

        let err = tool.execute(params("writing", "anything")).await.unwrap_err();
        let ToolError::Failed(msg) = err else {
            panic!("expected Failed");
        };
        assert!(msg.starts_with("expert 'writing' failed"));
        assert!(msg.contains("connection reset"));
    }
}
