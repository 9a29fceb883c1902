//! Orchestrator — the top-level agent the user talks to.
//!
//! It owns exactly one tool, `delegate`, bound to the expert roster. Every
//! domain task goes through an expert; the orchestrator itself only routes
//! and phrases the final reply.

use std::sync::Arc;

use tracing::info;

use maestro_providers::LlmProvider;

use crate::agent::{Agent, AgentSettings};
use crate::error::{AgentError, RegistryError};
use crate::experts::default_roster;
use crate::roster::Roster;
use crate::tools::{DelegateTool, ToolRegistry};

pub const ORCHESTRATOR_NAME: &str = "orchestrator";

const ORCHESTRATOR_PROMPT: &str = "\
You are an assistant that coordinates a team of expert agents.

Your job is to:
1. Work out what the user needs
2. Answer directly only for small talk or questions about yourself
3. Otherwise use the delegate tool to hand the task to the right expert, \
passing along every detail the expert needs
4. Relay the expert's answer to the user

IMPORTANT:
- Do not invent facts, calculations, dates or recipes; ask an expert
- For recipes and food, ALWAYS delegate to the cooking expert, and keep \
sending the user's follow-up answers to it: it remembers the conversation
- Be concise";

pub struct Orchestrator {
    agent: Agent,
    roster: Arc<Roster>,
}

impl Orchestrator {
    /// Build the orchestrator with the standard expert roster.
    pub fn new(provider: Arc<dyn LlmProvider>, settings: &AgentSettings) -> Result<Self, RegistryError> {
        let roster = default_roster(provider.clone(), settings)?;
        Self::with_roster(provider, settings, roster)
    }

    /// Build the orchestrator over a custom roster.
    pub fn with_roster(
        provider: Arc<dyn LlmProvider>,
        settings: &AgentSettings,
        roster: Roster,
    ) -> Result<Self, RegistryError> {
        let roster = Arc::new(roster);

        let mut tools = ToolRegistry::new();
        tools.register(Arc::new(DelegateTool::new(roster.clone())))?;

        let agent = Agent::new(
            ORCHESTRATOR_NAME,
            "routes user requests to expert agents",
            ORCHESTRATOR_PROMPT,
            provider,
            settings,
        )
        .with_tools(tools);

        info!(experts = ?roster.ids(), model = %agent.model(), "orchestrator ready");
        Ok(Self { agent, roster })
    }

    /// Handle one user message and return the final reply.
    pub async fn process(&self, user_text: &str) -> Result<String, AgentError> {
        self.agent.run_turn(user_text).await
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }
}

impl std::fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("model", &self.agent.model())
            .field("experts", &self.roster.ids())
            .finish()
    }
}
