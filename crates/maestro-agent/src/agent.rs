//! Agent — a named role with its own tools and its own conversation history.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::info;

use maestro_core::config::AgentDefaults;
use maestro_providers::{LlmProvider, LlmRequestConfig};

use crate::history::ConversationHistory;
use crate::tools::ToolRegistry;

/// Default maximum LLM ↔ tool rounds per turn.
pub const DEFAULT_MAX_ITERATIONS: usize = 20;

/// Model and loop settings shared by the agents built from one config.
#[derive(Clone, Debug)]
pub struct AgentSettings {
    /// Model to use. `None` means the provider's default.
    pub model: Option<String>,
    /// Max LLM ↔ tool rounds per turn.
    pub max_iterations: usize,
    /// Temperature and max_tokens for every call.
    pub request_config: LlmRequestConfig,
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            model: None,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            request_config: LlmRequestConfig::default(),
        }
    }
}

impl AgentSettings {
    /// Build settings from the `agents.defaults` config section.
    pub fn from_defaults(defaults: &AgentDefaults) -> Self {
        Self {
            model: defaults.model_override().map(String::from),
            max_iterations: defaults.max_tool_iterations as usize,
            request_config: LlmRequestConfig {
                max_tokens: defaults.max_tokens,
                temperature: defaults.temperature,
            },
        }
    }
}

// ─────────────────────────────────────────────
// Agent
// ─────────────────────────────────────────────

/// A participant in the conversation.
///
/// Everything except the history is fixed at construction. The history sits
/// behind an async mutex that is held for a whole turn (see `run_turn` in
/// [`crate::agent_loop`]).
pub struct Agent {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) system_prompt: String,
    pub(crate) tools: ToolRegistry,
    pub(crate) provider: Arc<dyn LlmProvider>,
    pub(crate) model: String,
    pub(crate) max_iterations: usize,
    pub(crate) request_config: LlmRequestConfig,
    pub(crate) history: Mutex<ConversationHistory>,
}

impl Agent {
    /// Create an agent with no tools and an empty history.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        system_prompt: impl Into<String>,
        provider: Arc<dyn LlmProvider>,
        settings: &AgentSettings,
    ) -> Self {
        let model = settings
            .model
            .clone()
            .unwrap_or_else(|| provider.default_model().to_string());

        Self {
            name: name.into(),
            description: description.into(),
            system_prompt: system_prompt.into(),
            tools: ToolRegistry::new(),
            provider,
            model,
            max_iterations: settings.max_iterations.max(1),
            request_config: settings.request_config.clone(),
            history: Mutex::new(ConversationHistory::new()),
        }
    }

    /// Give the agent its tool set.
    pub fn with_tools(mut self, tools: ToolRegistry) -> Self {
        info!(
            agent = %self.name,
            tools = ?tools.tool_names(),
            model = %self.model,
            "agent tools bound"
        );
        self.tools = tools;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Copy of the current history. Waits for a running turn to finish.
    pub async fn history_snapshot(&self) -> ConversationHistory {
        self.history.lock().await.clone()
    }
}

impl std::fmt::Debug for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agent")
            .field("name", &self.name)
            .field("model", &self.model)
            .field("tools", &self.tools.tool_names())
            .field("max_iterations", &self.max_iterations)
            .finish()
    }
}
