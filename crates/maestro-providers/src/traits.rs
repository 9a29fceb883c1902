//! LLM provider trait — the model gateway the agent loop talks to.
//!
//! Every backend implements this trait. [`crate::HttpProvider`] covers all
//! OpenAI-compatible APIs (OpenAI, Gemini's compatibility endpoint, OpenRouter).

use async_trait::async_trait;
use maestro_core::types::{Decision, Message, ToolDefinition};

use crate::error::ProviderError;

/// Configuration passed to each LLM call.
#[derive(Clone, Debug)]
pub struct LlmRequestConfig {
    /// Maximum tokens to generate.
    pub max_tokens: u32,
    /// Sampling temperature (0.0 – 2.0).
    pub temperature: f64,
}

impl Default for LlmRequestConfig {
    fn default() -> Self {
        Self {
            max_tokens: 4096,
            temperature: 0.7,
        }
    }
}

/// Trait that all LLM providers must implement.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Ask the model what to do next.
    ///
    /// # Arguments
    /// * `messages` — System prompt followed by the full conversation history.
    /// * `tools`    — Tool schemas to advertise. Empty means plain chat.
    /// * `model`    — Model identifier (e.g. `"gpt-4o-mini"`).
    /// * `config`   — Temperature, max_tokens, etc.
    ///
    /// # Returns
    /// A final answer or an ordered batch of tool requests.
    async fn complete(
        &self,
        messages: &[Message],
        tools: &[ToolDefinition],
        model: &str,
        config: &LlmRequestConfig,
    ) -> Result<Decision, ProviderError>;

    /// The default model for this provider instance.
    fn default_model(&self) -> &str;

    /// Display name for logging.
    fn display_name(&self) -> &str;
}
