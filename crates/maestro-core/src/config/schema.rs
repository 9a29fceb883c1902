//! Configuration schema.
//!
//! Hierarchy: `Config` → `AgentsConfig` → `AgentDefaults`, and
//! `Config` → `ProvidersConfig` → one `ProviderConfig` per backend.
//!
//! JSON on disk uses **camelCase** keys; Rust uses snake_case.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root configuration — loaded from `~/.maestro/config.json` + env vars.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub agents: AgentsConfig,
    pub providers: ProvidersConfig,
}

// ─────────────────────────────────────────────
// Agents
// ─────────────────────────────────────────────

/// Agent configuration container.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AgentsConfig {
    pub defaults: AgentDefaults,
}

/// Settings shared by the orchestrator and every expert.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AgentDefaults {
    /// Provider name (`"openai"`, `"gemini"`, `"openrouter"`).
    pub provider: String,
    /// Model identifier. Empty means the provider's default model.
    pub model: String,
    /// Maximum tokens to generate per response.
    pub max_tokens: u32,
    /// Sampling temperature (0.0 – 2.0).
    pub temperature: f64,
    /// Maximum tool-calling rounds per turn before the turn fails.
    pub max_tool_iterations: u32,
}

impl Default for AgentDefaults {
    fn default() -> Self {
        Self {
            provider: "openai".to_string(),
            model: String::new(),
            max_tokens: 4096,
            temperature: 0.7,
            max_tool_iterations: 20,
        }
    }
}

impl AgentDefaults {
    /// The configured model, if one was set explicitly.
    pub fn model_override(&self) -> Option<&str> {
        let model = self.model.trim();
        (!model.is_empty()).then_some(model)
    }
}

// ─────────────────────────────────────────────
// Providers
// ─────────────────────────────────────────────

/// Credentials and endpoint for a single LLM provider.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProviderConfig {
    /// API key for authentication.
    #[serde(default)]
    pub api_key: String,
    /// Custom API base URL (overrides provider default).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
}

impl ProviderConfig {
    /// Whether this provider has a configured API key.
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

/// All provider configurations.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub openai: ProviderConfig,
    #[serde(default)]
    pub gemini: ProviderConfig,
    #[serde(default)]
    pub openrouter: ProviderConfig,
}

impl ProvidersConfig {
    /// Get a provider config by name (e.g. `"gemini"`).
    pub fn get_by_name(&self, name: &str) -> Option<&ProviderConfig> {
        match name {
            "openai" => Some(&self.openai),
            "gemini" => Some(&self.gemini),
            "openrouter" => Some(&self.openrouter),
            _ => None,
        }
    }

    /// Mutable access by name, used by env overrides.
    pub fn get_mut_by_name(&mut self, name: &str) -> Option<&mut ProviderConfig> {
        match name {
            "openai" => Some(&mut self.openai),
            "gemini" => Some(&mut self.gemini),
            "openrouter" => Some(&mut self.openrouter),
            _ => None,
        }
    }

    /// Convert to a map keyed by provider name for the provider registry.
    pub fn to_map(&self) -> HashMap<String, ProviderConfig> {
        [
            ("openai", &self.openai),
            ("gemini", &self.gemini),
            ("openrouter", &self.openrouter),
        ]
        .into_iter()
        .map(|(name, config)| (name.to_string(), config.clone()))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.agents.defaults.provider, "openai");
        assert_eq!(config.agents.defaults.max_tool_iterations, 20);
        assert!(config.agents.defaults.model_override().is_none());
        assert!(!config.providers.openai.is_configured());
    }

    #[test]
    fn test_model_override_ignores_blank() {
        let mut defaults = AgentDefaults::default();
        defaults.model = "   ".into();
        assert!(defaults.model_override().is_none());
        defaults.model = "gpt-4o".into();
        assert_eq!(defaults.model_override(), Some("gpt-4o"));
    }

    #[test]
    fn test_get_by_name() {
        let mut providers = ProvidersConfig::default();
        providers.gemini.api_key = "g-key".into();

        assert!(providers.get_by_name("gemini").unwrap().is_configured());
        assert!(providers.get_by_name("anthropic").is_none());

        providers.get_mut_by_name("openai").unwrap().api_key = "sk".into();
        assert!(providers.openai.is_configured());
    }

    #[test]
    fn test_to_map_has_all_providers() {
        let map = ProvidersConfig::default().to_map();
        assert_eq!(map.len(), 3);
        assert!(map.contains_key("openrouter"));
    }

    #[test]
    fn test_camel_case_deserialization() {
        let config: Config = serde_json::from_str(
            r#"{"agents": {"defaults": {"maxToolIterations": 5, "provider": "gemini"}},
                "providers": {"gemini": {"apiKey": "abc", "apiBase": "http://localhost:1"}}}"#,
        )
        .unwrap();

        assert_eq!(config.agents.defaults.max_tool_iterations, 5);
        assert_eq!(config.agents.defaults.provider, "gemini");
        assert_eq!(config.agents.defaults.temperature, 0.7);
        assert_eq!(config.providers.gemini.api_base.as_deref(), Some("http://localhost:1"));
    }
}
