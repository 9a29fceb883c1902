//! Provider registry — static specs for the supported LLM backends.
//!
//! All three speak the OpenAI chat completions protocol, so a spec only
//! needs to say where to connect and which model to use by default.

/// Static specification describing one LLM provider.
#[derive(Clone, Debug)]
pub struct ProviderSpec {
    /// Internal name used in config (e.g. `"gemini"`).
    pub name: &'static str,
    /// Human-readable name for logs. E.g. `"Google Gemini"`.
    pub display_name: &'static str,
    /// Conventional environment variable for the API key.
    pub env_key: &'static str,
    /// API base URL used when the config doesn't set one.
    pub default_api_base: &'static str,
    /// Model used when the config doesn't name one.
    pub default_model: &'static str,
    /// Models known to work with tool calling, for `maestro status`.
    pub models: &'static [&'static str],
}

/// Supported providers, in display order.
pub static PROVIDERS: &[ProviderSpec] = &[
    ProviderSpec {
        name: "openai",
        display_name: "OpenAI",
        env_key: "OPENAI_API_KEY",
        default_api_base: "https://api.openai.com/v1",
        default_model: "gpt-4o-mini",
        models: &["gpt-4o-mini", "gpt-4o", "gpt-4-turbo", "gpt-3.5-turbo"],
    },
    ProviderSpec {
        name: "gemini",
        display_name: "Google Gemini",
        env_key: "GOOGLE_API_KEY",
        default_api_base: "https://generativelanguage.googleapis.com/v1beta/openai",
        default_model: "gemini-2.5-flash",
        models: &["gemini-2.5-flash", "gemini-1.5-pro", "gemini-2.0-flash"],
    },
    ProviderSpec {
        name: "openrouter",
        display_name: "OpenRouter",
        env_key: "OPENROUTER_API_KEY",
        default_api_base: "https://openrouter.ai/api/v1",
        default_model: "openai/gpt-4o-mini",
        models: &["openai/gpt-4o-mini", "google/gemini-2.5-flash", "anthropic/claude-3.5-haiku"],
    },
];

/// Find a provider spec by name (case-insensitive).
pub fn find_by_name(name: &str) -> Option<&'static ProviderSpec> {
    let name = name.trim().to_lowercase();
    PROVIDERS.iter().find(|spec| spec.name == name)
}

/// Names of all supported providers, for error messages.
pub fn provider_names() -> Vec<&'static str> {
    PROVIDERS.iter().map(|spec| spec.name).collect()
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
