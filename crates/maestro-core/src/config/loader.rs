//! Config loader — reads `~/.maestro/config.json` and merges env vars.
//!
//! # Loading precedence
//! 1. Defaults (from `Config::default()`)
//! 2. JSON file at `~/.maestro/config.json`
//! 3. `.env` in the working directory, then the process environment:
//!    `MAESTRO_<SECTION>__<FIELD>` always wins; the conventional
//!    `LLM_PROVIDER` / `<VENDOR>_API_KEY` variables only fill gaps.

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::schema::Config;

/// Conventional API-key variables per provider.
const CONVENTIONAL_KEYS: &[(&str, &str)] = &[
    ("openai", "OPENAI_API_KEY"),
    ("gemini", "GOOGLE_API_KEY"),
    ("openrouter", "OPENROUTER_API_KEY"),
];

/// Default config file path.
pub fn get_config_path() -> PathBuf {
    crate::utils::get_data_path().join("config.json")
}

/// Load configuration from the default path (or `path`) + `.env` + env vars.
///
/// Falls back to `Config::default()` if the file doesn't exist or can't be parsed.
pub fn load_config(path: Option<&Path>) -> Config {
    match dotenvy::dotenv() {
        Ok(env_path) => debug!("Loaded environment from {}", env_path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => warn!("Failed to load .env file: {}", e),
    }

    let config_path = path.map(PathBuf::from).unwrap_or_else(get_config_path);
    apply_env_overrides(load_config_from_path(&config_path))
}

/// Load config from a specific file path, without env overrides.
fn load_config_from_path(path: &Path) -> Config {
    if !path.exists() {
        info!("No config file found at {}, using defaults", path.display());
        return Config::default();
    }

    debug!("Loading config from {}", path.display());

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to read config file {}: {}", path.display(), e);
            return Config::default();
        }
    };

    match serde_json::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to parse config {}: {}", path.display(), e);
            Config::default()
        }
    }
}

/// Save configuration to disk (pretty-printed JSON with camelCase keys).
pub fn save_config(config: &Config, path: Option<&Path>) -> std::io::Result<()> {
    let config_path = path.map(PathBuf::from).unwrap_or_else(get_config_path);

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(config).map_err(std::io::Error::other)?;

    std::fs::write(&config_path, json)?;
    debug!("Config saved to {}", config_path.display());
    Ok(())
}

/// Apply environment variable overrides from the process environment.
fn apply_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides read through `lookup`.
///
/// Supported variables:
/// - `MAESTRO_AGENTS__DEFAULTS__PROVIDER` / `LLM_PROVIDER` → `agents.defaults.provider`
/// - `MAESTRO_AGENTS__DEFAULTS__MODEL` → `agents.defaults.model`
/// - `MAESTRO_AGENTS__DEFAULTS__MAX_TOKENS` → `agents.defaults.max_tokens`
/// - `MAESTRO_AGENTS__DEFAULTS__TEMPERATURE` → `agents.defaults.temperature`
/// - `MAESTRO_AGENTS__DEFAULTS__MAX_TOOL_ITERATIONS` → `agents.defaults.max_tool_iterations`
/// - `MAESTRO_PROVIDERS__<NAME>__API_KEY` / `<VENDOR>_API_KEY` → `providers.<name>.api_key`
/// - `MAESTRO_PROVIDERS__<NAME>__API_BASE` → `providers.<name>.api_base`
fn apply_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = &mut config.agents.defaults;

    if let Some(val) = lookup("MAESTRO_AGENTS__DEFAULTS__PROVIDER").or_else(|| lookup("LLM_PROVIDER")) {
        defaults.provider = val.trim().to_lowercase();
    }
    if let Some(val) = lookup("MAESTRO_AGENTS__DEFAULTS__MODEL") {
        defaults.model = val;
    }
    if let Some(n) = lookup("MAESTRO_AGENTS__DEFAULTS__MAX_TOKENS").and_then(|v| v.parse().ok()) {
        defaults.max_tokens = n;
    }
    if let Some(t) = lookup("MAESTRO_AGENTS__DEFAULTS__TEMPERATURE").and_then(|v| v.parse().ok()) {
        defaults.temperature = t;
    }
    if let Some(n) = lookup("MAESTRO_AGENTS__DEFAULTS__MAX_TOOL_ITERATIONS").and_then(|v| v.parse().ok()) {
        defaults.max_tool_iterations = n;
    }

    for (name, conventional) in CONVENTIONAL_KEYS {
        let Some(provider) = config.providers.get_mut_by_name(name) else {
            continue;
        };
        let upper = name.to_uppercase();

        if let Some(val) = lookup(&format!("MAESTRO_PROVIDERS__{upper}__API_KEY")) {
            provider.api_key = val;
        } else if !provider.is_configured() {
            if let Some(val) = lookup(conventional) {
                provider.api_key = val;
            }
        }
        if let Some(val) = lookup(&format!("MAESTRO_PROVIDERS__{upper}__API_BASE")) {
            provider.api_base = Some(val);
        }
    }

    config
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
