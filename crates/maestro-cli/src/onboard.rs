//! `maestro onboard` — create `~/.maestro/config.json` with defaults.

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use maestro_core::config::{get_config_path, save_config, Config};
use maestro_core::utils::get_history_path;
use maestro_providers::PROVIDERS;

/// Run the onboard command.
pub fn run() -> Result<()> {
    println!();
    println!("{}", "🎼 Maestro — Setup".cyan().bold());
    println!();

    let config_path = get_config_path();
    if write_default_config(&config_path)? {
        println!("  {} created config at {}", "✓".green(), config_path.display());
    } else {
        println!("  {} config already exists at {}", "✓".green(), config_path.display());
    }

    if let Some(history_dir) = get_history_path().parent() {
        std::fs::create_dir_all(history_dir)
            .with_context(|| format!("failed to create {}", history_dir.display()))?;
    }

    println!();
    println!("  Add an API key to the config, or export one of:");
    for spec in PROVIDERS {
        println!("    {:<20} {}", spec.env_key, spec.display_name.dimmed());
    }
    println!("  and pick the backend with {} (default: openai).", "LLM_PROVIDER".bold());
    println!();
    println!("{}", "  Setup complete! Run `maestro chat` to start.".green());
    println!();

    Ok(())
}

/// Write a default config unless one exists. Returns whether a file was written.
fn write_default_config(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    save_config(&Config::default(), Some(path))
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(true)
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_default_config_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("maestro").join("config.json");

        assert!(write_default_config(&path).unwrap());
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("maxToolIterations"));

        std::fs::write(&path, "{\"agents\": {}}").unwrap();
        assert!(!write_default_config(&path).unwrap());
        // Existing config is NOT overwritten.
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{\"agents\": {}}");
    }
}
