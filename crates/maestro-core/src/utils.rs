//! Utility helpers — data paths and string manipulation.

use std::path::PathBuf;

/// Get the Maestro data directory (e.g. `~/.maestro/`).
pub fn get_data_path() -> PathBuf {
    let home = dirs_next::home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(".maestro")
}

/// Get the REPL history file path (e.g. `~/.maestro/history/cli_history`).
pub fn get_history_path() -> PathBuf {
    get_data_path().join("history").join("cli_history")
}

/// Truncate a string to `max_len` characters, adding "..." if truncated.
/// Unicode-safe.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string() {
        assert_eq!(truncate_string("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate_string("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_unicode() {
        let s = "🍝🍝🍝🍝🍝🍝";
        assert_eq!(truncate_string(s, 5), "🍝🍝...");
    }

    #[test]
    fn test_data_paths() {
        let data = get_data_path();
        assert!(data.ends_with(".maestro"));
        assert!(get_history_path().starts_with(&data));
    }
}
