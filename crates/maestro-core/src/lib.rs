//! Maestro Core — shared types, configuration, and utilities.
//!
//! - **types**: chat messages, tool calls/definitions, model decisions
//! - **config**: JSON config schema, loader, env overrides
//! - **utils**: data paths and small string helpers

pub mod config;
pub mod types;
pub mod utils;
