//! Maestro Agent — tool-calling loop, tools, experts, and the orchestrator.
//!
//! This crate contains:
//! - **tools**: Tool trait, argument validation, registry, and built-in tools
//! - **history**: append-only per-agent conversation history
//! - **agent** / **agent_loop**: an agent and the bounded LLM ↔ tool loop that drives one turn
//! - **roster** / **experts**: the fixed set of expert agents
//! - **orchestrator**: the top-level agent whose only tool is `delegate`

pub mod agent;
pub mod agent_loop;
pub mod error;
pub mod experts;
pub mod history;
pub mod orchestrator;
pub mod roster;
pub mod tools;

#[cfg(test)]
pub(crate) mod test_support;

pub use agent::{Agent, AgentSettings};
pub use error::{AgentError, RegistryError, ToolError};
pub use history::ConversationHistory;
pub use orchestrator::Orchestrator;
pub use roster::Roster;
pub use tools::{Tool, ToolRegistry};
