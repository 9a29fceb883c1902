//! Error types for tools, registries, and agent turns.

use maestro_providers::ProviderError;
use thiserror::Error;

/// Failure of a single tool invocation.
///
/// The agent loop never propagates these: they become the text of a
/// tool-result message so the model can react to them.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ToolError {
    #[error("unknown tool '{0}'")]
    UnknownTool(String),

    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("unknown expert '{0}'")]
    UnknownExpert(String),

    #[error("{0}")]
    Failed(String),
}

/// Registration-time failures.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RegistryError {
    #[error("tool '{0}' is already registered")]
    DuplicateName(String),

    #[error("expert '{0}' is already in the roster")]
    DuplicateExpert(String),
}

/// Failure of a whole agent turn.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("agent '{agent}' gave no final answer within {rounds} tool rounds")]
    LoopBudgetExceeded { agent: String, rounds: usize },

    #[error("agent '{0}' is already handling a turn")]
    Busy(String),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}
