//! Gateway-layer errors.

use thiserror::Error;

/// Why a model call did not produce a usable decision.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProviderError {
    /// Transport failure or a non-success HTTP status.
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    /// The model declined the request on policy grounds.
    #[error("model refused the request: {0}")]
    Refusal(String),

    /// The backend answered with something that is neither text nor tool calls.
    #[error("backend protocol error: {0}")]
    Protocol(String),

    /// The provider could not be constructed (unknown name, missing key).
    #[error("provider configuration error: {0}")]
    Config(String),
}
