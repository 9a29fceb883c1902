//! LLM provider layer for Maestro.
//!
//! # Architecture
//!
//! - [`traits::LlmProvider`] — the model gateway every backend implements
//! - [`error::ProviderError`] — gateway-layer failures
//! - [`registry`] — static specs for the supported providers
//! - [`http_provider::HttpProvider`] — OpenAI-compatible HTTP client
//! - [`http_provider::create_provider`] — builder from provider name + config

pub mod error;
pub mod http_provider;
pub mod registry;
pub mod traits;

pub use error::ProviderError;
pub use http_provider::{create_provider, HttpProvider};
pub use registry::{ProviderSpec, PROVIDERS};
pub use traits::{LlmProvider, LlmRequestConfig};
