//! Generic HTTP-based LLM provider for OpenAI-compatible APIs.
//!
//! Talks directly to any `/chat/completions` endpoint and turns the reply
//! into a [`Decision`]. Covers OpenAI, Gemini (compatibility endpoint) and
//! OpenRouter.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tracing::{debug, error, warn};

use maestro_core::config::ProviderConfig;
use maestro_core::types::{
    ChatCompletionRequest, ChatCompletionResponse, Decision, Message, ToolCallRequest,
    ToolDefinition,
};

use crate::error::ProviderError;
use crate::registry::{find_by_name, provider_names, ProviderSpec};
use crate::traits::{LlmProvider, LlmRequestConfig};

/// Error-body markers some backends use for policy rejections.
const POLICY_MARKERS: &[&str] = &["content_policy", "content_filter", "safety", "responsible_ai"];

// ─────────────────────────────────────────────
// HttpProvider
// ─────────────────────────────────────────────

/// A generic LLM provider that talks to any OpenAI-compatible HTTP API.
pub struct HttpProvider {
    /// HTTP client (shared, connection-pooled).
    client: reqwest::Client,
    /// API base URL (e.g. `"https://api.openai.com/v1"`).
    api_base: String,
    /// API key for Bearer authentication.
    api_key: String,
    /// Default model for this provider instance.
    default_model: String,
    spec: &'static ProviderSpec,
}

impl std::fmt::Debug for HttpProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpProvider")
            .field("api_base", &self.api_base)
            .field("default_model", &self.default_model)
            .field("provider", &self.spec.display_name)
            .finish()
    }
}

impl HttpProvider {
    /// Create a new HttpProvider from a provider config and spec.
    ///
    /// The API base resolves as config > spec default.
    pub fn new(
        config: &ProviderConfig,
        spec: &'static ProviderSpec,
        model: &str,
    ) -> Result<Self, ProviderError> {
        let api_base = config
            .api_base
            .clone()
            .unwrap_or_else(|| spec.default_api_base.to_string());

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .map_err(|e| ProviderError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(HttpProvider {
            client,
            api_base,
            api_key: config.api_key.clone(),
            default_model: model.to_string(),
            spec,
        })
    }

    /// Build the full chat completions URL.
    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_base.trim_end_matches('/'))
    }
}

#[async_trait]
impl LlmProvider for HttpProvider {
    async fn complete(
        &self,
        messages: &[Message],
        tools: &[ToolDefinition],
        model: &str,
        config: &LlmRequestConfig,
    ) -> Result<Decision, ProviderError> {
        debug!(
            provider = self.spec.display_name,
            model = %model,
            messages = messages.len(),
            tools = tools.len(),
            "Calling LLM"
        );

        let advertised = (!tools.is_empty()).then(|| tools.to_vec());
        let request_body = ChatCompletionRequest {
            model: model.to_string(),
            messages: messages.to_vec(),
            tool_choice: advertised.as_ref().map(|_| "auto".to_string()),
            tools: advertised,
            max_tokens: Some(config.max_tokens),
            temperature: Some(config.temperature),
        };

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                error!(provider = self.spec.display_name, error = %e, "HTTP request failed");
                ProviderError::Unavailable(format!("error calling {}: {e}", self.spec.display_name))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read error body".to_string());
            error!(
                provider = self.spec.display_name,
                status = %status,
                body = %body,
                "API error"
            );
            return Err(if is_policy_violation(&body) {
                ProviderError::Refusal(format!("{status} — {body}"))
            } else {
                ProviderError::Unavailable(format!("{status} — {body}"))
            });
        }

        let completion = response.json::<ChatCompletionResponse>().await.map_err(|e| {
            error!(provider = self.spec.display_name, error = %e, "Failed to parse LLM response");
            ProviderError::Protocol(format!("unparseable response: {e}"))
        })?;

        if let Some(usage) = &completion.usage {
            debug!(
                provider = self.spec.display_name,
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "token usage"
            );
        }

        into_decision(completion)
    }

    fn default_model(&self) -> &str {
        &self.default_model
    }

    fn display_name(&self) -> &str {
        self.spec.display_name
    }
}

/// Map a completion to a decision.
///
/// Tool calls win over text. A reply with neither is a protocol error.
fn into_decision(completion: ChatCompletionResponse) -> Result<Decision, ProviderError> {
    let choice = completion
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::Protocol("no choices in response".into()))?;

    let message = choice.message;

    if let Some(refusal) = message.refusal.filter(|r| !r.trim().is_empty()) {
        return Err(ProviderError::Refusal(refusal));
    }
    if choice.finish_reason.as_deref() == Some("content_filter") {
        return Err(ProviderError::Refusal(
            message
                .content
                .unwrap_or_else(|| "response blocked by content filter".into()),
        ));
    }

    let calls = message.tool_calls.unwrap_or_default();
    if !calls.is_empty() {
        if message.content.as_deref().is_some_and(|c| !c.trim().is_empty()) {
            debug!("dropping assistant text that accompanied tool calls");
        }

        let mut seen = HashSet::new();
        let mut counter = 0usize;
        let mut requests = Vec::with_capacity(calls.len());
        for call in &calls {
            let mut request = ToolCallRequest::from_tool_call(call);
            if request.id.is_empty() || seen.contains(&request.id) {
                let id = loop {
                    counter += 1;
                    let candidate = format!("call_{counter}");
                    if !seen.contains(&candidate) {
                        break candidate;
                    }
                };
                warn!(tool = %request.name, id = %id, "assigned missing or duplicate call id");
                request.id = id;
            }
            seen.insert(request.id.clone());
            requests.push(request);
        }
        return Ok(Decision::ToolRequests(requests));
    }

    message
        .content
        .filter(|content| !content.trim().is_empty())
        .map(Decision::FinalAnswer)
        .ok_or_else(|| ProviderError::Protocol("response had neither content nor tool calls".into()))
}

fn is_policy_violation(body: &str) -> bool {
    let lower = body.to_lowercase();
    POLICY_MARKERS.iter().any(|marker| lower.contains(marker))
}

// ─────────────────────────────────────────────
// Builder (convenience)
// ─────────────────────────────────────────────

/// Build an HttpProvider from a provider name and a map of provider configs.
///
/// `model` overrides the provider's default model.
pub fn create_provider(
    name: &str,
    providers: &HashMap<String, ProviderConfig>,
    model: Option<&str>,
) -> Result<HttpProvider, ProviderError> {
    let spec = find_by_name(name).ok_or_else(|| {
        ProviderError::Config(format!(
            "provider '{name}' is not supported. Options: {}",
            provider_names().join(", ")
        ))
    })?;

    let config = providers
        .get(spec.name)
        .filter(|c| c.is_configured())
        .ok_or_else(|| {
            ProviderError::Config(format!(
                "no API key configured for {}. Set {} (or providers.{}.apiKey in config.json)",
                spec.display_name, spec.env_key, spec.name
            ))
        })?;

    let model = model.unwrap_or(spec.default_model);

    debug!(
        provider = spec.display_name,
        model = model,
        api_base = config.api_base.as_deref().unwrap_or(spec.default_api_base),
        "Creating LLM provider"
    );

    HttpProvider::new(config, spec, model)
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
