//! Scripted model gateway for loop and delegation tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use maestro_core::types::{Decision, Message, ToolCallRequest, ToolDefinition};
use maestro_providers::{LlmProvider, LlmRequestConfig, ProviderError};

type Responder = Box<dyn Fn(&[Message], usize) -> Result<Decision, ProviderError> + Send + Sync>;

/// A provider whose answers come from a script or a closure.
///
/// Every call is recorded so tests can inspect what the model was shown.
pub(crate) struct ScriptedProvider {
    responder: Responder,
    calls: Mutex<Vec<Vec<Message>>>,
    advertised: Mutex<Vec<Vec<String>>>,
}

impl ScriptedProvider {
    /// Answer with each decision in turn, then fail with a protocol error.
    pub(crate) fn scripted(decisions: Vec<Decision>) -> Self {
        Self::with_results(decisions.into_iter().map(Ok).collect())
    }

    /// Like `scripted`, but individual calls may fail.
    pub(crate) fn with_results(results: Vec<Result<Decision, ProviderError>>) -> Self {
        let queue = Mutex::new(VecDeque::from(results));
        Self::from_fn(move |_, _| {
            queue
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(ProviderError::Protocol("script exhausted".into())))
        })
    }

    /// Always answer with the same decision.
    pub(crate) fn repeating(decision: Decision) -> Self {
        Self::from_fn(move |_, _| Ok(decision.clone()))
    }

    /// Decide from the messages and the zero-based call index.
    pub(crate) fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&[Message], usize) -> Result<Decision, ProviderError> + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(f),
            calls: Mutex::new(Vec::new()),
            advertised: Mutex::new(Vec::new()),
        }
    }

    /// Messages sent on each call, in call order.
    pub(crate) fn calls(&self) -> Vec<Vec<Message>> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Tool names advertised on each call.
    pub(crate) fn advertised(&self) -> Vec<Vec<String>> {
        self.advertised.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    async fn complete(
        &self,
        messages: &[Message],
        tools: &[ToolDefinition],
        _model: &str,
        _config: &LlmRequestConfig,
    ) -> Result<Decision, ProviderError> {
        let index = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(messages.to_vec());
            calls.len() - 1
        };
        self.advertised
            .lock()
            .unwrap()
            .push(tools.iter().map(|t| t.function.name.clone()).collect());
        (self.responder)(messages, index)
    }

    fn default_model(&self) -> &str {
        "scripted-model"
    }

    fn display_name(&self) -> &str {
        "Scripted"
    }
}

pub(crate) fn final_answer(text: &str) -> Decision {
    Decision::FinalAnswer(text.to_string())
}

pub(crate) fn tool_call(id: &str, name: &str, arguments: Value) -> Decision {
    Decision::ToolRequests(vec![ToolCallRequest::new(id, name, arguments)])
}

/// Text of the system message a call started with.
pub(crate) fn system_prompt_of(messages: &[Message]) -> Option<&str> {
    match messages.first() {
        Some(Message::System { content }) => Some(content.as_str()),
        _ => None,
    }
}
