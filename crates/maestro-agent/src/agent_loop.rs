//! Agent loop — drives one user turn to a final answer.
//!
//! ```text
//! user text ─▶ history
//!   loop (≤ max_iterations rounds):
//!     provider.complete(system + history, tools)
//!       FinalAnswer   ─▶ history, return
//!       ToolRequests  ─▶ invoke each in order, append request/result pairs
//! ```
//!
//! Tool failures become tool-result text. Provider failures and an
//! exhausted round budget end the turn with an error; the history keeps
//! everything committed up to that point.

use tracing::{debug, info, warn};

use maestro_core::types::{Decision, Message, ToolCallRequest};
use maestro_providers::ProviderError;

use crate::agent::Agent;
use crate::error::AgentError;
use crate::history::ConversationHistory;

impl Agent {
    /// Run one turn: append `user_text`, loop until the model answers.
    ///
    /// Fails with [`AgentError::Busy`] if this agent is already inside a turn
    /// (e.g. a delegation cycle back to itself).
    pub async fn run_turn(&self, user_text: &str) -> Result<String, AgentError> {
        let mut history = self.history.try_lock().map_err(|_| {
            warn!(agent = %self.name, "turn already in progress");
            AgentError::Busy(self.name.clone())
        })?;

        history.push(Message::user(user_text));
        let tool_defs = self.tools.describe();

        for round in 0..self.max_iterations {
            let messages = self.build_messages(&history);
            debug!(
                agent = %self.name,
                round = round,
                messages = messages.len(),
                tools = tool_defs.len(),
                "LLM call"
            );

            let decision = self
                .provider
                .complete(&messages, &tool_defs, &self.model, &self.request_config)
                .await
                .inspect_err(|e| warn!(agent = %self.name, round = round, error = %e, "LLM call failed"))?;

            match decision {
                Decision::FinalAnswer(text) => {
                    info!(agent = %self.name, rounds = round + 1, "turn complete");
                    history.push(Message::assistant(text.clone()));
                    return Ok(text);
                }
                Decision::ToolRequests(requests) if requests.is_empty() => {
                    return Err(ProviderError::Protocol("empty tool request batch".into()).into());
                }
                Decision::ToolRequests(requests) => {
                    let batch = self.execute_batch(round, &requests).await;
                    history.extend(batch);
                    debug_assert!(history.unresolved_call_ids().is_empty());
                }
            }
        }

        warn!(
            agent = %self.name,
            rounds = self.max_iterations,
            "tool-call budget exhausted"
        );
        Err(AgentError::LoopBudgetExceeded {
            agent: self.name.clone(),
            rounds: self.max_iterations,
        })
    }

    /// System prompt (if any) followed by the full history.
    fn build_messages(&self, history: &ConversationHistory) -> Vec<Message> {
        let mut messages = Vec::with_capacity(history.len() + 1);
        if !self.system_prompt.is_empty() {
            messages.push(Message::system(self.system_prompt.clone()));
        }
        messages.extend(history.iter().cloned());
        messages
    }

    /// Execute a batch sequentially, returning request/result pairs in order.
    ///
    /// Nothing is written to the history here. The caller appends the whole
    /// batch at once, so a turn cancelled mid-batch leaves no dangling request.
    async fn execute_batch(&self, round: usize, requests: &[ToolCallRequest]) -> Vec<Message> {
        let mut batch = Vec::with_capacity(requests.len() * 2);

        for request in requests {
            info!(
                agent = %self.name,
                tool = %request.name,
                round = round,
                call_id = %request.id,
                "executing tool call"
            );

            let content = match self.tools.invoke(&request.name, &request.arguments).await {
                Ok(output) => output,
                Err(e) => {
                    warn!(agent = %self.name, tool = %request.name, error = %e, "tool call failed");
                    format!("Error: {e}")
                }
            };

            batch.push(Message::tool_request(request));
            batch.push(Message::tool_result(request.id.clone(), content));
        }

        batch
    }
}
