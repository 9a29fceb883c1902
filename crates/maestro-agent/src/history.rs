//! Conversation history — the append-only message log owned by one agent.

use serde::Serialize;

use maestro_core::types::Message;

/// Ordered, append-only list of messages.
///
/// Only the agent loop appends (crate-private), so a history handed out to
/// callers can be read and exported but never rewritten.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ConversationHistory {
    messages: Vec<Message>,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub(crate) fn extend(&mut self, messages: impl IntoIterator<Item = Message>) {
        self.messages.extend(messages);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Call ids that were requested but have no tool result after them.
    pub fn unresolved_call_ids(&self) -> Vec<&str> {
        let mut pending: Vec<&str> = Vec::new();
        for message in &self.messages {
            match message {
                Message::Tool { tool_call_id, .. } => {
                    pending.retain(|id| *id != tool_call_id.as_str());
                }
                Message::User { .. } if !pending.is_empty() => break,
                other => pending.extend(other.requested_call_ids()),
            }
        }
        pending
    }

    /// Pretty-printed JSON export in the OpenAI message format.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maestro_core::types::ToolCallRequest;
    use serde_json::json;

    fn request(id: &str) -> ToolCallRequest {
        ToolCallRequest::new(id, "current_time", json!({}))
    }

    #[test]
    fn test_append_only_accessors() {
        let mut history = ConversationHistory::new();
        assert!(history.is_empty());

        history.push(Message::user("hi"));
        history.extend([Message::assistant("hello")]);

        assert_eq!(history.len(), 2);
        assert_eq!(history.last().and_then(Message::text), Some("hello"));
        assert_eq!(history.iter().map(Message::role).collect::<Vec<_>>(), vec!["user", "assistant"]);
    }

    #[test]
    fn test_unresolved_call_ids() {
        let mut history = ConversationHistory::new();
        history.push(Message::user("what time is it?"));
        history.push(Message::tool_request(&request("call_1")));
        assert_eq!(history.unresolved_call_ids(), vec!["call_1"]);

        history.push(Message::tool_result("call_1", "2026-10-19 09:30:00"));
        history.push(Message::assistant("It is 09:30."));
        assert!(history.unresolved_call_ids().is_empty());
    }

    #[test]
    fn test_dangling_request_before_next_user_is_reported() {
        let mut history = ConversationHistory::new();
        history.push(Message::user("a"));
        history.push(Message::tool_request(&request("call_9")));
        history.push(Message::user("b"));
        assert_eq!(history.unresolved_call_ids(), vec!["call_9"]);
    }

    #[test]
    fn test_json_export() {
        let mut history = ConversationHistory::new();
        history.push(Message::user("hi"));
        history.push(Message::tool_request(&request("call_1")));

        let exported: serde_json::Value = serde_json::from_str(&history.to_json().unwrap()).unwrap();
        assert_eq!(exported[0]["role"], "user");
        assert_eq!(exported[1]["tool_calls"][0]["id"], "call_1");
        assert_eq!(exported[1]["tool_calls"][0]["function"]["arguments"], "{}");
    }
}
