//! Core types for Maestro — conversation messages, tool calls, and model decisions.
//!
//! Messages follow the OpenAI chat completions format so that any
//! OpenAI-compatible backend can consume a history without translation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ─────────────────────────────────────────────
// Messages (OpenAI chat completions format)
// ─────────────────────────────────────────────

/// A chat message in the OpenAI format.
///
/// Conversation histories only ever hold `User`, `Assistant` and `Tool`
/// entries; `System` is prepended per request from the agent's role prompt.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "role")]
pub enum Message {
    #[serde(rename = "system")]
    System { content: String },

    #[serde(rename = "user")]
    User { content: String },

    #[serde(rename = "assistant")]
    Assistant {
        #[serde(skip_serializing_if = "Option::is_none")]
        content: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        tool_calls: Option<Vec<ToolCall>>,
    },

    #[serde(rename = "tool")]
    Tool {
        content: String,
        tool_call_id: String,
    },
}

impl Message {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Message::System {
            content: content.into(),
        }
    }

    /// Create a user utterance.
    pub fn user(content: impl Into<String>) -> Self {
        Message::User {
            content: content.into(),
        }
    }

    /// Create an assistant message with final text.
    pub fn assistant(content: impl Into<String>) -> Self {
        Message::Assistant {
            content: Some(content.into()),
            tool_calls: None,
        }
    }

    /// Create an assistant message carrying a single tool request.
    pub fn tool_request(request: &ToolCallRequest) -> Self {
        Message::Assistant {
            content: None,
            tool_calls: Some(vec![request.to_tool_call()]),
        }
    }

    /// Create a tool result message.
    pub fn tool_result(tool_call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Message::Tool {
            content: content.into(),
            tool_call_id: tool_call_id.into(),
        }
    }

    /// Call IDs requested by this message (empty unless it is a tool request).
    pub fn requested_call_ids(&self) -> Vec<&str> {
        match self {
            Message::Assistant {
                tool_calls: Some(calls),
                ..
            } => calls.iter().map(|c| c.id.as_str()).collect(),
            _ => Vec::new(),
        }
    }

    /// Whether this is an assistant message requesting tools.
    pub fn is_tool_request(&self) -> bool {
        !self.requested_call_ids().is_empty()
    }

    /// Short role label, mostly for logs and the CLI.
    pub fn role(&self) -> &'static str {
        match self {
            Message::System { .. } => "system",
            Message::User { .. } => "user",
            Message::Assistant { .. } => "assistant",
            Message::Tool { .. } => "tool",
        }
    }

    /// Text content of the message, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Message::System { content } | Message::User { content } => Some(content.as_str()),
            Message::Tool { content, .. } => Some(content.as_str()),
            Message::Assistant { content, .. } => content.as_deref(),
        }
    }
}

// ─────────────────────────────────────────────
// Tool Calls (wire format)
// ─────────────────────────────────────────────

/// A tool call as it appears on the wire, inside an assistant message.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ToolCall {
    /// ID used to match the tool result.
    #[serde(default)]
    pub id: String,
    /// Always "function" in current OpenAI API.
    #[serde(rename = "type", default = "function_type")]
    pub call_type: String,
    /// The function to call.
    pub function: FunctionCall,
}

fn function_type() -> String {
    "function".to_string()
}

impl ToolCall {
    /// Create a new tool call.
    pub fn new(id: impl Into<String>, name: impl Into<String>, arguments: impl Into<String>) -> Self {
        ToolCall {
            id: id.into(),
            call_type: function_type(),
            function: FunctionCall {
                name: name.into(),
                arguments: arguments.into(),
            },
        }
    }
}

/// The function name and arguments within a tool call.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FunctionCall {
    /// Name of the function/tool to call.
    pub name: String,
    /// JSON-encoded arguments string.
    #[serde(default)]
    pub arguments: String,
}

// ─────────────────────────────────────────────
// Tool call requests (decoded)
// ─────────────────────────────────────────────

/// A decoded tool invocation requested by the model.
///
/// `arguments` is the parsed JSON object. When the backend sent arguments
/// that are not valid JSON, the raw text is kept as a `Value::String` so the
/// registry can reject it and the model gets a chance to retry.
#[derive(Clone, Debug, PartialEq)]
pub struct ToolCallRequest {
    pub id: String,
    pub name: String,
    pub arguments: Value,
}

impl ToolCallRequest {
    pub fn new(id: impl Into<String>, name: impl Into<String>, arguments: Value) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            arguments,
        }
    }

    /// Decode a wire tool call. Empty argument strings decode to `{}`.
    pub fn from_tool_call(call: &ToolCall) -> Self {
        let raw = call.function.arguments.trim();
        let arguments = if raw.is_empty() {
            Value::Object(Default::default())
        } else {
            serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
        };
        Self::new(call.id.clone(), call.function.name.clone(), arguments)
    }

    /// Encode back to the wire format stored in histories.
    pub fn to_tool_call(&self) -> ToolCall {
        let arguments = match &self.arguments {
            Value::String(raw) => raw.clone(),
            other => other.to_string(),
        };
        ToolCall::new(self.id.clone(), self.name.clone(), arguments)
    }
}

// ─────────────────────────────────────────────
// Decisions
// ─────────────────────────────────────────────

/// What the model decided to do with a history.
#[derive(Clone, Debug, PartialEq)]
pub enum Decision {
    /// The turn is over; this is the answer.
    FinalAnswer(String),
    /// Run these tools (in order) and ask again.
    ToolRequests(Vec<ToolCallRequest>),
}

// ─────────────────────────────────────────────
// Tool Definitions (for LLM requests)
// ─────────────────────────────────────────────

/// Definition of a tool, sent to the LLM so it knows what tools are available.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ToolDefinition {
    /// Always "function".
    #[serde(rename = "type")]
    pub tool_type: String,
    /// The function schema.
    pub function: FunctionDefinition,
}

/// Schema of a function tool.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FunctionDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

impl ToolDefinition {
    /// Create a new tool definition.
    pub fn new(name: impl Into<String>, description: impl Into<String>, parameters: Value) -> Self {
        ToolDefinition {
            tool_type: function_type(),
            function: FunctionDefinition {
                name: name.into(),
                description: description.into(),
                parameters,
            },
        }
    }
}

// ─────────────────────────────────────────────
// Provider wire types
// ─────────────────────────────────────────────

/// Token usage statistics from the LLM.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UsageInfo {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Raw chat completion response from an OpenAI-compatible API.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub id: Option<String>,
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
    pub usage: Option<UsageInfo>,
}

/// A single choice in a chat completion response.
#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: AssistantMessage,
    pub finish_reason: Option<String>,
}

/// The assistant message within a chat completion choice.
#[derive(Debug, Deserialize)]
pub struct AssistantMessage {
    pub content: Option<String>,
    #[serde(default)]
    pub tool_calls: Option<Vec<ToolCall>>,
    /// Set by OpenAI when the model declines to answer.
    #[serde(default)]
    pub refusal: Option<String>,
}

/// Request body for an OpenAI-compatible chat completion API.
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<ToolDefinition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
