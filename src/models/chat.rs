use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Chat Completions role enumeration.
///
/// Uses lowercase serialization to match the OpenAI Chat API:
/// "system" | "user" | "assistant" | "tool"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
    Tool,
}

/// Minimal Chat message model compatible with the Chat Completions API.
///
/// Notes:
/// - `content` may be a string or an array of message parts; we accept `serde_json::Value`
///   to allow both shapes (and future-proof for multimodal content).
/// - `name` and `tool_call_id` may appear on assistant or tool messages. MaaS reasoning
///   deployments accept neither, so the reshaper never forwards them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    /// Chat API allows a string or an array of content parts (for multimodal).
    pub content: serde_json::Value,
    /// Optional name for function/tool messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Optional tool call identifier (tool result correlation).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

/// JSON Schema for a function tool definition in Chat Completions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[skip_serializing_none]
pub struct FunctionDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// JSON Schema object describing the function parameters.
    pub parameters: serde_json::Value,
}

/// Chat Completions tool definition (subset).
///
/// Example:
/// {
///   "type": "function",
///   "function": { "name": "...", "description": "...", "parameters": { ... } }
/// }
///
/// Accepted on the caller side so payloads deserialize cleanly, then dropped by
/// the reshaper: MaaS reasoning deployments reject tool invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToolDefinition {
    Function { function: FunctionDef },
}

/// Chat Completions request (commonly used subset).
///
/// This is the caller form: what the orchestration layer sends. Only a subset
/// of these fields survives reshaping into the provider form; see
/// `crate::reshape` for the exact field policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    /// Deployment/model identifier. Optional: MaaS deployments are
    /// single-model endpoints, so callers may omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    pub messages: Vec<ChatMessage>,

    // Sampling / decoding
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Accepts a single string or an array of strings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n: Option<u32>,

    // Tools
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<ToolDefinition>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<serde_json::Value>,

    // Streaming (not supported by reasoning deployments; never forwarded)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
}

// ============================================================================
// Chat Completions Response Models
// ============================================================================

/// Message in a Chat Completions response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[skip_serializing_none]
pub struct ChatResponseMessage {
    pub role: String, // "assistant"
    #[serde(default)]
    pub content: Option<String>,
}

/// Choice in a Chat Completions response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[skip_serializing_none]
pub struct ChatChoice {
    pub index: u32,
    pub message: ChatResponseMessage,
    pub finish_reason: Option<String>, // "stop", "length", "content_filter"
}

/// Usage statistics in a Chat Completions response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[skip_serializing_none]
pub struct ChatUsage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub total_tokens: u64,

    /// Reasoning tokens reported by reasoning deployments (subset of
    /// completion_tokens). Absent everywhere else.
    #[serde(default)]
    pub reasoning_tokens: Option<u64>,
}

/// Complete Chat Completions API response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[skip_serializing_none]
pub struct ChatCompletionResponse {
    pub id: String,
    pub object: String, // "chat.completion"
    pub created: u64,
    pub model: String,
    pub choices: Vec<ChatChoice>,
    pub usage: Option<ChatUsage>,
}
