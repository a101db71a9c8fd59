//! Data models for the Chat Completions wire formats.
//!
//! The `chat` submodule holds the caller-form request types (the commonly
//! used subset of the OpenAI Chat Completions request) and the response
//! types returned by MaaS deployments.
//!
//! There is deliberately no typed provider-form request model: the provider
//! form only exists as `serde_json::Value` produced by `crate::reshape`, so
//! the field policy lives in exactly one place.

pub mod chat;

// Optional convenience re-exports for downstream users.
pub use chat::{
    ChatChoice, ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ChatResponseMessage,
    ChatUsage, FunctionDef, Role, ToolDefinition,
};
