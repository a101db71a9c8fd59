use http::StatusCode;
use thiserror::Error;

/// Malformed-request conditions raised by the reshaper.
///
/// Every variant means the inbound body could not be reshaped at all; the
/// reshaper never emits a partial provider-form payload.
#[derive(Error, Debug)]
pub enum ReshapeError {
    #[error("request body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("request body must be a JSON object")]
    NotAnObject,
    #[error("request body is missing a `messages` array")]
    MissingMessages,
}

/// Errors surfaced by the outbound MaaS connector.
#[derive(Error, Debug)]
pub enum MaasError {
    #[error(transparent)]
    Reshape(#[from] ReshapeError),

    /// Mirrors the deployment-side constraint; rejected locally before send.
    #[error("max_tokens {0} is not valid, the value must be greater than zero")]
    InvalidMaxTokens(u32),

    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to decode upstream response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx upstream answer, with the raw body preserved for diagnostics.
    #[error("upstream returned {status}: {body}")]
    Upstream { status: StatusCode, body: String },
}
