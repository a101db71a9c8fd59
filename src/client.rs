use std::time::Duration;

use crate::credential::Credential;
use crate::error::MaasError;
use crate::models::chat::{ChatCompletionRequest, ChatCompletionResponse};
use crate::reshape::reshape_request;

/// Configuration for [`MaasClient`].
///
/// One struct with explicit optional fields instead of constructor
/// overloads: pick a credential, optionally bring your own transport,
/// optionally cap the request time.
#[derive(Debug, Clone)]
pub struct MaasClientConfig {
    /// Base URL of the deployment,
    /// e.g. "https://my-deployment.eastus2.models.ai.azure.com".
    pub endpoint: String,
    pub credential: Credential,
    /// Custom transport. When provided, timeouts and proxies are the
    /// caller's concern and `timeout` is ignored.
    pub http: Option<reqwest::Client>,
    /// Overall request timeout used when building the default transport.
    pub timeout: Option<Duration>,
}

/// Outbound connector for one MaaS chat-completion deployment.
///
/// Holds no mutable state; clone-free concurrent use through `&self` is fine
/// (the inner `reqwest::Client` is already shareable).
pub struct MaasClient {
    http: reqwest::Client,
    endpoint: String,
    credential: Credential,
}

impl MaasClient {
    pub fn new(config: MaasClientConfig) -> Result<Self, MaasError> {
        let http = match config.http {
            Some(client) => client,
            None => {
                let mut builder = reqwest::Client::builder()
                    .user_agent(concat!("chat2maas/", env!("CARGO_PKG_VERSION")));
                if let Some(timeout) = config.timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build()?
            }
        };
        Ok(Self {
            http,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            credential: config.credential,
        })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.endpoint)
    }

    /// Send one chat-completion request to the deployment.
    ///
    /// The caller-form request is reshaped into the provider form immediately
    /// before the send; the decoded response comes back unchanged. Non-2xx
    /// answers surface as [`MaasError::Upstream`] with the raw body attached.
    pub async fn chat(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, MaasError> {
        if let Some(max_tokens) = request.max_tokens {
            if max_tokens < 1 {
                return Err(MaasError::InvalidMaxTokens(max_tokens));
            }
        }

        let caller_form = serde_json::to_value(request).map_err(MaasError::Encode)?;
        let provider_form = reshape_request(&caller_form)?;

        let builder = self.http.post(self.completions_url()).json(&provider_form);
        let response = self.credential.apply(builder).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MaasError::Upstream { status, body });
        }

        let bytes = response.bytes().await?;
        let parsed: ChatCompletionResponse =
            serde_json::from_slice(&bytes).map_err(MaasError::Decode)?;
        capture_usage(&parsed);
        Ok(parsed)
    }
}

/// Log token accounting for the completed call.
fn capture_usage(response: &ChatCompletionResponse) {
    match &response.usage {
        Some(usage) => tracing::info!(
            prompt_tokens = usage.prompt_tokens,
            completion_tokens = usage.completion_tokens,
            total_tokens = usage.total_tokens,
            reasoning_tokens = usage.reasoning_tokens,
            "chat completion usage"
        ),
        None => tracing::debug!("usage information is not available"),
    }
}
