#![forbid(unsafe_code)]
#![doc = r#"
Chat2MaaS

Reshape OpenAI Chat Completions requests into the dialect accepted by Azure AI
Studio serverless (MaaS) reasoning deployments, and proxy them there.

These deployments speak almost-Chat-Completions with a narrower vocabulary:
no `system` role, no tool invocation, a fixed sampling temperature, and
`max_completion_tokens` in place of `max_tokens`. The reshaper rewrites an
outbound body into that dialect; everything a deployment cannot honor is
dropped rather than rejected (see `reshape` docs for the exact field policy
and the capability-mismatch warnings).

Crate highlights
- Library: pure reshaping via `reshape_request(&serde_json::Value)`.
- Client: `MaasClient` sends reshaped requests with api-key or bearer auth.
- HTTP server (in `server`): `/convert` and `/proxy` (proxy forwards to
  `MAAS_ENDPOINT`).

Modules
- `models`: Data structures for Chat Completions requests and responses.
- `reshape`: Caller-form to provider-form mapping logic.
- `client`: Outbound connector for one deployment.
- `credential`: api-key / bearer header selection.
- `error`: Error taxonomy (`ReshapeError`, `MaasError`).
- `server`: Axum router/handlers (optional binary uses this).
- `util`: Shared helpers (tracing, env, HTTP client construction).
"#]

pub mod client;
pub mod credential;
pub mod error;
pub mod models;
pub mod reshape;
pub mod server;
pub mod util;

// Re-export the primary reshaping entry points for ergonomic library use.
pub use crate::reshape::{reshape_body, reshape_request, FORCED_TEMPERATURE};

pub use crate::client::{MaasClient, MaasClientConfig};
pub use crate::credential::Credential;
pub use crate::error::{MaasError, ReshapeError};

// Re-export the model namespace for convenience (downstream users can do `use chat2maas::chat`).
pub use crate::models::chat;
