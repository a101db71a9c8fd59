use axum::response::{IntoResponse, Response};
use http::StatusCode;
use tracing_subscriber::{fmt, EnvFilter};

use crate::credential::Credential;

/// Initialize dotenv and structured tracing based on RUST_LOG.
pub fn init_tracing() {
    let env_source = if dotenvy::dotenv().is_ok() { ".env" } else { "none" };

    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=info".into());
    let subscriber = fmt().with_env_filter(EnvFilter::new(filter)).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    tracing::info!("Environment loaded from: {}", env_source);
}

/// Get the bind address for the HTTP server from env or default to 0.0.0.0:8098.
pub fn env_bind_addr() -> String {
    std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8098".into())
}

/// Shared application state used by the HTTP server and handlers.
pub struct AppState {
    pub http: reqwest::Client,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            http: build_http_client_from_env(),
        }
    }
}

/// Build an HTTP client honoring proxy and timeout environment variables.
///
/// Environment:
/// - CHAT2MAAS_NO_PROXY = 1|true|yes|on  -> disable all proxies
/// - CHAT2MAAS_PROXY_URL = <url>         -> proxy for all schemes
/// - HTTP_PROXY / HTTPS_PROXY            -> scheme-specific proxies
/// - CHAT2MAAS_HTTP_TIMEOUT_SECONDS      -> overall request timeout (u64)
pub fn build_http_client_from_env() -> reqwest::Client {
    let mut builder = reqwest::Client::builder();

    if let Ok(secs) = std::env::var("CHAT2MAAS_HTTP_TIMEOUT_SECONDS") {
        if let Ok(n) = secs.trim().parse::<u64>() {
            builder = builder.timeout(std::time::Duration::from_secs(n));
        }
    }

    let no_proxy = std::env::var("CHAT2MAAS_NO_PROXY")
        .map(|v| v.trim().to_ascii_lowercase())
        .map(|v| v == "1" || v == "true" || v == "yes" || v == "on")
        .unwrap_or(false);

    if no_proxy {
        builder = builder.no_proxy();
    } else {
        if let Ok(url) = std::env::var("CHAT2MAAS_PROXY_URL") {
            let u = url.trim();
            if !u.is_empty() {
                if let Ok(p) = reqwest::Proxy::all(u) {
                    builder = builder.proxy(p);
                }
            }
        }
        if let Ok(http_p) = std::env::var("HTTP_PROXY").or_else(|_| std::env::var("http_proxy")) {
            let u = http_p.trim();
            if !u.is_empty() {
                if let Ok(p) = reqwest::Proxy::http(u) {
                    builder = builder.proxy(p);
                }
            }
        }
        if let Ok(https_p) = std::env::var("HTTPS_PROXY").or_else(|_| std::env::var("https_proxy"))
        {
            let u = https_p.trim();
            if !u.is_empty() {
                if let Ok(p) = reqwest::Proxy::https(u) {
                    builder = builder.proxy(p);
                }
            }
        }
    }

    // User-Agent for observability
    builder = builder.user_agent(format!("chat2maas/{}", env!("CARGO_PKG_VERSION")));

    builder.build().unwrap_or_else(|_| reqwest::Client::new())
}

/// Build a JSON error response with the given HTTP status and message.
pub fn error_response(status: StatusCode, msg: &str) -> Response {
    let body = serde_json::json!({ "error": { "message": msg } });
    (status, axum::Json(body)).into_response()
}

/// Resolve the deployment base URL from environment. Mandatory for /proxy.
pub fn maas_endpoint() -> Option<String> {
    std::env::var("MAAS_ENDPOINT")
        .ok()
        .map(|v| v.trim().trim_end_matches('/').to_string())
        .filter(|v| !v.is_empty())
}

/// Resolve the outbound credential from environment, if configured.
///
/// MAAS_API_KEY carries the secret; MAAS_AUTH_SCHEME selects how it travels:
/// "api-key" (default, static deployment key) or "bearer".
pub fn env_credential() -> Option<Credential> {
    let secret = std::env::var("MAAS_API_KEY")
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())?;

    let scheme = std::env::var("MAAS_AUTH_SCHEME")
        .map(|v| v.trim().to_ascii_lowercase())
        .unwrap_or_default();

    match scheme.as_str() {
        "bearer" => Some(Credential::Bearer(secret)),
        _ => Some(Credential::ApiKey(secret)),
    }
}

/// Build a CORS layer from environment variables.
///
/// CORS_ALLOWED_ORIGINS: "*" (default) or comma-separated origins.
pub fn cors_layer_from_env() -> tower_http::cors::CorsLayer {
    let mut layer = tower_http::cors::CorsLayer::new()
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any);

    match std::env::var("CORS_ALLOWED_ORIGINS") {
        Ok(origins) if origins.trim() != "*" => {
            let vals: Vec<http::HeaderValue> = origins
                .split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .filter_map(|part| http::HeaderValue::from_str(part).ok())
                .collect();
            if vals.is_empty() {
                layer = layer.allow_origin(tower_http::cors::Any);
            } else {
                layer = layer.allow_origin(tower_http::cors::AllowOrigin::list(vals));
            }
        }
        _ => {
            layer = layer.allow_origin(tower_http::cors::Any);
        }
    }

    layer
}
