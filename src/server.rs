use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use http::StatusCode;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::reshape::reshape_request;
use crate::util::{cors_layer_from_env, env_credential, error_response, maas_endpoint, AppState};

/// Build the Axum router with `/status`, `/convert` and `/proxy`.
pub fn build_router() -> Router {
    let state = Arc::new(AppState::default());

    Router::new()
        .route("/status", get(status))
        .route("/convert", post(convert))
        .route("/proxy", post(proxy))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer_from_env())
}

/// Service status endpoint exposing version and available routes.
async fn status() -> impl IntoResponse {
    let routes = vec!["/status", "/convert", "/proxy"];
    Json(serde_json::json!({
        "name": "chat2maas",
        "version": env!("CARGO_PKG_VERSION"),
        "routes": routes
    }))
}

/// Reshape a Chat Completions request into the provider-form payload (JSON)
/// without forwarding it. Useful for inspecting what a deployment would see.
///
/// The body is taken as raw JSON so the reshaper's field policy is the only
/// validation applied; a malformed body is answered 400 with its message.
async fn convert(Json(body): Json<serde_json::Value>) -> Response {
    match reshape_request(&body) {
        Ok(out) => Json(out).into_response(),
        Err(e) => error_response(StatusCode::BAD_REQUEST, &e.to_string()),
    }
}

/// Reshape the request and forward it to the configured deployment.
///
/// The upstream status and body are returned to the caller untouched; this
/// handler adds nothing on the response path.
async fn proxy(State(state): State<Arc<AppState>>, Json(body): Json<serde_json::Value>) -> Response {
    let provider_form = match reshape_request(&body) {
        Ok(v) => v,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, &e.to_string()),
    };

    let base = match maas_endpoint() {
        Some(b) => b,
        None => {
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "MAAS_ENDPOINT not set (mandatory for /proxy)",
            )
        }
    };
    let url = format!("{base}/chat/completions");

    let mut builder = state.http.post(&url).json(&provider_form);
    if let Some(credential) = env_credential() {
        builder = credential.apply(builder);
    }

    match builder.send().await {
        Ok(resp) => {
            let status = resp.status();
            let bytes = resp.bytes().await.unwrap_or_default();
            (status, bytes).into_response()
        }
        Err(e) => error_response(StatusCode::BAD_GATEWAY, &e.to_string()),
    }
}
