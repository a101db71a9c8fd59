//! Caller-form to provider-form payload reshaping.
//!
//! MaaS reasoning deployments speak a close cousin of the Chat Completions
//! wire format with a narrower vocabulary: no `system` role, no tool
//! invocation, a fixed sampling temperature, and `max_completion_tokens`
//! instead of `max_tokens`. The functions here rewrite an outbound request
//! body into that dialect immediately before the HTTP send.
//!
//! The transform is a pure function over JSON: same input, same output, no
//! shared state. Concurrent callers need no coordination.

use serde_json::{Map, Value};

use crate::error::ReshapeError;

/// Sampling temperature accepted by reasoning deployments. Any caller-supplied
/// value is replaced with this constant.
pub const FORCED_TEMPERATURE: u64 = 1;

/// Reshape a caller-form Chat Completions body into the provider form.
///
/// Field policy (default-deny; anything not listed is dropped):
/// - `messages`: required. Each object element is reduced to `{role, content}`,
///   with the `system` role renamed to `user`.
/// - `model`: copied if present.
/// - `temperature`: always [`FORCED_TEMPERATURE`], whatever the caller sent.
/// - `user`: copied if present.
/// - `max_tokens`: renamed to `max_completion_tokens`; omitted if absent.
/// - `tools` / `tool_choice`: never copied (deployments reject them).
///
/// Dropped caller capabilities (temperature, tools) are reported via
/// `tracing::warn!` so operators can see the mismatch; the wire behavior is
/// a silent override.
pub fn reshape_request(body: &Value) -> Result<Value, ReshapeError> {
    let src = body.as_object().ok_or(ReshapeError::NotAnObject)?;
    let messages = src
        .get("messages")
        .and_then(Value::as_array)
        .ok_or(ReshapeError::MissingMessages)?;

    warn_on_dropped_capabilities(src);

    let mut out = Map::new();
    out.insert(
        "messages".to_string(),
        Value::Array(messages.iter().map(reshape_message).collect()),
    );
    if let Some(model) = src.get("model") {
        out.insert("model".to_string(), model.clone());
    }
    out.insert("temperature".to_string(), Value::from(FORCED_TEMPERATURE));
    if let Some(user) = src.get("user") {
        out.insert("user".to_string(), user.clone());
    }
    if let Some(max_tokens) = src.get("max_tokens") {
        out.insert("max_completion_tokens".to_string(), max_tokens.clone());
    }

    Ok(Value::Object(out))
}

/// String-level wrapper for callers holding raw request bytes.
pub fn reshape_body(body: &str) -> Result<String, ReshapeError> {
    let parsed: Value = serde_json::from_str(body)?;
    let out = reshape_request(&parsed)?;
    serde_json::to_string(&out).map_err(ReshapeError::Json)
}

/// Reduce one message to `{role, content}` with the role substitution applied.
///
/// Missing keys become JSON null so the provider always sees both fields;
/// non-object elements pass through unchanged.
fn reshape_message(message: &Value) -> Value {
    let obj = match message.as_object() {
        Some(o) => o,
        None => return message.clone(),
    };
    let mut out = Map::new();
    out.insert(
        "role".to_string(),
        rename_role(obj.get("role").cloned().unwrap_or(Value::Null)),
    );
    out.insert(
        "content".to_string(),
        obj.get("content").cloned().unwrap_or(Value::Null),
    );
    Value::Object(out)
}

/// Map the literal `"system"` role to `"user"`; everything else (including
/// non-string values) passes through unchanged.
fn rename_role(role: Value) -> Value {
    match role {
        Value::String(s) if s == "system" => Value::String("user".to_string()),
        other => other,
    }
}

/// Emit capability-mismatch warnings for fields the deployment will not honor.
fn warn_on_dropped_capabilities(src: &Map<String, Value>) {
    if let Some(t) = src.get("temperature").and_then(Value::as_f64) {
        if t != FORCED_TEMPERATURE as f64 {
            tracing::warn!(
                requested = t,
                forced = FORCED_TEMPERATURE,
                "caller-supplied temperature is not honored by reasoning deployments"
            );
        }
    }
    if src.contains_key("tools") || src.contains_key("tool_choice") {
        tracing::warn!("tool definitions dropped: reasoning deployments do not support tool invocation");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn msgs() -> Value {
        json!([{"role": "user", "content": "Hi"}])
    }

    #[test]
    fn renames_system_role_to_user() {
        let body = json!({
            "messages": [
                {"role": "system", "content": "You are helpful"},
                {"role": "user", "content": "Hi"},
                {"role": "assistant", "content": "Hello"}
            ]
        });
        let out = reshape_request(&body).unwrap();
        let roles: Vec<&str> = out["messages"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["role"].as_str().unwrap())
            .collect();
        assert_eq!(roles, ["user", "user", "assistant"]);
    }

    #[test]
    fn non_string_role_passes_through() {
        let body = json!({"messages": [{"role": 7, "content": "x"}]});
        let out = reshape_request(&body).unwrap();
        assert_eq!(out["messages"][0]["role"], json!(7));
    }

    #[test]
    fn message_extras_are_not_forwarded() {
        let body = json!({
            "messages": [{"role": "tool", "content": "ok", "name": "fn", "tool_call_id": "c1"}]
        });
        let out = reshape_request(&body).unwrap();
        let msg = out["messages"][0].as_object().unwrap();
        assert_eq!(msg.len(), 2);
        assert_eq!(msg["role"], json!("tool"));
        assert_eq!(msg["content"], json!("ok"));
    }

    #[test]
    fn temperature_is_always_forced() {
        for body in [
            json!({"messages": msgs()}),
            json!({"messages": msgs(), "temperature": 0}),
            json!({"messages": msgs(), "temperature": 0.7}),
            json!({"messages": msgs(), "temperature": 2.0}),
        ] {
            let out = reshape_request(&body).unwrap();
            assert_eq!(out["temperature"], json!(1), "input: {body}");
        }
    }

    #[test]
    fn max_tokens_is_renamed() {
        let body = json!({"messages": msgs(), "max_tokens": 256});
        let out = reshape_request(&body).unwrap();
        assert_eq!(out["max_completion_tokens"], json!(256));
        assert!(out.get("max_tokens").is_none());
    }

    #[test]
    fn absent_max_tokens_stays_absent() {
        let out = reshape_request(&json!({"messages": msgs()})).unwrap();
        assert!(out.get("max_tokens").is_none());
        assert!(out.get("max_completion_tokens").is_none());
    }

    #[test]
    fn tools_and_tool_choice_are_dropped() {
        let body = json!({
            "messages": msgs(),
            "tools": [{"type": "function", "function": {"name": "f", "parameters": {}}}],
            "tool_choice": "auto"
        });
        let out = reshape_request(&body).unwrap();
        assert!(out.get("tools").is_none());
        assert!(out.get("tool_choice").is_none());
    }

    #[test]
    fn model_and_user_pass_through() {
        let body = json!({"messages": msgs(), "model": "my-deployment", "user": "abuse-id"});
        let out = reshape_request(&body).unwrap();
        assert_eq!(out["model"], json!("my-deployment"));
        assert_eq!(out["user"], json!("abuse-id"));
    }

    #[test]
    fn unlisted_fields_are_denied_by_default() {
        let body = json!({
            "messages": msgs(),
            "top_p": 0.9,
            "stream": true,
            "n": 3,
            "stop": ["\n"],
            "presence_penalty": 0.1,
            "something_new": {"x": 1}
        });
        let out = reshape_request(&body).unwrap();
        let keys: Vec<&String> = out.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 2, "only messages + temperature, got {keys:?}");
        assert!(out.get("top_p").is_none());
        assert!(out.get("stream").is_none());
    }

    #[test]
    fn worked_example() {
        let body = json!({
            "messages": [
                {"role": "system", "content": "You are helpful"},
                {"role": "user", "content": "Hi"}
            ],
            "model": "x",
            "temperature": 0.2,
            "max_tokens": 50
        });
        let expected = json!({
            "messages": [
                {"role": "user", "content": "You are helpful"},
                {"role": "user", "content": "Hi"}
            ],
            "model": "x",
            "temperature": 1,
            "max_completion_tokens": 50
        });
        assert_eq!(reshape_request(&body).unwrap(), expected);
    }

    #[test]
    fn deterministic_for_identical_input() {
        let body = json!({
            "messages": [{"role": "system", "content": "a"}],
            "model": "m",
            "temperature": 0.5,
            "max_tokens": 10
        });
        assert_eq!(
            reshape_request(&body).unwrap(),
            reshape_request(&body).unwrap()
        );
    }

    #[test]
    fn missing_messages_is_malformed() {
        let err = reshape_request(&json!({})).unwrap_err();
        assert!(matches!(err, ReshapeError::MissingMessages));

        // A non-array `messages` is just as malformed.
        let err = reshape_request(&json!({"messages": "nope"})).unwrap_err();
        assert!(matches!(err, ReshapeError::MissingMessages));
    }

    #[test]
    fn non_object_body_is_malformed() {
        let err = reshape_request(&json!(["not", "an", "object"])).unwrap_err();
        assert!(matches!(err, ReshapeError::NotAnObject));
    }

    #[test]
    fn invalid_json_text_is_malformed() {
        let err = reshape_body("not json").unwrap_err();
        assert!(matches!(err, ReshapeError::Json(_)));
    }

    #[test]
    fn reshape_body_round_trips_valid_text() {
        let out = reshape_body(r#"{"messages":[{"role":"system","content":"s"}]}"#).unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["messages"][0]["role"], json!("user"));
        assert_eq!(parsed["temperature"], json!(1));
    }
}
