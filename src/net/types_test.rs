use super::*;

// =============================================================
// Request bodies
// =============================================================

#[test]
fn login_request_uses_camel_case_keys() {
    let body = serde_json::to_value(LoginRequest { username_or_email: "alice", password: "hunter2" }).unwrap();
    assert_eq!(body, serde_json::json!({"usernameOrEmail": "alice", "password": "hunter2"}));
}

#[test]
fn register_request_serializes_all_fields() {
    let req = RegisterRequest {
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        password: "hunter22".to_owned(),
    };
    let body = serde_json::to_value(&req).unwrap();
    assert_eq!(body["username"], "alice");
    assert_eq!(body["email"], "alice@example.com");
    assert_eq!(body["password"], "hunter22");
}

// =============================================================
// Envelope parsing
// =============================================================

#[test]
fn envelope_parses_login_success() {
    let raw = r#"{"status":200,"message":"Login successful","data":{"token":"a.b.c","user":"alice"}}"#;
    let env: ApiEnvelope<AuthPayload> = serde_json::from_str(raw).unwrap();
    assert_eq!(env.status, Some(200));
    let data = env.data.unwrap();
    assert_eq!(data.token, "a.b.c");
    assert_eq!(data.user.as_deref(), Some("alice"));
}

#[test]
fn envelope_tolerates_null_user_and_missing_status() {
    let raw = r#"{"data":{"token":"a.b.c","user":null}}"#;
    let env: ApiEnvelope<AuthPayload> = serde_json::from_str(raw).unwrap();
    assert_eq!(env.status, None);
    assert_eq!(env.data.unwrap().user, None);
}

#[test]
fn envelope_parses_error_with_null_data() {
    let raw = r#"{"status":401,"message":"Invalid username or password","data":null}"#;
    let env: ApiEnvelope<AuthPayload> = serde_json::from_str(raw).unwrap();
    assert!(env.data.is_none());
    assert_eq!(env.message.as_deref(), Some("Invalid username or password"));
}

#[test]
fn envelope_tolerates_text_status() {
    let raw = r#"{"status":"OK","message":"Login successful","data":{"token":"a.b.c"}}"#;
    let env: ApiEnvelope<AuthPayload> = serde_json::from_str(raw).unwrap();
    assert_eq!(env.status, None);
    assert_eq!(env.message.as_deref(), Some("Login successful"));
    assert_eq!(env.data.unwrap().token, "a.b.c");
}

// =============================================================
// error_message
// =============================================================

#[test]
fn error_message_reads_message_field() {
    assert_eq!(error_message(r#"{"message":"invalid credentials"}"#).as_deref(), Some("invalid credentials"));
}

#[test]
fn error_message_ignores_non_numeric_status() {
    let body = r#"{"status":"UNAUTHORIZED","message":"invalid credentials","data":{"token":7}}"#;
    assert_eq!(error_message(body).as_deref(), Some("invalid credentials"));
}

#[test]
fn error_message_ignores_non_string_message() {
    assert_eq!(error_message(r#"{"message":{"code":401}}"#), None);
    assert_eq!(error_message(r#"{"message":null}"#), None);
}

#[test]
fn error_message_ignores_blank_or_missing_message() {
    assert_eq!(error_message(r#"{"message":"   "}"#), None);
    assert_eq!(error_message(r#"{"status":500}"#), None);
}

#[test]
fn error_message_ignores_non_json_body() {
    assert_eq!(error_message("<html>Bad Gateway</html>"), None);
    assert_eq!(error_message(""), None);
}
