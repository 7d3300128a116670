use super::*;
use base64::Engine as _;

use crate::session::testing::{token_for, token_with};

// =============================================================
// decode_claims: accepted tokens
// =============================================================

#[test]
fn decode_reads_subject_and_expiry() {
    let token = token_with(&serde_json::json!({"sub": "alice", "exp": 1_900_000_000}));
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.sub, "alice");
    assert_eq!(claims.exp, 1_900_000_000);
    assert_eq!(claims.iat, None);
    assert!(claims.roles.is_empty());
}

#[test]
fn decode_reads_roles_and_issued_at() {
    let token = token_with(&serde_json::json!({
        "sub": "bob",
        "exp": 1_900_000_000,
        "iat": 1_800_000_000,
        "roles": ["USER", "ADMIN"],
    }));
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.iat, Some(1_800_000_000));
    assert_eq!(claims.roles, vec!["USER".to_owned(), "ADMIN".to_owned()]);
}

#[test]
fn decode_accepts_integral_float_expiry() {
    let token = token_with(&serde_json::json!({"sub": "alice", "exp": 1_900_000_000.0}));
    assert_eq!(decode_claims(&token).unwrap().exp, 1_900_000_000);
}

#[test]
fn decode_accepts_padded_payload() {
    let payload = base64::engine::general_purpose::URL_SAFE.encode(br#"{"sub":"a","exp":5}"#);
    assert!(payload.ends_with('='));
    let claims = decode_claims(&format!("e30.{payload}.sig")).unwrap();
    assert_eq!(claims.sub, "a");
}

#[test]
fn decode_treats_null_roles_as_empty() {
    let token = token_with(&serde_json::json!({"sub": "alice", "exp": 1_900_000_000, "roles": null}));
    assert!(decode_claims(&token).unwrap().roles.is_empty());
}

#[test]
fn decode_keeps_only_string_roles() {
    let token = token_with(&serde_json::json!({
        "sub": "alice",
        "exp": 1_900_000_000,
        "roles": ["USER", 7, {"name": "ADMIN"}, "TRADER"],
    }));
    assert_eq!(decode_claims(&token).unwrap().roles, vec!["USER".to_owned(), "TRADER".to_owned()]);
}

#[test]
fn decode_ignores_scalar_roles() {
    let token = token_with(&serde_json::json!({"sub": "alice", "exp": 1_900_000_000, "roles": "USER"}));
    assert!(decode_claims(&token).unwrap().roles.is_empty());
}

#[test]
fn decode_reads_numeric_string_issued_at() {
    let token = token_with(&serde_json::json!({"sub": "alice", "exp": 1_900_000_000, "iat": "1800000000"}));
    assert_eq!(decode_claims(&token).unwrap().iat, Some(1_800_000_000));
}

#[test]
fn decode_drops_unreadable_issued_at() {
    for iat in [serde_json::json!("yesterday"), serde_json::json!(1.5), serde_json::json!(null), serde_json::json!([1])] {
        let token = token_with(&serde_json::json!({"sub": "alice", "exp": 1_900_000_000, "iat": iat}));
        assert_eq!(decode_claims(&token).unwrap().iat, None);
    }
}

// =============================================================
// decode_claims: rejected tokens
// =============================================================

#[test]
fn decode_rejects_wrong_segment_count() {
    assert_eq!(decode_claims("not-a-token"), Err(TokenError::Segments(1)));
    assert_eq!(decode_claims(""), Err(TokenError::Segments(1)));
    assert_eq!(decode_claims("a.b.c.d"), Err(TokenError::Segments(4)));
}

#[test]
fn decode_rejects_non_base64_payload() {
    assert!(matches!(decode_claims("e30.!!!.sig"), Err(TokenError::Encoding(_))));
}

#[test]
fn decode_rejects_payload_without_expiry() {
    let token = token_with(&serde_json::json!({"sub": "alice"}));
    assert!(matches!(decode_claims(&token), Err(TokenError::Claims(_))));
}

#[test]
fn decode_rejects_fractional_expiry() {
    let token = token_with(&serde_json::json!({"sub": "alice", "exp": 12.5}));
    assert!(matches!(decode_claims(&token), Err(TokenError::Claims(_))));
}

#[test]
fn decode_rejects_non_object_payload() {
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(b"[1,2,3]");
    assert!(matches!(decode_claims(&format!("e30.{payload}.sig")), Err(TokenError::Claims(_))));
}

// =============================================================
// Claims::is_expired
// =============================================================

#[test]
fn expiry_boundary_counts_as_expired() {
    let claims = decode_claims(&token_for("alice", 1_000)).unwrap();
    assert!(claims.is_expired(1_000));
    assert!(claims.is_expired(1_001));
    assert!(!claims.is_expired(999));
}

// =============================================================
// validate
// =============================================================

#[test]
fn validate_accepts_unexpired_token() {
    let claims = validate(&token_for("alice", 2_000), 1_999).unwrap();
    assert_eq!(claims.sub, "alice");
}

#[test]
fn validate_rejects_expired_token() {
    assert_eq!(validate(&token_for("alice", 990), 1_000), Err(TokenError::Expired(990)));
}

#[test]
fn validate_reports_decode_errors_before_expiry() {
    assert_eq!(validate("garbage", 0), Err(TokenError::Segments(1)));
}
