//! Unit tests for token service

use crate::domain::entities::session::{AuthenticatedUser, Identity};
use crate::errors::{DomainError, TokenError};
use crate::services::token::codec::{encode_segment, sign};
use crate::services::token::{TokenService, TokenServiceConfig};

const T0: i64 = 1_700_000_000;
const DAY: i64 = 86_400;

fn create_test_service() -> TokenService {
    TokenService::new(TokenServiceConfig::new("test-secret"))
}

fn test_identity() -> Identity {
    Identity::new("u1", "a@b.com", "user")
}

fn assert_token_error(result: Result<AuthenticatedUser, DomainError>, expected: TokenError) {
    match result {
        Err(DomainError::Token(actual)) => assert_eq!(actual, expected),
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}

/// Builds a correctly signed token around an arbitrary payload segment
fn signed_with_payload(secret: &str, payload_segment: &str) -> String {
    let header = encode_segment(br#"{"alg":"HS256","typ":"JWT"}"#);
    let signing_input = format!("{}.{}", header, payload_segment);
    let signature = sign(secret.as_bytes(), &signing_input).unwrap();
    format!("{}.{}", signing_input, signature)
}

#[test]
fn test_issue_matches_wire_format() {
    let service = create_test_service();
    let token = service.issue_at(&test_identity(), T0).unwrap();

    assert_eq!(
        token,
        "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
         eyJ1c2VySWQiOiJ1MSIsImVtYWlsIjoiYUBiLmNvbSIsInJvbGUiOiJ1c2VyIiwiZXhwIjoxNzAwMDg2NDAwfQ.\
         2MnbPw2nlMsunzz8NpxcnZKEq-DiGcxByrE7Em1Z_wo"
    );
}

#[test]
fn test_issue_is_deterministic() {
    let service = create_test_service();
    let first = service.issue_at(&test_identity(), T0).unwrap();
    let second = service.issue_at(&test_identity(), T0).unwrap();
    assert_eq!(first, second);

    let later = service.issue_at(&test_identity(), T0 + 1).unwrap();
    assert_ne!(first, later);
}

#[test]
fn test_token_is_ascii_without_padding() {
    let service = create_test_service();
    let token = service.issue_at(&test_identity(), T0).unwrap();
    assert_eq!(token.split('.').count(), 3);
    assert!(token
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.'));
}

#[test]
fn test_round_trip() {
    let service = create_test_service();
    let token = service.issue_at(&test_identity(), T0).unwrap();

    let user = service.verify_at(&token, T0).unwrap();
    assert_eq!(
        user,
        AuthenticatedUser {
            id: "u1".to_string(),
            email: "a@b.com".to_string(),
            role: "user".to_string(),
        }
    );
}

#[test]
fn test_round_trip_with_real_clock() {
    let service = create_test_service();
    let identity = Identity::new("42", "someone@example.org", "admin");
    let token = service.issue(&identity).unwrap();

    let user = service.verify(&token).unwrap();
    assert_eq!(user.id, "42");
    assert_eq!(user.email, "someone@example.org");
    assert_eq!(user.role, "admin");
}

#[test]
fn test_round_trip_preserves_unicode_claims() {
    let service = create_test_service();
    let identity = Identity::new("ñandú-7", "josé@ejemplo.es", "user");
    let token = service.issue_at(&identity, T0).unwrap();
    let user = service.verify_at(&token, T0).unwrap();
    assert_eq!(user.id, "ñandú-7");
    assert_eq!(user.email, "josé@ejemplo.es");
}

#[test]
fn test_valid_until_last_second_of_window() {
    let service = create_test_service();
    let token = service.issue_at(&test_identity(), T0).unwrap();

    assert!(service.verify_at(&token, T0 + DAY - 1).is_ok());
    assert_token_error(service.verify_at(&token, T0 + DAY), TokenError::TokenExpired);
}

#[test]
fn test_expires_after_one_day_and_one_second() {
    let service = create_test_service();
    let token = service.issue_at(&test_identity(), T0).unwrap();

    assert!(service.verify_at(&token, T0).is_ok());
    assert_token_error(
        service.verify_at(&token, T0 + DAY + 1),
        TokenError::TokenExpired,
    );
}

#[test]
fn test_expiry_boundary_around_now() {
    let service = create_test_service();
    let now = T0;

    // Issued so that expires_at == now + 1
    let fresh = service.issue_at(&test_identity(), now + 1 - DAY).unwrap();
    assert!(service.verify_at(&fresh, now).is_ok());

    // Issued so that expires_at == now - 1
    let stale = service.issue_at(&test_identity(), now - 1 - DAY).unwrap();
    assert_token_error(service.verify_at(&stale, now), TokenError::TokenExpired);
}

#[test]
fn test_custom_lifetime() {
    let mut config = TokenServiceConfig::new("test-secret");
    config.token_lifetime_seconds = 60;
    let service = TokenService::new(config);

    let token = service.issue_at(&test_identity(), T0).unwrap();
    assert!(service.verify_at(&token, T0 + 59).is_ok());
    assert_token_error(service.verify_at(&token, T0 + 60), TokenError::TokenExpired);
}

#[test]
fn test_invalid_lifetime_refuses_to_issue() {
    for lifetime in [0, -5, i64::MAX] {
        let mut config = TokenServiceConfig::new("test-secret");
        config.token_lifetime_seconds = lifetime;
        let service = TokenService::new(config);

        match service.issue_at(&test_identity(), T0) {
            Err(DomainError::Token(TokenError::TokenGenerationFailed)) => {}
            other => panic!("lifetime {} gave {:?}", lifetime, other),
        }
    }
}

#[test]
fn test_malformed_inputs() {
    let service = create_test_service();
    for token in ["", "abc", "not.a.token.at.all", "a.b", "..", "a..c", ".b.c", "a.b."] {
        assert_token_error(service.verify_at(token, T0), TokenError::MalformedToken);
    }
}

#[test]
fn test_tampered_signature_never_verifies() {
    let service = create_test_service();
    let token = service.issue_at(&test_identity(), T0).unwrap();
    let signature_start = token.rfind('.').unwrap() + 1;

    for i in signature_start..token.len() {
        let mut bytes = token.clone().into_bytes();
        bytes[i] = if bytes[i] == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(bytes).unwrap();

        assert_token_error(
            service.verify_at(&tampered, T0),
            TokenError::InvalidSignature,
        );
    }
}

#[test]
fn test_non_alphabet_signature_byte_is_invalid_signature() {
    let service = create_test_service();
    let token = service.issue_at(&test_identity(), T0).unwrap();
    let middle = token.rfind('.').unwrap() + 10;

    for replacement in [b'!', b'=', b'+', b'/'] {
        let mut bytes = token.clone().into_bytes();
        bytes[middle] = replacement;
        let tampered = String::from_utf8(bytes).unwrap();

        assert_token_error(
            service.verify_at(&tampered, T0),
            TokenError::InvalidSignature,
        );
    }
}

#[test]
fn test_tampered_payload_is_rejected() {
    let service = create_test_service();
    let token = service.issue_at(&test_identity(), T0).unwrap();
    let parts: Vec<&str> = token.split('.').collect();

    let forged_payload =
        encode_segment(br#"{"userId":"admin","email":"a@b.com","role":"admin","exp":9999999999}"#);
    let forged = format!("{}.{}.{}", parts[0], forged_payload, parts[2]);

    assert_token_error(service.verify_at(&forged, T0), TokenError::InvalidSignature);
}

#[test]
fn test_wrong_secret_is_rejected() {
    let issuer = TokenService::new(TokenServiceConfig::new("secret-a"));
    let verifier = TokenService::new(TokenServiceConfig::new("secret-b"));
    let token = issuer.issue_at(&test_identity(), T0).unwrap();

    assert_token_error(verifier.verify_at(&token, T0), TokenError::InvalidSignature);
}

#[test]
fn test_signed_garbage_payload_is_malformed() {
    let service = create_test_service();

    let not_json = signed_with_payload("test-secret", &encode_segment(b"not json"));
    assert_token_error(service.verify_at(&not_json, T0), TokenError::MalformedToken);

    let not_base64 = signed_with_payload("test-secret", "***");
    assert_token_error(service.verify_at(&not_base64, T0), TokenError::MalformedToken);

    let missing_claims = signed_with_payload("test-secret", &encode_segment(br#"{"exp":1}"#));
    assert_token_error(
        service.verify_at(&missing_claims, T0),
        TokenError::MalformedToken,
    );
}

#[test]
fn test_signature_checked_before_expiry() {
    let issuer = TokenService::new(TokenServiceConfig::new("secret-a"));
    let verifier = TokenService::new(TokenServiceConfig::new("secret-b"));
    let token = issuer.issue_at(&test_identity(), T0).unwrap();

    assert_token_error(
        verifier.verify_at(&token, T0 + 10 * DAY),
        TokenError::InvalidSignature,
    );
}

#[test]
fn test_missing_role_defaults_to_user() {
    let service = create_test_service();
    let payload = encode_segment(format!(
        r#"{{"userId":"u9","email":"x@y.z","exp":{}}}"#,
        T0 + 10
    ));
    let token = signed_with_payload("test-secret", &payload);

    let user = service.verify_at(&token, T0).unwrap();
    assert_eq!(user.id, "u9");
    assert_eq!(user.role, "user");
}

#[test]
fn test_padded_signature_is_accepted() {
    let service = create_test_service();
    let token = service.issue_at(&test_identity(), T0).unwrap();
    let padded = format!("{}=", token);
    assert!(service.verify_at(&padded, T0).is_ok());
}

#[test]
fn test_service_is_shareable_across_threads() {
    let service = std::sync::Arc::new(create_test_service());
    let token = service.issue_at(&test_identity(), T0).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let service = std::sync::Arc::clone(&service);
            let token = token.clone();
            std::thread::spawn(move || service.verify_at(&token, T0).is_ok())
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
