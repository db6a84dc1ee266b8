//! Unit tests for authentication service

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entities::session::Identity;
use crate::errors::{AuthError, DomainError, ValidationError};
use crate::repositories::{InMemoryUserRepository, UserRepository};
use crate::services::auth::{AuthService, AuthServiceConfig, LoginCommand, RegisterCommand};
use crate::services::token::{hash_secret, TokenService, TokenServiceConfig};

struct Fixture {
    service: AuthService<InMemoryUserRepository>,
    repository: Arc<InMemoryUserRepository>,
    tokens: Arc<TokenService>,
}

fn create_fixture(config: AuthServiceConfig) -> Fixture {
    let repository = Arc::new(InMemoryUserRepository::new());
    let tokens = Arc::new(TokenService::new(TokenServiceConfig::new("test-secret")));
    let service = AuthService::new(Arc::clone(&repository), Arc::clone(&tokens), config);
    Fixture {
        service,
        repository,
        tokens,
    }
}

fn register_command() -> RegisterCommand {
    RegisterCommand {
        email: "ana@example.com".to_string(),
        password: "hunter2".to_string(),
        name: "Ana".to_string(),
    }
}

fn login_command(password: &str) -> LoginCommand {
    LoginCommand {
        email: "ana@example.com".to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn test_register_issues_token_and_stores_digest() {
    let fx = create_fixture(AuthServiceConfig::default());

    let outcome = fx.service.register(register_command()).await.unwrap();
    assert_eq!(outcome.user.email, "ana@example.com");
    assert_eq!(outcome.user.name, "Ana");

    let session = fx.tokens.verify(&outcome.token).unwrap();
    assert_eq!(session.id, outcome.user.id.to_string());
    assert_eq!(session.email, "ana@example.com");
    assert_eq!(session.role, "user");

    let stored = fx
        .repository
        .find_by_email("ana@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.password_hash, hash_secret("hunter2"));
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let fx = create_fixture(AuthServiceConfig::default());
    fx.service.register(register_command()).await.unwrap();

    let result = fx.service.register(register_command()).await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::UserAlreadyExists))
    ));
}

#[tokio::test]
async fn test_register_requires_all_fields() {
    let fx = create_fixture(AuthServiceConfig::default());

    let mut command = register_command();
    command.name = "  ".to_string();
    let result = fx.service.register(command).await;
    match result {
        Err(DomainError::Validation(ValidationError::RequiredField { field })) => {
            assert_eq!(field, "name")
        }
        other => panic!("unexpected result: {:?}", other),
    }

    let mut command = register_command();
    command.email.clear();
    assert!(matches!(
        fx.service.register(command).await,
        Err(DomainError::Validation(ValidationError::RequiredField { .. }))
    ));
}

#[tokio::test]
async fn test_register_disabled() {
    let fx = create_fixture(AuthServiceConfig {
        allow_registration: false,
        ..Default::default()
    });

    assert!(matches!(
        fx.service.register(register_command()).await,
        Err(DomainError::Auth(AuthError::RegistrationDisabled))
    ));
}

#[tokio::test]
async fn test_login_success_updates_last_login() {
    let fx = create_fixture(AuthServiceConfig::default());
    let registered = fx.service.register(register_command()).await.unwrap();
    assert!(registered.user.last_login.is_none());

    let outcome = fx.service.login(login_command("hunter2")).await.unwrap();
    assert_eq!(outcome.user.id, registered.user.id);
    assert!(outcome.user.last_login.is_some());
    assert!(fx.tokens.verify(&outcome.token).is_ok());
}

#[tokio::test]
async fn test_login_wrong_password_and_unknown_email_look_the_same() {
    let fx = create_fixture(AuthServiceConfig::default());
    fx.service.register(register_command()).await.unwrap();

    let wrong_password = fx.service.login(login_command("nope")).await;
    assert!(matches!(
        wrong_password,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));

    let unknown = fx
        .service
        .login(LoginCommand {
            email: "ghost@example.com".to_string(),
            password: "hunter2".to_string(),
        })
        .await;
    assert!(matches!(
        unknown,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
}

#[tokio::test]
async fn test_login_requires_fields() {
    let fx = create_fixture(AuthServiceConfig::default());
    assert!(matches!(
        fx.service.login(login_command("")).await,
        Err(DomainError::Validation(ValidationError::RequiredField { .. }))
    ));
}

#[tokio::test]
async fn test_current_user() {
    let fx = create_fixture(AuthServiceConfig::default());
    let outcome = fx.service.register(register_command()).await.unwrap();

    let profile = fx.service.current_user(&outcome.token).await.unwrap();
    assert_eq!(profile.id, outcome.user.id);
}

#[tokio::test]
async fn test_current_user_rejects_bad_tokens_uniformly() {
    let fx = create_fixture(AuthServiceConfig::default());
    let outcome = fx.service.register(register_command()).await.unwrap();

    let expired = fx
        .tokens
        .issue_at(
            &Identity::new(outcome.user.id.to_string(), "ana@example.com", "user"),
            Utc::now().timestamp() - 2 * 86_400,
        )
        .unwrap();
    let tampered = format!("{}x", outcome.token);

    for token in ["", "abc", expired.as_str(), tampered.as_str()] {
        assert!(matches!(
            fx.service.current_user(token).await,
            Err(DomainError::Auth(AuthError::Unauthorized))
        ));
    }
}

#[tokio::test]
async fn test_current_user_unknown_subject() {
    let fx = create_fixture(AuthServiceConfig::default());

    let orphan = fx
        .tokens
        .issue(&Identity::new(uuid::Uuid::new_v4().to_string(), "x@y.z", "user"))
        .unwrap();
    assert!(matches!(
        fx.service.current_user(&orphan).await,
        Err(DomainError::Auth(AuthError::UserNotFound))
    ));

    let not_a_uuid = fx.tokens.issue(&Identity::new("u1", "x@y.z", "user")).unwrap();
    assert!(matches!(
        fx.service.current_user(&not_a_uuid).await,
        Err(DomainError::Auth(AuthError::UserNotFound))
    ));
}

#[tokio::test]
async fn test_list_users() {
    let fx = create_fixture(AuthServiceConfig::default());
    fx.service.register(register_command()).await.unwrap();
    fx.service
        .register(RegisterCommand {
            email: "bo@example.com".to_string(),
            password: "pw".to_string(),
            name: "Bo".to_string(),
        })
        .await
        .unwrap();

    let users = fx.service.list_users().await.unwrap();
    assert_eq!(users.len(), 2);
}
