//! Main authentication service implementation

use std::sync::Arc;

use crate::domain::entities::session::Identity;
use crate::domain::entities::user::{User, UserProfile};
use crate::domain::value_objects::AuthOutcome;
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::UserRepository;
use crate::services::token::{compare, hash_secret, TokenService};

use super::commands::{LoginCommand, RegisterCommand};
use super::config::AuthServiceConfig;

/// Authentication service for registration, login and session lookup
pub struct AuthService<U>
where
    U: UserRepository,
{
    /// User repository for account persistence
    user_repository: Arc<U>,
    /// Token service for issuing and verifying session tokens
    token_service: Arc<TokenService>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U> AuthService<U>
where
    U: UserRepository,
{
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        token_service: Arc<TokenService>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            token_service,
            config,
        }
    }

    /// Token service used for issuing and verifying sessions
    pub fn token_service(&self) -> &TokenService {
        &self.token_service
    }

    /// Register a new account and open a session for it
    ///
    /// This method:
    /// 1. Requires email, password and name to be present
    /// 2. Rejects an email that is already registered
    /// 3. Stores the password digest
    /// 4. Issues a session token
    pub async fn register(&self, command: RegisterCommand) -> DomainResult<AuthOutcome> {
        if !self.config.allow_registration {
            return Err(AuthError::RegistrationDisabled.into());
        }

        let email = required("email", &command.email)?;
        required("password", &command.password)?;
        let name = required("name", &command.name)?;

        if self.user_repository.find_by_email(email).await?.is_some() {
            tracing::info!("registration rejected: email already registered");
            return Err(AuthError::UserAlreadyExists.into());
        }

        let user = User::new(
            email.to_string(),
            name.to_string(),
            hash_secret(&command.password),
        );
        let user = self.user_repository.create(user).await?;

        let token = self.issue_for(&user)?;
        tracing::info!(user_id = %user.id, "user registered");

        Ok(AuthOutcome::new(token, user.profile()))
    }

    /// Check credentials and open a session
    ///
    /// Unknown email and wrong password fail with the same error.
    pub async fn login(&self, command: LoginCommand) -> DomainResult<AuthOutcome> {
        let email = required("email", &command.email)?;
        required("password", &command.password)?;

        let mut user = match self.user_repository.find_by_email(email).await? {
            Some(user) => user,
            None => {
                tracing::info!("login rejected: unknown email");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        if !compare(&command.password, &user.password_hash) {
            tracing::info!(user_id = %user.id, "login rejected: wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        user.update_last_login();
        let user = self.user_repository.update(user).await?;

        let token = self.issue_for(&user)?;
        tracing::info!(user_id = %user.id, "user logged in");

        Ok(AuthOutcome::new(token, user.profile()))
    }

    /// Resolve the user behind a session token
    ///
    /// Any token failure surfaces as `AuthError::Unauthorized`.
    pub async fn current_user(&self, token: &str) -> DomainResult<UserProfile> {
        let session = self
            .token_service
            .verify(token)
            .map_err(|_| DomainError::from(AuthError::Unauthorized))?;

        let id = session
            .id
            .parse()
            .map_err(|_| DomainError::from(AuthError::UserNotFound))?;

        self.user_repository
            .find_by_id(id)
            .await?
            .map(|user| user.profile())
            .ok_or_else(|| AuthError::UserNotFound.into())
    }

    /// All registered users, newest first
    pub async fn list_users(&self) -> DomainResult<Vec<UserProfile>> {
        let users = self.user_repository.list().await?;
        Ok(users.iter().map(User::profile).collect())
    }

    fn issue_for(&self, user: &User) -> DomainResult<String> {
        let identity = Identity::new(user.id.to_string(), &user.email, &self.config.default_role);
        self.token_service.issue(&identity)
    }
}

/// Trimmed value of a required field
fn required<'a>(field: &str, value: &'a str) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::RequiredField {
            field: field.to_string(),
        });
    }
    Ok(trimmed)
}
