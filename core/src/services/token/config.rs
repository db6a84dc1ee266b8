//! Configuration for the token service

use dx_shared::config::auth::{
    JwtConfig, DEFAULT_TOKEN_LIFETIME_SECONDS, INSECURE_DEVELOPMENT_SECRET,
};

/// Configuration for the token service
///
/// Built once at start-up and handed to [`super::TokenService::new`]; it is
/// never reloaded.
#[derive(Clone)]
pub struct TokenServiceConfig {
    /// Shared HMAC signing secret
    pub secret: String,
    /// Token lifetime in seconds
    pub token_lifetime_seconds: i64,
}

impl TokenServiceConfig {
    /// Create a configuration with the default 24 hour lifetime
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            token_lifetime_seconds: DEFAULT_TOKEN_LIFETIME_SECONDS,
        }
    }
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self::new(INSECURE_DEVELOPMENT_SECRET)
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(jwt: &JwtConfig) -> Self {
        Self {
            secret: jwt.secret.clone(),
            token_lifetime_seconds: jwt.token_lifetime_seconds,
        }
    }
}

impl std::fmt::Debug for TokenServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenServiceConfig")
            .field("secret", &"<redacted>")
            .field("token_lifetime_seconds", &self.token_lifetime_seconds)
            .finish()
    }
}
