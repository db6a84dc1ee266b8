//! Authentication and session cookie configuration

use serde::{Deserialize, Serialize};

use super::environment::Environment;

/// Signing secret used when `JWT_SECRET` is not configured.
///
/// Insecure: anyone who reads this source can mint valid session tokens.
/// Only suitable for local development.
pub const INSECURE_DEVELOPMENT_SECRET: &str = "tu-secreto-super-seguro";

/// Default session lifetime (24 hours)
pub const DEFAULT_TOKEN_LIFETIME_SECONDS: i64 = 60 * 60 * 24;

/// Longest lifetime a deployment may configure
pub const MAX_TOKEN_LIFETIME_SECONDS: i64 = DEFAULT_TOKEN_LIFETIME_SECONDS;

/// Session token signing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Shared secret for signing and verifying session tokens
    pub secret: String,

    /// Token lifetime in seconds, also used as the cookie max-age
    #[serde(default = "default_token_lifetime")]
    pub token_lifetime_seconds: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(INSECURE_DEVELOPMENT_SECRET),
            token_lifetime_seconds: default_token_lifetime(),
        }
    }
}

impl JwtConfig {
    /// Create a new configuration with the given secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Build the configuration from the raw value of `JWT_SECRET`.
    ///
    /// A missing or blank value falls back to [`INSECURE_DEVELOPMENT_SECRET`].
    /// Configuration is read before logging is installed, so the warning is
    /// left to the caller through [`JwtConfig::is_using_default_secret`].
    pub fn from_secret_var(value: Option<String>) -> Self {
        match value {
            Some(secret) if !secret.trim().is_empty() => Self::new(secret),
            _ => Self::default(),
        }
    }

    /// Check if using the fallback secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == INSECURE_DEVELOPMENT_SECRET
    }

    /// Lifetime must be positive and no longer than 24 hours
    pub fn has_valid_lifetime(&self) -> bool {
        (1..=MAX_TOKEN_LIFETIME_SECONDS).contains(&self.token_lifetime_seconds)
    }
}

/// Session cookie configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Name of the cookie carrying the session token
    pub cookie_name: String,

    /// Session cookie secure flag (HTTPS only)
    pub secure: bool,

    /// Session cookie SameSite attribute
    pub same_site: String,

    /// Session cookie HttpOnly flag
    #[serde(default = "default_http_only")]
    pub http_only: bool,

    /// Cookie path
    #[serde(default = "default_cookie_path")]
    pub path: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: String::from("token"),
            secure: false,
            same_site: String::from("Lax"),
            http_only: default_http_only(),
            path: default_cookie_path(),
        }
    }
}

impl SessionConfig {
    /// Cookie settings for an environment; cookies are HTTPS-only in production
    pub fn for_environment(env: Environment) -> Self {
        Self {
            secure: env.is_production(),
            ..Default::default()
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Token signing configuration
    pub jwt: JwtConfig,

    /// Session cookie configuration
    #[serde(default)]
    pub session: SessionConfig,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env(env: Environment) -> Self {
        Self {
            jwt: JwtConfig::from_secret_var(std::env::var("JWT_SECRET").ok()),
            session: SessionConfig::for_environment(env),
        }
    }
}

fn default_token_lifetime() -> i64 {
    DEFAULT_TOKEN_LIFETIME_SECONDS
}

fn default_http_only() -> bool {
    true
}

fn default_cookie_path() -> String {
    String::from("/")
}
