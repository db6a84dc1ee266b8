//! Configuration module with business-specific sub-modules
//!
//! - `auth` - Session token signing and cookie configuration
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server configuration

pub mod auth;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::{AuthConfig, JwtConfig, SessionConfig};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl AppConfig {
    /// Default configuration for an environment, with the fallback signing secret
    pub fn for_environment(env: Environment) -> Self {
        Self {
            environment: env,
            server: ServerConfig::default(),
            auth: AuthConfig {
                jwt: JwtConfig::default(),
                session: SessionConfig::for_environment(env),
            },
            logging: LoggingConfig::for_environment(env),
        }
    }

    /// Load configuration from environment.
    ///
    /// This is the single place `JWT_SECRET` is read; the result is passed
    /// explicitly to everything that needs it.
    pub fn from_env() -> Self {
        let env = Environment::from_env();
        Self {
            environment: env,
            server: ServerConfig::from_env(),
            auth: AuthConfig::from_env(env),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_defaults() {
        let config = AppConfig::for_environment(Environment::Production);
        assert!(config.auth.session.secure);
        assert_eq!(config.logging.format, LogFormat::Json);
    }
}
