//! Runtime configuration loading for the API binary.
//!
//! Defaults come from [`AppConfig::from_env`] (which reads `JWT_SECRET`,
//! `SERVER_HOST`, `SERVER_PORT` and the environment name). Any key can then
//! be overridden with an `APP__` prefixed variable, for example
//! `APP__SERVER__PORT=9000` or `APP__AUTH__SESSION__SECURE=true`.

use config::{Config, ConfigError};
use dx_shared::config::auth::MAX_TOKEN_LIFETIME_SECONDS;
use dx_shared::config::AppConfig;

/// Prefix for override variables
const ENV_PREFIX: &str = "APP";

/// Separator between nested keys in override variables
const ENV_SEPARATOR: &str = "__";

/// Load the application configuration
///
/// A `.env` file in the working directory is loaded first when present.
pub fn load() -> Result<AppConfig, ConfigError> {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "loaded .env file");
    }

    layered(AppConfig::from_env())
}

/// Apply `APP__` overrides on top of `defaults`
///
/// Fails when the resulting token lifetime is not within one second to 24
/// hours.
pub fn layered(defaults: AppConfig) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = Config::builder()
        .add_source(Config::try_from(&defaults)?)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator(ENV_SEPARATOR)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()?;

    if !config.auth.jwt.has_valid_lifetime() {
        return Err(ConfigError::Message(format!(
            "auth.jwt.token_lifetime_seconds must be between 1 and {}, got {}",
            MAX_TOKEN_LIFETIME_SECONDS, config.auth.jwt.token_lifetime_seconds
        )));
    }

    Ok(config)
}
