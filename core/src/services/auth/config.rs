//! Configuration for the authentication service

use crate::domain::entities::session::DEFAULT_ROLE;

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Whether new accounts may be registered
    pub allow_registration: bool,
    /// Role written into tokens issued at login and registration
    pub default_role: String,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            allow_registration: true,
            default_role: DEFAULT_ROLE.to_string(),
        }
    }
}
