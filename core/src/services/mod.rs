//! Business services containing domain logic and use cases.

pub mod analytics;
pub mod auth;
pub mod token;

// Re-export commonly used types
pub use analytics::{process_analytics, TimeRange, TimeWindow};
pub use auth::{AuthService, AuthServiceConfig, LoginCommand, RegisterCommand};
pub use token::{compare, hash_secret, TokenService, TokenServiceConfig};
