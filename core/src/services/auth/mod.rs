//! Authentication service module
//!
//! - User registration and login against the user store
//! - Session token issuance on success
//! - Current-user lookup from a session token

mod commands;
mod config;
mod service;

#[cfg(test)]
mod tests;

pub use commands::{LoginCommand, RegisterCommand};
pub use config::AuthServiceConfig;
pub use service::AuthService;
