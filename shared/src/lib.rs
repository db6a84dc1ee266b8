//! Shared utilities and common types for the Dexboard server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error response structures

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, Environment, JwtConfig, LoggingConfig, ServerConfig, SessionConfig,
};
pub use errors::{error_codes, ErrorResponse};
