//! Token service module for signed session tokens
//!
//! This module handles:
//! - Issuing compact HMAC-SHA256 signed tokens with a fixed lifetime
//! - Verifying tokens (shape, signature, expiry)
//! - Password digests for credential storage

mod codec;
mod config;
mod password;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use password::{compare, hash_secret};
pub use service::TokenService;
