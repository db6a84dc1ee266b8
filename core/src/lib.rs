//! # Dexboard Core
//!
//! Core business logic and domain layer for the Dexboard backend.
//! This crate contains the session token service, password digests, the
//! user repository interface, the authentication use cases built on them and
//! the analytics reduction behind the dashboard.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    AnalyticsData, AnalyticsReport, AuthenticatedUser, Identity, User, UserProfile,
};
pub use domain::value_objects::AuthOutcome;
pub use errors::{AuthError, DomainError, DomainResult, TokenError, ValidationError};
pub use repositories::{InMemoryUserRepository, UserRepository};
pub use services::{
    process_analytics, AuthService, AuthServiceConfig, LoginCommand, RegisterCommand, TokenService,
    TimeRange, TimeWindow, TokenServiceConfig,
};
