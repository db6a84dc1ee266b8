//! Shared setup for the API integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use dx_api::AppState;
use dx_core::repositories::InMemoryUserRepository;
use dx_shared::config::{AppConfig, Environment, JwtConfig};

pub const TEST_SECRET: &str = "test-secret";

pub fn test_config(environment: Environment) -> AppConfig {
    let mut config = AppConfig::for_environment(environment);
    config.auth.jwt = JwtConfig::new(TEST_SECRET);
    config
}

pub fn test_state(environment: Environment) -> web::Data<AppState<InMemoryUserRepository>> {
    let repository = Arc::new(InMemoryUserRepository::new());
    web::Data::new(AppState::new(repository, &test_config(environment)))
}

pub fn test_state_with_lifetime(
    lifetime_seconds: i64,
) -> web::Data<AppState<InMemoryUserRepository>> {
    let mut config = test_config(Environment::Development);
    config.auth.jwt.token_lifetime_seconds = lifetime_seconds;
    let repository = Arc::new(InMemoryUserRepository::new());
    web::Data::new(AppState::new(repository, &config))
}

pub fn register_body(email: &str) -> serde_json::Value {
    serde_json::json!({
        "email": email,
        "password": "hunter2",
        "name": "Ana",
    })
}
