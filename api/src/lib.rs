//! HTTP surface of the Dexboard backend: session cookie auth routes, the
//! session gate middleware and the application factory used by the binary.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::{create_app, AppState};
