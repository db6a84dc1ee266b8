pub mod analytics;
pub mod auth;

pub use analytics::TimeRangeQuery;
pub use auth::{
    CurrentUserResponse, LoginRequest, MessageResponse, RegisterRequest, SessionResponse,
    UserListResponse,
};
pub use dx_shared::errors::ErrorResponse;
