use dx_core::domain::entities::user::UserProfile;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /api/auth/login`
///
/// Missing fields deserialize as empty strings so presence is reported by
/// validation rather than as a JSON parse failure.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 254))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 1024))]
    pub password: String,
}

/// Body of `POST /api/auth/register`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 254))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 1024))]
    pub password: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

/// Successful login or registration; the token travels in the cookie only
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub success: bool,
    pub user: UserProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUserResponse {
    pub user: UserProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListResponse {
    pub users: Vec<UserProfile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
