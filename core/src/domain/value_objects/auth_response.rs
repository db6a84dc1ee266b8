//! Authentication outcome value object returned by login and registration.

use crate::domain::entities::user::UserProfile;

/// Result of a successful login or registration
///
/// Carries the freshly issued session token and the public view of the
/// authenticated user. The token is meant for the session cookie and is
/// never serialized into a response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthOutcome {
    /// Signed session token
    pub token: String,

    /// Authenticated user
    pub user: UserProfile,
}

impl AuthOutcome {
    /// Creates a new authentication outcome
    pub fn new(token: String, user: UserProfile) -> Self {
        Self { token, user }
    }
}
