//! Session identity and the signed token's header/payload structures.

use serde::{Deserialize, Serialize};

/// Role assigned when a token carries none
pub const DEFAULT_ROLE: &str = "user";

/// Algorithm name written into every token header
pub const TOKEN_ALGORITHM: &str = "HS256";

/// Token type written into every token header
pub const TOKEN_TYPE: &str = "JWT";

/// Identity a session token is issued for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Subject identifier (user ID)
    pub subject_id: String,
    pub email: String,
    pub role: String,
}

impl Identity {
    pub fn new(
        subject_id: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            subject_id: subject_id.into(),
            email: email.into(),
            role: role.into(),
        }
    }
}

/// Identity recovered from a verified session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: String,
    pub email: String,
    pub role: String,
}

/// First token segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenHeader {
    pub alg: String,
    pub typ: String,
}

impl Default for TokenHeader {
    fn default() -> Self {
        Self {
            alg: TOKEN_ALGORITHM.to_string(),
            typ: TOKEN_TYPE.to_string(),
        }
    }
}

/// Second token segment.
///
/// Field order and names are part of the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    /// Subject identifier
    #[serde(rename = "userId")]
    pub subject_id: String,

    pub email: String,

    /// Role; tokens from older issuers may omit it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Expiry (seconds since epoch)
    #[serde(rename = "exp")]
    pub expires_at: i64,
}

impl TokenPayload {
    /// Creates the payload for an identity expiring at `expires_at`
    pub fn for_identity(identity: &Identity, expires_at: i64) -> Self {
        Self {
            subject_id: identity.subject_id.clone(),
            email: identity.email.clone(),
            role: Some(identity.role.clone()),
            expires_at,
        }
    }

    /// Whether the token is still inside its validity window at `now`
    pub fn is_valid_at(&self, now: i64) -> bool {
        self.expires_at > now
    }

    /// Converts the claims into the verified identity, defaulting an absent or empty role
    pub fn into_authenticated_user(self) -> AuthenticatedUser {
        let role = self
            .role
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| DEFAULT_ROLE.to_string());

        AuthenticatedUser {
            id: self.subject_id,
            email: self.email,
            role,
        }
    }
}
