//! Main token service implementation

use chrono::Utc;

use crate::domain::entities::session::{AuthenticatedUser, Identity, TokenHeader, TokenPayload};
use crate::errors::{DomainError, TokenError};

use super::codec::{decode_segment, encode_segment, sign, verify_signature};
use super::config::TokenServiceConfig;

/// Issues and verifies signed session tokens
///
/// A token is `base64url(header) "." base64url(payload) "." base64url(hmac)`,
/// where the HMAC-SHA256 covers the first two encoded segments joined by a
/// dot. The service holds nothing but its configuration, so a single
/// instance can be shared across threads.
pub struct TokenService {
    config: TokenServiceConfig,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        Self { config }
    }

    /// Token lifetime in seconds
    pub fn token_lifetime_seconds(&self) -> i64 {
        self.config.token_lifetime_seconds
    }

    /// Issues a token for `identity`, valid for the configured lifetime from now
    pub fn issue(&self, identity: &Identity) -> Result<String, DomainError> {
        self.issue_at(identity, Utc::now().timestamp())
    }

    /// Issues a token as if the current time were `now` (unix seconds)
    ///
    /// Deterministic: the same identity and `now` always produce the same token.
    /// A non-positive lifetime, or one that overflows the expiry, fails with
    /// `TokenGenerationFailed`.
    pub fn issue_at(&self, identity: &Identity, now: i64) -> Result<String, DomainError> {
        let lifetime = self.config.token_lifetime_seconds;
        let expires_at = now
            .checked_add(lifetime)
            .filter(|_| lifetime > 0)
            .ok_or_else(|| {
                tracing::error!(lifetime, "refusing to issue token with invalid lifetime");
                TokenError::TokenGenerationFailed
            })?;
        let payload = TokenPayload::for_identity(identity, expires_at);

        let header_json = serde_json::to_vec(&TokenHeader::default())
            .map_err(|_| TokenError::TokenGenerationFailed)?;
        let payload_json =
            serde_json::to_vec(&payload).map_err(|_| TokenError::TokenGenerationFailed)?;

        let signing_input = format!(
            "{}.{}",
            encode_segment(header_json),
            encode_segment(payload_json)
        );
        let signature = sign(self.config.secret.as_bytes(), &signing_input)?;

        tracing::debug!(subject_id = %identity.subject_id, expires_at = payload.expires_at, "issued session token");
        Ok(format!("{}.{}", signing_input, signature))
    }

    /// Verifies `token` against the current time
    pub fn verify(&self, token: &str) -> Result<AuthenticatedUser, DomainError> {
        self.verify_at(token, Utc::now().timestamp())
    }

    /// Verifies `token` as if the current time were `now` (unix seconds)
    ///
    /// Parse, then check the signature over the encoded segments, then decode
    /// the payload and check expiry. The payload is never read before its
    /// signature has been accepted.
    pub fn verify_at(&self, token: &str, now: i64) -> Result<AuthenticatedUser, DomainError> {
        self.check(token, now).map_err(|reason| {
            tracing::debug!(%reason, "session token rejected");
            DomainError::from(reason)
        })
    }

    fn check(&self, token: &str, now: i64) -> Result<AuthenticatedUser, TokenError> {
        let (header, payload, signature) = split_token(token)?;

        // An undecodable signature cannot match any HMAC
        let signature = decode_segment(signature).map_err(|_| TokenError::InvalidSignature)?;
        let signing_input = format!("{}.{}", header, payload);
        verify_signature(self.config.secret.as_bytes(), &signing_input, &signature)?;

        let payload_json = decode_segment(payload).map_err(|_| TokenError::MalformedToken)?;
        let claims: TokenPayload =
            serde_json::from_slice(&payload_json).map_err(|_| TokenError::MalformedToken)?;

        if !claims.is_valid_at(now) {
            return Err(TokenError::TokenExpired);
        }

        Ok(claims.into_authenticated_user())
    }
}

/// Splits a token into exactly three non-empty segments
fn split_token(token: &str) -> Result<(&str, &str, &str), TokenError> {
    let mut parts = token.split('.');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(header), Some(payload), Some(signature), None)
            if !header.is_empty() && !payload.is_empty() && !signature.is_empty() =>
        {
            Ok((header, payload, signature))
        }
        _ => Err(TokenError::MalformedToken),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_token() {
        assert_eq!(split_token("a.b.c"), Ok(("a", "b", "c")));
        assert_eq!(split_token(""), Err(TokenError::MalformedToken));
        assert_eq!(split_token("abc"), Err(TokenError::MalformedToken));
        assert_eq!(split_token("a.b"), Err(TokenError::MalformedToken));
        assert_eq!(split_token("a..c"), Err(TokenError::MalformedToken));
        assert_eq!(split_token("a.b."), Err(TokenError::MalformedToken));
        assert_eq!(split_token("a.b.c.d"), Err(TokenError::MalformedToken));
    }
}
