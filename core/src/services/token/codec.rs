//! Segment encoding and HMAC-SHA256 signing for session tokens.

use base64::{
    alphabet,
    engine::{
        general_purpose::{GeneralPurpose, GeneralPurposeConfig},
        DecodePaddingMode,
    },
    DecodeError, Engine,
};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::errors::TokenError;

type HmacSha256 = Hmac<Sha256>;

/// URL-safe alphabet, no padding on output, padding tolerated on input
const SEGMENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

pub(crate) fn encode_segment(bytes: impl AsRef<[u8]>) -> String {
    SEGMENT.encode(bytes)
}

pub(crate) fn decode_segment(segment: &str) -> Result<Vec<u8>, DecodeError> {
    SEGMENT.decode(segment)
}

fn mac(secret: &[u8], signing_input: &str) -> Result<HmacSha256, TokenError> {
    let mut mac =
        HmacSha256::new_from_slice(secret).map_err(|_| TokenError::TokenGenerationFailed)?;
    mac.update(signing_input.as_bytes());
    Ok(mac)
}

/// HMAC-SHA256 of `signing_input`, base64url-encoded
pub(crate) fn sign(secret: &[u8], signing_input: &str) -> Result<String, TokenError> {
    let tag = mac(secret, signing_input)?.finalize().into_bytes();
    Ok(encode_segment(tag))
}

/// Checks `signature` against `signing_input` in constant time
pub(crate) fn verify_signature(
    secret: &[u8],
    signing_input: &str,
    signature: &[u8],
) -> Result<(), TokenError> {
    mac(secret, signing_input)
        .map_err(|_| TokenError::InvalidSignature)?
        .verify_slice(signature)
        .map_err(|_| TokenError::InvalidSignature)
}
