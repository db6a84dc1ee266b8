//! Password digests for credential storage.
//!
//! Independent of the token signing key: the digest is an unkeyed SHA-256
//! over the UTF-8 bytes, standard base64 with padding.

use base64::{engine::general_purpose::STANDARD, Engine};
use constant_time_eq::constant_time_eq;
use sha2::{Digest, Sha256};

/// Deterministic one-way digest of a plaintext secret
pub fn hash_secret(plaintext: &str) -> String {
    STANDARD.encode(Sha256::digest(plaintext.as_bytes()))
}

/// Whether `plaintext` hashes to `digest`, compared in constant time
pub fn compare(plaintext: &str, digest: &str) -> bool {
    constant_time_eq(hash_secret(plaintext).as_bytes(), digest.as_bytes())
}
