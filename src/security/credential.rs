//! Password hashing scheme.
//!
//! Stored and submitted credentials share one textual form:
//! `{SHA256}` followed by the standard (padded) base64 encoding of the raw
//! 32-byte SHA-256 digest of the plaintext.

use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Tag identifying the hashing scheme.
pub const SCHEME_TAG: &str = "{SHA256}";

/// A hashed password in `{SHA256}<base64>` form.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Hash a plaintext secret.
    pub fn digest(plaintext: &str) -> Self {
        let digest = Sha256::digest(plaintext.as_bytes());
        Self(format!("{}{}", SCHEME_TAG, STANDARD.encode(digest)))
    }

    /// Compare against a caller-submitted hash.
    ///
    /// Exact byte equality, evaluated in constant time for equal lengths.
    pub fn matches(&self, submitted: &str) -> bool {
        self.0.as_bytes().ct_eq(submitted.as_bytes()).into()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Hashes stay out of logs.
impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(..)")
    }
}

impl fmt::Display for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
