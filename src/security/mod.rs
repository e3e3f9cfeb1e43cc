//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     plaintext password → credential.rs (SHA-256 + base64, tagged)
//!     → PasswordHash stored in the Registry
//!
//! Per request:
//!     (domain, username, submitted hash)
//!     → verifier.rs (realm lookup, user scan)
//!     → AccessDecision, or None for an unknown domain
//! ```
//!
//! # Design Decisions
//! - Plaintext never outlives the loader
//! - Callers submit pre-hashed passwords; nothing is re-hashed per request
//! - Hash comparison is constant time

pub mod credential;
pub mod verifier;

pub use credential::PasswordHash;
pub use verifier::{AccessDecision, CredentialVerifier, DENIED_BY_POLICY};
