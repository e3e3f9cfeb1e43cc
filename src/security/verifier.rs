//! Credential verification against the realm registry.
//!
//! # Responsibilities
//! - Resolve the realm for a domain (exact match, first entry wins)
//! - Scan the realm's users for a matching name and password hash
//! - Produce an access decision, or report an unknown domain
//!
//! # Design Decisions
//! - Unknown domain is `None`, not a denial: callers answer 404 so that
//!   unknown domains look like routing misses
//! - No suspension points; the registry is read without locks

use std::sync::Arc;

use crate::registry::Registry;

/// Reason attached to every denial.
pub const DENIED_BY_POLICY: &str = "denied by policy";

/// Grant/deny verdict for a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessDecision {
    granted: bool,
    reason: Option<String>,
}

impl AccessDecision {
    pub fn granted() -> Self {
        Self {
            granted: true,
            reason: None,
        }
    }

    pub fn denied(reason: impl Into<String>) -> Self {
        Self {
            granted: false,
            reason: Some(reason.into()),
        }
    }

    pub fn is_granted(&self) -> bool {
        self.granted
    }

    /// Human-readable reason, if any.
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }
}

/// Verifies submitted credentials against a frozen registry.
#[derive(Debug, Clone)]
pub struct CredentialVerifier {
    registry: Arc<Registry>,
}

impl CredentialVerifier {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    /// Verify `username` / `submitted_hash` within `domain`.
    ///
    /// Returns `None` when the domain is not registered.
    pub fn verify(
        &self,
        domain: &str,
        username: &str,
        submitted_hash: &str,
    ) -> Option<AccessDecision> {
        let realm = self.registry.realm(domain)?;

        let decision = if realm.authenticate(username, submitted_hash) {
            AccessDecision::granted()
        } else {
            AccessDecision::denied(DENIED_BY_POLICY)
        };
        Some(decision)
    }
}
