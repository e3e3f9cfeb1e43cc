//! Credential verification endpoint for proxy sub-request authentication.
//!
//! An upstream proxy posts a domain-scoped username/password pair to
//! `/api/2/domains/{domain}/proxyauth` and receives a JSON access decision.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod registry;
pub mod routing;
pub mod security;

pub use config::schema::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use registry::Registry;
pub use security::{AccessDecision, CredentialVerifier, PasswordHash};
