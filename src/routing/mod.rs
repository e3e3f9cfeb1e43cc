//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, raw path)
//!     → router.rs (method check, route lookup)
//!     → matcher.rs (segment-by-segment path match)
//!     → Return: extracted domain or NoMatch
//!
//! Route Compilation (at startup):
//!     path template
//!     → split into literal and capture segments
//!     → freeze as immutable Router
//! ```
//!
//! # Design Decisions
//! - Exact segment count; no prefix or wildcard matching
//! - Literal segments are case-sensitive
//! - Captured segments are returned raw (no decoding, no trimming)
//! - Wrong method and wrong path are the same NoMatch

pub mod matcher;
pub mod router;

pub use router::{RouteMatch, Router, PROXYAUTH_TEMPLATE};
