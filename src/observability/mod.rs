//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (decision counters, latency histogram)
//!
//! Consumers:
//!     → stdout (pretty or JSON)
//!     → Metrics endpoint (Prometheus scrape, separate listener)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through request spans
//! - Metrics are cheap (no-ops until a recorder is installed)
//! - Credentials never appear in logs or metric labels

pub mod logging;
pub mod metrics;
