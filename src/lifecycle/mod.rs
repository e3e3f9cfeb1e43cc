//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Parse args → Load config → Validate → Load registry → Bind listener
//!
//! Shutdown (shutdown.rs):
//!     Signal received (or owner dropped) → Stop accepting → Drain in-flight requests → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then registry, then listener
//! - Fail fast: the listener is never bound with a partial registry

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::{Shutdown, ShutdownCause, ShutdownSignal};
pub use startup::{Cli, StartupError};
