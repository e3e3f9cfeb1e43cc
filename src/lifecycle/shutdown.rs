//! Graceful stop for the verification listener.
//!
//! `main` keeps the `Shutdown` in the signal task and hands one
//! `ShutdownSignal` to `HttpServer::run`. Integration tests run several
//! services in one process, each with its own `Shutdown`.
//!
//! The signal is backed by a broadcast channel so it also resolves when the
//! `Shutdown` is dropped without firing: a test service that goes out of
//! scope stops its server instead of leaking it.

use std::fmt;

use tokio::sync::broadcast::{self, error::RecvError};

/// Why a server stopped accepting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownCause {
    /// `Shutdown::trigger` was called.
    Triggered,
    /// The `Shutdown` was dropped.
    Abandoned,
}

impl fmt::Display for ShutdownCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShutdownCause::Triggered => f.write_str("triggered"),
            ShutdownCause::Abandoned => f.write_str("abandoned"),
        }
    }
}

/// Owner side: fires once for every subscribed server.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Signal for one served listener.
    pub fn subscribe(&self) -> ShutdownSignal {
        ShutdownSignal {
            rx: self.tx.subscribe(),
        }
    }

    /// Stop every subscribed server. No-op when none is running.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Server side of a `Shutdown`.
pub struct ShutdownSignal {
    rx: broadcast::Receiver<()>,
}

impl ShutdownSignal {
    /// Resolve once the owner triggers or goes away.
    pub async fn fired(mut self) -> ShutdownCause {
        match self.rx.recv().await {
            Ok(()) | Err(RecvError::Lagged(_)) => ShutdownCause::Triggered,
            Err(RecvError::Closed) => ShutdownCause::Abandoned,
        }
    }
}
