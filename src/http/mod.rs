//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID)
//!     → handler.rs (routing, verification)
//!     → credentials.rs (form or multipart body)
//!     → response.rs (JSON decision or bare status)
//!     → Send to client
//! ```

pub mod credentials;
pub mod handler;
pub mod request;
pub mod response;
pub mod server;

pub use request::{UuidRequestId, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
