//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID generation/propagation)
//!     → handlers.rs (registry lookups, serialization)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod server;

pub use request::{RequestIdMaker, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
