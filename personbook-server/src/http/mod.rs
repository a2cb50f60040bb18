//! HTTP server layer
//!
//! Axum server with:
//! - Method override for HTML forms
//! - Request tracing and timeout
//! - Static files from the public directory
//! - Graceful shutdown
//! - HTML error pages

pub mod server;
pub mod error;
pub mod extractors;
pub mod method_override;
pub mod routes;

pub use server::{build_app, run_server, AppState, ServerConfig, ServerError};
pub use error::PageError;
