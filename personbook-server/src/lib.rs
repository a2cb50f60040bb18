//! personbook-server: person records over server-rendered HTML forms
//!
//! Lists, creates, edits, and deletes person records stored in
//! PostgreSQL. Handlers talk to the store only through `PersonStore`.

pub mod db;
pub mod http;
pub mod models;
pub mod views;

pub use db::{MemoryPersonStore, PersonStore, PgPersonStore};
pub use http::{run_server, ServerConfig, ServerError};
