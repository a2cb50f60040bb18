//! Store implementations for database access
//!
//! - `PersonStore` is the gateway contract handlers depend on
//! - Missing ids surface as `DbError::NotFound`, never as `None`
//! - No retries; driver errors propagate with their message

pub mod persons;

pub use persons::{DbError, PersonStore, PgPersonStore};
