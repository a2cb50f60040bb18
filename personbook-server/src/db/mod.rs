//! Database layer - connection pool, schema, and the person store
//!
//! Handlers only see the `PersonStore` trait. `PgPersonStore` is the
//! production implementation; `MemoryPersonStore` backs tests and demos.

pub mod pool;
pub mod migrations;
pub mod memory;
pub mod repos;

pub use pool::{create_pool, create_lazy_pool};
pub use memory::MemoryPersonStore;
pub use repos::*;
