//! Domain models with validation at construction
//!
//! Submitted forms are validated into `PersonFields` before they reach the
//! store. Invalid input returns every `ValidationError` found, not a panic.

pub mod validation;
pub mod person;

pub use validation::ValidationError;
pub use person::{Gender, Person, PersonFields, PersonForm};
