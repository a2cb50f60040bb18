//! Validation error types

use std::fmt;

use super::Gender;

/// Validation error for a submitted person form
///
/// The `Display` text is shown to users verbatim above the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Name missing or blank
    NameRequired,

    /// Age missing, not a number, or negative
    InvalidAge,

    /// Gender missing or blank
    GenderRequired,

    /// Gender present but not one of the allowed values
    InvalidGender { value: String },

    /// Mobile number missing or blank
    MobileNumberRequired,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameRequired => write!(f, "Name is required"),
            Self::InvalidAge => write!(f, "Valid age is required"),
            Self::GenderRequired => write!(f, "Gender is required"),
            Self::InvalidGender { .. } => {
                let allowed: Vec<&str> = Gender::ALL.iter().map(|g| g.as_str()).collect();
                write!(f, "Gender must be one of {}", allowed.join(", "))
            }
            Self::MobileNumberRequired => write!(f, "Mobile number is required"),
        }
    }
}

impl std::error::Error for ValidationError {}
