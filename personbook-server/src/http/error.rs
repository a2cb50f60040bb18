//! Page error types with IntoResponse
//!
//! Errors are rendered as HTML pages with the matching status code.
//! Form errors re-render the form the user submitted.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::db::repos::DbError;
use crate::models::ValidationError;
use crate::views::{self, FormMode, FormValues};

/// Shown when the store fails its availability check.
pub const NOT_CONNECTED: &str =
    "Database is not connected. Please start PostgreSQL and try again.";

/// Shown when a person id does not resolve.
pub const PERSON_NOT_FOUND: &str = "Person not found";

/// Page error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum PageError {
    /// Store unavailable (503, short message)
    Unavailable,

    /// Store unavailable on the list page (503, full diagnostic page)
    UnavailableDiagnostic,

    /// Person not found (404)
    NotFound,

    /// Request body could not be read (400)
    BadRequest(String),

    /// Store operation failed (500, logged)
    Internal {
        context: &'static str,
        message: String,
    },

    /// Re-render a person form with messages
    Form {
        status: StatusCode,
        mode: FormMode,
        values: FormValues,
        errors: Vec<String>,
    },
}

impl PageError {
    /// Map a store error, keeping not-found distinct from failures.
    pub fn db(context: &'static str, e: DbError) -> Self {
        match e {
            DbError::NotFound { .. } => Self::NotFound,
            other => Self::Internal {
                context,
                message: other.to_string(),
            },
        }
    }

    /// Form re-rendered with validation messages (400).
    pub fn invalid(mode: FormMode, values: FormValues, errors: Vec<ValidationError>) -> Self {
        Self::Form {
            status: StatusCode::BAD_REQUEST,
            mode,
            values,
            errors: errors.iter().map(ToString::to_string).collect(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unavailable | Self::UnavailableDiagnostic => StatusCode::SERVICE_UNAVAILABLE,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Form { status, .. } => *status,
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.status();
        let page = match self {
            Self::Unavailable => {
                tracing::warn!("Database unavailable");
                views::message_page("Service Unavailable", NOT_CONNECTED)
            }
            Self::UnavailableDiagnostic => {
                tracing::warn!("Database unavailable");
                views::unavailable_page()
            }
            Self::NotFound => views::message_page("Not Found", PERSON_NOT_FOUND),
            Self::BadRequest(message) => views::message_page("Bad Request", &message),
            Self::Internal { context, message } => {
                tracing::error!("{}: {}", context, message);
                views::message_page("Error", &format!("{}: {}", context, message))
            }
            Self::Form {
                mode,
                values,
                errors,
                ..
            } => {
                if status.is_server_error() {
                    tracing::error!(?errors, "form submission failed");
                }
                views::person_form(mode, &values, &errors)
            }
        };

        (status, Html(page)).into_response()
    }
}
