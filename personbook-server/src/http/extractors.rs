//! Custom Axum extractors

use std::sync::Arc;

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use axum::{Form, Json};
use uuid::Uuid;

use super::error::PageError;
use super::server::AppState;
use crate::models::PersonForm;

/// Extract a person id from the path, once the store is reachable
///
/// An unavailable store is reported before the id is looked at. Anything
/// that is not a UUID cannot name a stored person, so it is reported as
/// not found.
pub struct PersonId(pub Uuid);

impl FromRequestParts<Arc<AppState>> for PersonId {
    type Rejection = PageError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        if !state.store.is_available().await {
            return Err(PageError::Unavailable);
        }

        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| PageError::NotFound)?;

        let uuid = Uuid::parse_str(&id).map_err(|_| PageError::NotFound)?;
        Ok(Self(uuid))
    }
}

/// Extract a submitted person form from a urlencoded or JSON body
///
/// A request with neither content type is treated as an empty form so the
/// user sees the usual validation messages.
pub struct PersonInput(pub PersonForm);

impl<S> FromRequest<S> for PersonInput
where
    S: Send + Sync,
{
    type Rejection = PageError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("application/json") {
            let Json(form) = Json::<PersonForm>::from_request(req, state)
                .await
                .map_err(|e| PageError::BadRequest(e.body_text()))?;
            Ok(Self(form))
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(form) = Form::<PersonForm>::from_request(req, state)
                .await
                .map_err(|e| PageError::BadRequest(e.body_text()))?;
            Ok(Self(form))
        } else {
            Ok(Self(PersonForm::default()))
        }
    }
}
