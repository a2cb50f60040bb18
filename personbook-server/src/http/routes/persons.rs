//! Person endpoints
//!
//! Every data route checks store availability before touching it. Routes
//! with an id get that check from the `PersonId` extractor.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Redirect},
    routing::{get, put},
    Router,
};

use crate::http::error::{PageError, NOT_CONNECTED};
use crate::http::extractors::{PersonId, PersonInput};
use crate::http::server::AppState;
use crate::views::{self, FormMode, FormValues};

const LIST_PATH: &str = "/person";

/// GET / - redirect to the list
async fn index() -> Redirect {
    Redirect::to(LIST_PATH)
}

/// GET /person - list everyone, newest first
async fn list_people(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    if !state.store.is_available().await {
        return Err(PageError::UnavailableDiagnostic);
    }

    let people = state
        .store
        .list_all()
        .await
        .map_err(|e| PageError::db("Error fetching people", e))?;

    Ok(Html(views::list_page(&people)))
}

/// GET /person/new - empty creation form
async fn new_person() -> Html<String> {
    Html(views::person_form(FormMode::Create, &FormValues::default(), &[]))
}

/// POST /person - validate and insert
async fn create_person(
    State(state): State<Arc<AppState>>,
    PersonInput(form): PersonInput,
) -> Result<Redirect, PageError> {
    let values = FormValues::from(&form);

    if !state.store.is_available().await {
        return Err(PageError::Form {
            status: StatusCode::SERVICE_UNAVAILABLE,
            mode: FormMode::Create,
            values,
            errors: vec![NOT_CONNECTED.to_string()],
        });
    }

    let fields = form
        .validate()
        .map_err(|errors| PageError::invalid(FormMode::Create, values.clone(), errors))?;

    let person = state
        .store
        .insert(fields)
        .await
        .map_err(|e| PageError::Form {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            mode: FormMode::Create,
            values,
            errors: vec![format!("Error creating person: {}", e)],
        })?;

    tracing::info!(id = %person.id, "Created person");
    Ok(Redirect::to(LIST_PATH))
}

/// GET /person/{id}/edit - pre-filled edit form
async fn edit_person(
    State(state): State<Arc<AppState>>,
    PersonId(id): PersonId,
) -> Result<Html<String>, PageError> {
    let person = state
        .store
        .get_by_id(id)
        .await
        .map_err(|e| PageError::db("Error fetching person", e))?;

    Ok(Html(views::person_form(
        FormMode::Edit(id),
        &FormValues::from(&person),
        &[],
    )))
}

/// PUT /person/{id} - validate and update
async fn update_person(
    State(state): State<Arc<AppState>>,
    PersonId(id): PersonId,
    PersonInput(form): PersonInput,
) -> Result<Redirect, PageError> {
    let fields = match form.validate() {
        Ok(fields) => fields,
        Err(errors) => {
            // Show the stored record with the submitted fields on top.
            let person = state
                .store
                .get_by_id(id)
                .await
                .map_err(|e| PageError::db("Error fetching person", e))?;
            let values = FormValues::from(&person).overlay(&form);
            return Err(PageError::invalid(FormMode::Edit(id), values, errors));
        }
    };

    state
        .store
        .update_by_id(id, fields)
        .await
        .map_err(|e| PageError::db("Error updating person", e))?;

    tracing::info!(%id, "Updated person");
    Ok(Redirect::to(LIST_PATH))
}

/// GET /person/{id}/delete - confirmation page
async fn confirm_delete(
    State(state): State<Arc<AppState>>,
    PersonId(id): PersonId,
) -> Result<Html<String>, PageError> {
    let person = state
        .store
        .get_by_id(id)
        .await
        .map_err(|e| PageError::db("Error fetching person", e))?;

    Ok(Html(views::delete_page(&person)))
}

/// DELETE /person/{id} - remove and return to the list
async fn delete_person(
    State(state): State<Arc<AppState>>,
    PersonId(id): PersonId,
) -> Result<Redirect, PageError> {
    state
        .store
        .delete_by_id(id)
        .await
        .map_err(|e| PageError::db("Error deleting person", e))?;

    tracing::info!(%id, "Deleted person");
    Ok(Redirect::to(LIST_PATH))
}

/// Person routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/person", get(list_people).post(create_person))
        .route("/person/new", get(new_person))
        .route(
            "/person/{id}",
            put(update_person)
                .patch(update_person)
                .delete(delete_person),
        )
        .route("/person/{id}/edit", get(edit_person))
        .route("/person/{id}/delete", get(confirm_delete))
}
