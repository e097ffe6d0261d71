use axum::{extract::State, routing::get, Json, Router};
use holocron_core::PersonResponse;

use crate::app::AppState;
use crate::http::error::ApiError;
use crate::http::extract::RecordId;

use super::service;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/people", get(list_people))
        .route("/people/:id", get(get_person))
}

#[tracing::instrument(skip(state))]
async fn list_people(State(state): State<AppState>) -> Result<Json<Vec<PersonResponse>>, ApiError> {
    let people = service::list_people(&state).await?;
    Ok(Json(people.into_iter().map(PersonResponse::from).collect()))
}

#[tracing::instrument(skip(state))]
async fn get_person(
    State(state): State<AppState>,
    id: RecordId,
) -> Result<Json<PersonResponse>, ApiError> {
    let person = service::get_person(&state, id).await?;
    Ok(Json(person.into()))
}
