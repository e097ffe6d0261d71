use axum::{extract::State, routing::get, Json, Router};
use holocron_core::PlanetResponse;

use crate::app::AppState;
use crate::http::error::ApiError;
use crate::http::extract::RecordId;

use super::service;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/planets", get(list_planets))
        .route("/planets/:id", get(get_planet))
}

#[tracing::instrument(skip(state))]
async fn list_planets(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlanetResponse>>, ApiError> {
    let planets = service::list_planets(&state).await?;
    Ok(Json(planets.into_iter().map(PlanetResponse::from).collect()))
}

#[tracing::instrument(skip(state))]
async fn get_planet(
    State(state): State<AppState>,
    id: RecordId,
) -> Result<Json<PlanetResponse>, ApiError> {
    let planet = service::get_planet(&state, id).await?;
    Ok(Json(planet.into()))
}
