use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use holocron_core::{FavoritesResponse, PersonResponse, PlanetResponse, UserResponse};
use schemars::JsonSchema;
use serde::Serialize;

use crate::app::AppState;
use crate::domains::errors::ServiceError;
use crate::http::error::{ApiError, ErrorResponse};

use super::service;

#[derive(Serialize, JsonSchema)]
pub(crate) struct GreetingResponse {
    pub(crate) msg: &'static str,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/user", get(hello))
        .route("/users", get(list_users))
        .route("/users/favorites", get(favorites))
}

async fn hello() -> Json<GreetingResponse> {
    Json(GreetingResponse {
        msg: service::GREETING,
    })
}

#[tracing::instrument(skip(state))]
async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = service::list_users(&state).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Failures here answer with `{"error": ...}` rather than the usual
/// `{"message": ...}`; the detail stays in the logs.
#[tracing::instrument(skip(state))]
async fn favorites(State(state): State<AppState>) -> Response {
    match service::favorites(&state).await {
        Ok(favorites) => {
            let body = FavoritesResponse {
                user_id: favorites.user.id,
                people: favorites
                    .people
                    .into_iter()
                    .map(PersonResponse::from)
                    .collect(),
                planets: favorites
                    .planets
                    .into_iter()
                    .map(PlanetResponse::from)
                    .collect(),
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(ServiceError::NotFound(message)) => ApiError::not_found(message).into_response(),
        Err(ServiceError::DbError) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "internal_error",
            }),
        )
            .into_response(),
    }
}
