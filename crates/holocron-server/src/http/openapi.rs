use aide::axum::{routing::get, ApiRouter};
use aide::openapi::{Info, OpenApi};
use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use holocron_core::{FavoritesResponse, PersonResponse, PlanetResponse, UserResponse};

use crate::app::AppState;
use crate::domains::users::http::GreetingResponse;
use crate::http::routes::health::HealthResponse;
use crate::http::routes::sitemap::SitemapResponse;

pub fn build_openapi() -> OpenApi {
    let mut api = OpenApi {
        info: Info {
            title: "holocron-server".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            ..Default::default()
        },
        ..Default::default()
    };

    let _ = doc_router().finish_api(&mut api);
    api
}

/// Mirrors the live routes with placeholder handlers that only carry the
/// request and response types.
fn doc_router() -> ApiRouter<AppState> {
    ApiRouter::new()
        .api_route("/", get(sitemap))
        .api_route("/health", get(health))
        .api_route("/user", get(hello))
        .api_route("/users", get(users_list))
        .api_route("/users/favorites", get(users_favorites))
        .api_route("/people", get(people_list))
        .api_route("/people/:id", get(people_get))
        .api_route("/planets", get(planets_list))
        .api_route("/planets/:id", get(planets_get))
}

fn not_implemented<T>(body: T) -> (StatusCode, Json<T>) {
    (StatusCode::NOT_IMPLEMENTED, Json(body))
}

async fn sitemap() -> (StatusCode, Json<SitemapResponse>) {
    not_implemented(SitemapResponse {
        message: String::new(),
        endpoints: Vec::new(),
    })
}

async fn health() -> (StatusCode, Json<HealthResponse>) {
    not_implemented(HealthResponse {
        status: "not_implemented",
        version: "0.0.0",
        build_commit: None,
        backend: "none",
        uptime_seconds: 0,
    })
}

async fn hello() -> (StatusCode, Json<GreetingResponse>) {
    not_implemented(GreetingResponse { msg: "" })
}

async fn users_list() -> (StatusCode, Json<Vec<UserResponse>>) {
    not_implemented(Vec::new())
}

async fn users_favorites() -> (StatusCode, Json<FavoritesResponse>) {
    not_implemented(FavoritesResponse {
        user_id: 0,
        people: Vec::new(),
        planets: Vec::new(),
    })
}

async fn people_list() -> (StatusCode, Json<Vec<PersonResponse>>) {
    not_implemented(Vec::new())
}

async fn people_get(Path(_id): Path<i64>) -> (StatusCode, Json<PersonResponse>) {
    not_implemented(PersonResponse {
        id: 0,
        name: String::new(),
        gender: None,
        birth_year: None,
        height: None,
        hair_color: None,
        eye_color: None,
    })
}

async fn planets_list() -> (StatusCode, Json<Vec<PlanetResponse>>) {
    not_implemented(Vec::new())
}

async fn planets_get(Path(_id): Path<i64>) -> (StatusCode, Json<PlanetResponse>) {
    not_implemented(PlanetResponse {
        id: 0,
        name: String::new(),
        climate: None,
        terrain: None,
        population: None,
        diameter: None,
        gravity: None,
    })
}
