#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use holocron_core::{NewPerson, NewPlanet, NewUser};
use holocron_db::repo::{PersonRepo, PlanetRepo, UserRepo};
use holocron_db::{connect_with_max, migrate, DbPool};
use holocron_server::app::AppState;
use holocron_server::bootstrap::{build_app, build_service};
use holocron_server::config::ServerConfig;
use serde_json::Value;
use tower::ServiceExt;
use tower_http::normalize_path::NormalizePath;
use tracing_subscriber::EnvFilter;

fn init_test_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("holocron_server=debug"))
            .with_test_writer()
            .try_init();
    });
}

/// Fresh in-memory SQLite database; one connection so every query sees the
/// same data.
pub async fn setup_db() -> DbPool {
    let pool = connect_with_max("sqlite::memory:", 1)
        .await
        .expect("connect sqlite");
    migrate(&pool).await.expect("migrate");
    pool
}

pub async fn insert_user(pool: &DbPool, email: &str) -> i64 {
    UserRepo::new(pool)
        .create(&NewUser {
            email: email.to_string(),
            password: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
            is_active: true,
        })
        .await
        .expect("insert user")
}

pub async fn insert_person(pool: &DbPool, name: &str) -> i64 {
    PersonRepo::new(pool)
        .create(&NewPerson {
            name: name.to_string(),
            gender: Some("female".to_string()),
            birth_year: Some("19BBY".to_string()),
            ..NewPerson::default()
        })
        .await
        .expect("insert person")
}

pub async fn insert_planet(pool: &DbPool, name: &str) -> i64 {
    PlanetRepo::new(pool)
        .create(&NewPlanet {
            name: name.to_string(),
            climate: Some("arid".to_string()),
            terrain: Some("desert".to_string()),
            ..NewPlanet::default()
        })
        .await
        .expect("insert planet")
}

pub struct TestApp {
    pub service: NormalizePath<Router>,
    pub pool: DbPool,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_config(ServerConfig::default()).await
    }

    pub async fn with_config(config: ServerConfig) -> Self {
        init_test_tracing();
        let pool = setup_db().await;
        let state = AppState::new(pool.clone(), config.clone());
        let service = build_service(build_app(&config, state));
        Self { service, pool }
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        self.service
            .clone()
            .oneshot(request)
            .await
            .expect("response")
    }

    pub async fn get(&self, path: &str) -> Response {
        let request = Request::builder()
            .uri(path)
            .body(Body::empty())
            .expect("request");
        self.send(request).await
    }

    pub async fn get_json(&self, path: &str) -> (StatusCode, Value) {
        let response = self.get(path).await;
        let status = response.status();
        (status, body_json(response).await)
    }
}

pub async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

pub async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    String::from_utf8_lossy(&bytes).into_owned()
}
