use axum::Router;
use std::time::Instant;

use crate::config::ServerConfig;
use holocron_db::DbPool;

/// Application context shared by every handler. Built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub started_at: Instant,
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(db: DbPool, config: ServerConfig) -> Self {
        Self {
            db,
            started_at: Instant::now(),
            config,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    crate::http::router().with_state(state)
}
