use axum::{extract::State, routing::get, Json, Router};
use schemars::JsonSchema;
use serde::Serialize;

use crate::app::AppState;
use crate::config::{MetricsConfig, ServerConfig};

/// Parameterless GET routes served by the router.
pub(crate) const SITEMAP_PATHS: &[&str] = &[
    "/",
    "/health",
    "/people",
    "/planets",
    "/user",
    "/users",
    "/users/favorites",
];

const DEFAULT_SERVER_NAME: &str = "holocron";

#[derive(Debug, Serialize, JsonSchema)]
pub(crate) struct SitemapResponse {
    pub(crate) message: String,
    pub(crate) endpoints: Vec<String>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(sitemap))
}

async fn sitemap(State(state): State<AppState>) -> Json<SitemapResponse> {
    Json(build_sitemap(&state.config))
}

pub(crate) fn build_sitemap(config: &ServerConfig) -> SitemapResponse {
    let mut endpoints: Vec<String> = SITEMAP_PATHS.iter().map(ToString::to_string).collect();
    if config.metrics.enabled {
        if let Ok(path) = metrics_route(&config.metrics) {
            endpoints.push(path.to_string());
        }
    }
    endpoints.sort();
    endpoints.dedup();

    let name = config
        .server
        .name
        .as_deref()
        .unwrap_or(DEFAULT_SERVER_NAME);
    SitemapResponse {
        message: format!("Welcome to {name}"),
        endpoints,
    }
}

/// Path the metrics endpoint is served on. Trailing slashes are dropped
/// since requests reach the router with theirs already trimmed.
pub(crate) fn metrics_route(metrics: &MetricsConfig) -> Result<&str, &'static str> {
    let path = metrics.endpoint.trim_end_matches('/');
    if !path.starts_with('/') || path.contains(':') || path.contains('*') {
        return Err("metrics_endpoint_invalid");
    }
    if SITEMAP_PATHS.contains(&path) {
        return Err("metrics_endpoint_conflict");
    }
    Ok(path)
}
