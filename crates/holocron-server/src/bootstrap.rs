use std::net::SocketAddr;

use axum::body::Body;
use axum::extract::{MatchedPath, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use axum::response::Response;
use axum::{middleware, routing::get, Router, ServiceExt};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::normalize_path::NormalizePath;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::app::{self, AppState};
use crate::config::{MetricsConfig, ServerConfig};
use crate::http::error::INTERNAL_ERROR_MESSAGE;
use crate::http::routes::sitemap::metrics_route;
use crate::infra::metrics;
use crate::runtime;
use crate::settings::Settings;
use holocron_db::DbPool;

pub fn log_startup(settings: &Settings) {
    tracing::info!(
        event = "server_startup",
        addr = %settings.addr,
        db_url = %holocron_db::redact_url(&settings.db_url),
        db_pool_max = settings.db_pool_max,
        auto_migrate = settings.config.database.auto_migrate,
        favorites_user_id = settings.config.favorites.user_id,
        favorites_limit = settings.config.favorites.limit,
        metrics_enabled = settings.config.metrics.enabled,
        server_name = ?settings.config.server.name,
        "Server configuration loaded"
    );
    if settings.config.server.cors_allowed_origins.is_empty() {
        tracing::info!(event = "cors_any_origin", "CORS allows any origin");
    }
}

pub fn init_metrics_registry(metrics_config: &MetricsConfig) {
    if !metrics_config.enabled {
        return;
    }
    #[cfg(target_os = "linux")]
    {
        let process_collector = prometheus::process_collector::ProcessCollector::for_self();
        if prometheus::default_registry()
            .register(Box::new(process_collector))
            .is_err()
        {
            tracing::warn!("failed to register process metrics");
        }
    }
    #[cfg(not(target_os = "linux"))]
    {
        tracing::warn!("process metrics are only available on linux");
    }
}

pub async fn connect_db(settings: &Settings) -> Result<DbPool, sqlx_core::Error> {
    let pool = holocron_db::connect_with_max(&settings.db_url, settings.db_pool_max).await?;
    tracing::info!(
        event = "db_connected",
        backend = pool.backend().as_str(),
        url = %holocron_db::redact_url(&settings.db_url)
    );
    Ok(pool)
}

/// Applies migrations on server start unless `database.auto_migrate` is off.
pub async fn prepare_db(
    settings: &Settings,
    db: &DbPool,
) -> Result<(), sqlx_core::migrate::MigrateError> {
    if !settings.config.database.auto_migrate {
        tracing::info!(event = "auto_migrate_skipped");
        return Ok(());
    }
    holocron_db::migrate(db).await?;
    tracing::info!(event = "migrations_applied", backend = db.backend().as_str());
    Ok(())
}

pub fn build_state(settings: &Settings, db: DbPool) -> AppState {
    AppState::new(db, settings.config.clone())
}

pub fn build_app(config: &ServerConfig, state: AppState) -> Router {
    let request_id_header = HeaderName::from_static("x-request-id");
    let mut app = app::build_router(state);
    if config.metrics.enabled {
        app = app.route_layer(middleware::from_fn(metrics::http_metrics));
        match metrics_route(&config.metrics) {
            Ok(path) => {
                app = app.route(
                    path,
                    get(|| async {
                        let (content_type, body) = metrics::render();
                        let mut response = Response::new(Body::from(body));
                        if let Ok(value) = HeaderValue::from_str(&content_type) {
                            response.headers_mut().insert(CONTENT_TYPE, value);
                        }
                        response
                    }),
                );
            }
            Err(reason) => {
                tracing::warn!(event = reason, endpoint = %config.metrics.endpoint);
            }
        }
    }
    app.layer(cors_layer(&config.server.cors_allowed_origins))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("unknown");
                let matched = request
                    .extensions()
                    .get::<MatchedPath>()
                    .map(MatchedPath::as_str)
                    .unwrap_or("unmatched");
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    path = %matched,
                    request_id = %request_id
                )
            }),
        )
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(CatchPanicLayer::custom(|err| {
            tracing::error!(event = "panic_recovered", error = ?err, "handler panicked");
            let body = serde_json::json!({ "message": INTERNAL_ERROR_MESSAGE }).to_string();
            match Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body))
            {
                Ok(response) => response,
                Err(err) => {
                    tracing::error!(event = "panic_response_failed", error = %err);
                    let mut response = Response::new(Body::empty());
                    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
                    response
                }
            }
        }))
}

/// Route rewriting has to wrap the router from the outside, so `/people/`
/// reaches the `/people` route.
pub fn build_service(app: Router) -> NormalizePath<Router> {
    NormalizePath::trim_trailing_slash(app)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers(Any);
    if origins.is_empty() {
        return layer.allow_origin(Any);
    }
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(event = "config_invalid", field = "cors_allowed_origins", value = %origin);
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(allowed))
}

pub async fn serve(settings: &Settings, service: NormalizePath<Router>) {
    let addr: SocketAddr = settings.addr;
    tracing::info!(%addr, "listening");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(event = "server_bind_failed", error = %err);
            return;
        }
    };
    if let Err(err) = axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service(service),
    )
    .with_graceful_shutdown(runtime::shutdown_signal())
    .await
    {
        tracing::error!(event = "server_failed", error = %err);
    }
}
