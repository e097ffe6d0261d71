use axum::Router;

use crate::app::AppState;
use crate::domains;
use crate::http::error;

pub(crate) mod health;
pub(crate) mod sitemap;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(sitemap::router())
        .merge(health::router())
        .merge(domains::users::http::router())
        .merge(domains::people::http::router())
        .merge(domains::planets::http::router())
        .fallback(error::not_found)
}
