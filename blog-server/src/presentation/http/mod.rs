use axum::{Router, routing::get};

use super::AppState;

pub(crate) mod app_error;
pub(crate) mod handlers;
pub(crate) mod middleware;

use handlers::listing::{healthz, home_page, home_props, not_found};

pub(crate) fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(home_page))
        .route("/api/home", get(home_props))
        .route("/healthz", get(healthz))
        .fallback(not_found)
        .with_state(state)
}
