use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::timeout::TimeoutLayer;

/// Ограничивает число одновременных запросов и время обработки запроса.
pub(crate) fn apply_limits(router: Router, concurrency_limit: usize, timeout_secs: u64) -> Router {
    router
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(timeout_secs),
        ))
        .layer(ConcurrencyLimitLayer::new(concurrency_limit))
}
