use axum::{
    Json,
    extract::State,
    http::{HeaderValue, header},
    response::{Html, IntoResponse},
};
use blog_content::PageResult;
use serde::Serialize;

use crate::presentation::AppState;
use crate::presentation::http::app_error::{AppError, AppResult};

/// Главная страница: HTML, отрендеренный при генерации.
pub(crate) async fn home_page(State(state): State<AppState>) -> impl IntoResponse {
    let last_modified = state
        .snapshot
        .generated_at
        .format("%a, %d %b %Y %H:%M:%S GMT")
        .to_string();
    let mut response = Html(state.snapshot.html.clone()).into_response();
    if let Ok(value) = HeaderValue::from_str(&last_modified) {
        response.headers_mut().insert(header::LAST_MODIFIED, value);
    }
    response
}

/// Данные первой страницы (то же, что встроено в HTML) для клиента.
pub(crate) async fn home_props(State(state): State<AppState>) -> Json<PageResult> {
    Json(state.snapshot.page.clone())
}

#[derive(Debug, Serialize)]
pub(crate) struct HealthzResponse {
    status: &'static str,
}

pub(crate) async fn healthz() -> Json<HealthzResponse> {
    Json(HealthzResponse { status: "ok" })
}

pub(crate) async fn not_found() -> AppResult<()> {
    Err(AppError::NotFound)
}
