use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
/// Ошибки библиотеки `blog-content`.
pub enum ContentError {
    /// Ошибка HTTP-транспорта (`reqwest`).
    #[cfg(feature = "http")]
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Сетевая ошибка транспорта без `reqwest` (например, `fetch` в браузере).
    #[error("network error: {0}")]
    Network(String),

    /// Сервис контента ответил неуспешным статусом.
    #[error("content service returned {status}: {message}")]
    Status {
        /// HTTP-статус ответа.
        status: u16,
        /// Сообщение из тела ответа или описание статуса.
        message: String,
    },

    /// Запрошенный ресурс не найден.
    #[error("not found")]
    NotFound,

    /// Тело ответа не удалось разобрать.
    #[error("decode error: {0}")]
    Decode(String),

    /// Некорректные параметры запроса.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Ответ разобран, но не соответствует ожидаемому контракту.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Результат операций `blog-content`.
pub type ContentResult<T> = Result<T, ContentError>;

impl ContentError {
    /// Строит ошибку по HTTP-статусу и (необязательному) сообщению из тела.
    pub fn from_http_status(status: u16, message: Option<String>) -> Self {
        match status {
            404 => Self::NotFound,
            _ => {
                let message = message.unwrap_or_else(|| format!("http status {status}"));
                Self::Status { status, message }
            }
        }
    }

    /// Строит ошибку по статусу и сырому телу ответа: из JSON берётся поле
    /// `message` или `error`, иначе сообщение строится по статусу.
    pub fn from_error_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|body| body.message.or(body.error))
            .map(|message| message.trim().to_string())
            .filter(|message| !message.is_empty());
        Self::from_http_status(status, message)
    }

    #[cfg(feature = "http")]
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::from_http_status(status.as_u16(), None);
        }
        if err.is_decode() {
            return Self::Decode(err.to_string());
        }
        Self::Http(err)
    }
}
