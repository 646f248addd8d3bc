use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Product {0} not found")]
    NotFound(i64),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Any other body rejection keeps the status axum chose (415, 413, ...).
    #[error("Request body rejected with {0}")]
    Rejected(StatusCode),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                AppError::InvalidBody(rejection.body_text())
            }
            other => AppError::Rejected(other.status()),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Not-found carries no body.
            AppError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
            AppError::InvalidBody(_) => StatusCode::BAD_REQUEST.into_response(),
            AppError::Rejected(status) => status.into_response(),
        }
    }
}
