use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` with its rejections routed through [`AppError`], so a body
/// that fails to parse or bind answers 400 instead of axum's 422.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ProductJson<T>(pub T);
