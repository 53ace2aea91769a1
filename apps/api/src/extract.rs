use axum::extract::FromRequest;

use crate::errors::AppError;

/// `Json` whose rejections are reported as `AppError`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
