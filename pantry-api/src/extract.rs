use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// `Json` whose rejections render as `{ "error": ... }` with a 400.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// `Query` with the same error body as `AppJson`.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
