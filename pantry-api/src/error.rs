use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pantry_catalog::CatalogError;
use pantry_core::CoreError;
use pantry_order::OrderError;
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    AuthenticationError(String),
    ForbiddenError(String),
    ValidationError(String),
    NotFoundError(String),
    /// Store write failed; message is passed through to the client.
    CreationError(String),
    /// Store read failed; message is passed through to the client.
    QueryError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::AuthenticationError(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::ForbiddenError(msg) => (StatusCode::FORBIDDEN, msg),
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::CreationError(msg) | AppError::QueryError(msg) => {
                tracing::error!("Store failure: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::ValidationError(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::ValidationError(rejection.body_text())
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ValidationError(_) | CoreError::InvalidDate(_) => {
                AppError::ValidationError(err.to_string())
            }
            CoreError::CreationError(msg) => AppError::CreationError(msg),
            CoreError::QueryError(msg) => AppError::QueryError(msg),
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::UnknownCategory(_) | CatalogError::ProductNotFound(_) => {
                AppError::NotFoundError(err.to_string())
            }
            CatalogError::FeedError(msg) => AppError::QueryError(msg),
        }
    }
}

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::InvalidQuantity(_)
            | OrderError::InvalidPrice(_)
            | OrderError::TotalOverflow(_) => AppError::ValidationError(err.to_string()),
            OrderError::Catalog(e) => e.into(),
            OrderError::Expense(e) => e.into(),
        }
    }
}
