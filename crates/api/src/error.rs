use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use comicstore_core::error::CoreError;
use comicstore_core::repository::RepositoryError;
use comicstore_core::validation::{FieldError, FieldErrors, Location, ISBN_IN_USE};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `comicstore_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Writing an uploaded image failed.
    #[error("Image write failed: {0}")]
    Io(#[from] std::io::Error),

    /// A malformed request body.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::Core(CoreError::Repository(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Core(CoreError::Validation(errors)) => unprocessable(errors),

            // A concurrent writer claimed the ISBN between check and insert.
            AppError::Core(CoreError::Repository(RepositoryError::Duplicate(isbn))) => {
                let mut errors = FieldErrors::new();
                errors.push(FieldError::new("isbn", &isbn, ISBN_IN_USE, Location::Body));
                unprocessable(errors)
            }

            AppError::Core(CoreError::Repository(RepositoryError::Storage(msg))) => {
                tracing::error!(error = %msg, "Storage error");
                internal()
            }

            AppError::Io(err) => {
                tracing::error!(error = %err, "Image write failed");
                internal()
            }

            AppError::BadRequest(msg) => {
                let body = json!({
                    "error": msg,
                    "code": "BAD_REQUEST",
                });
                (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
            }
        }
    }
}

/// 422 with the collected `{ errors: { field: {...} } }` map.
fn unprocessable(errors: FieldErrors) -> Response {
    let body = json!({ "errors": errors });
    (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(body)).into_response()
}

/// Generic 500; details stay in the log.
fn internal() -> Response {
    let body = json!({
        "error": "An internal error occurred",
        "code": "INTERNAL_ERROR",
    });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
}
