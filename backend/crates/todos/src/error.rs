//! Todo Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Todo-specific result type alias
pub type TodoResult<T> = Result<T, TodoError>;

/// Todo-specific error variants
#[derive(Debug, Error)]
pub enum TodoError {
    /// No todo with this id visible to the caller. Covers both a genuinely
    /// absent row and a row owned by someone else, so a by-id probe cannot
    /// tell the two apart.
    #[error("Todo not found.")]
    NotFound,

    /// Request field failed validation
    #[error("{0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TodoError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            TodoError::NotFound => StatusCode::NOT_FOUND,
            TodoError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            TodoError::Database(_) | TodoError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TodoError::NotFound => ErrorKind::NotFound,
            TodoError::Validation(_) => ErrorKind::UnprocessableEntity,
            TodoError::Database(_) | TodoError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError; storage faults never leak their detail.
    pub fn to_app_error(&self) -> AppError {
        match self {
            TodoError::Database(_) | TodoError::Internal(_) => {
                AppError::internal("Internal server error")
            }
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    fn log(&self) {
        match self {
            TodoError::Database(e) => {
                tracing::error!(error = %e, "Todo database error");
            }
            TodoError::Internal(msg) => {
                tracing::error!(message = %msg, "Todo internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Todo error");
            }
        }
    }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        let app = TodoError::NotFound.to_app_error();
        assert_eq!(app.status_code(), 404);
        assert_eq!(app.message(), "Todo not found.");
    }

    #[test]
    fn test_validation_carries_field_detail() {
        let app = TodoError::Validation("priority must be between 1 and 5".into()).to_app_error();
        assert_eq!(app.status_code(), 422);
        assert!(app.message().contains("priority"));
    }

    #[test]
    fn test_internal_errors_do_not_leak() {
        let app = TodoError::Internal("connection string".into()).to_app_error();
        assert_eq!(app.status_code(), 500);
        assert!(!app.message().contains("connection string"));
    }
}
