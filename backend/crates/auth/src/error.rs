//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.
//!
//! Token-verification failures (`Malformed`, `InvalidSignature`, `Expired`,
//! `IncompletePayload`) are deliberately indistinguishable in the
//! client-visible response: all of them answer 401 with the same detail
//! string, so a caller cannot probe which check rejected a token. The
//! variant survives internally for logging and tests.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// The one detail string every authentication failure answers with.
pub const AUTH_FAILED_DETAIL: &str = "Authentication Failed";

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Token could not be parsed at all
    #[error("Token is malformed")]
    Malformed,

    /// Token signature does not verify under the configured secret
    #[error("Token signature is invalid")]
    InvalidSignature,

    /// Token expiry is in the past
    #[error("Token has expired")]
    Expired,

    /// Token verified but lacks a required claim (subject or user id)
    #[error("Token payload is incomplete")]
    IncompletePayload,

    /// No bearer token present on a protected route
    #[error("Missing bearer token")]
    MissingToken,

    /// Unknown username or wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Valid identity, insufficient role
    #[error("Insufficient privilege")]
    Forbidden,

    /// Current password re-verification failed on a password change
    #[error("Error on password change")]
    PasswordChangeRejected,

    /// User not found
    #[error("User not found")]
    UserNotFound,

    /// Username already exists
    #[error("Username already exists")]
    UsernameTaken,

    /// Email already exists
    #[error("Email already exists")]
    EmailTaken,

    /// Password validation error
    #[error("Password validation failed: {0}")]
    PasswordValidation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Malformed
            | AuthError::InvalidSignature
            | AuthError::Expired
            | AuthError::IncompletePayload
            | AuthError::MissingToken
            | AuthError::InvalidCredentials
            | AuthError::PasswordChangeRejected => StatusCode::UNAUTHORIZED,
            // Role mismatch answers 401, not 403: the admin gate is
            // indistinguishable from a failed authentication
            AuthError::Forbidden => StatusCode::UNAUTHORIZED,
            AuthError::UserNotFound => StatusCode::NOT_FOUND,
            AuthError::UsernameTaken | AuthError::EmailTaken => StatusCode::CONFLICT,
            AuthError::PasswordValidation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Malformed
            | AuthError::InvalidSignature
            | AuthError::Expired
            | AuthError::IncompletePayload
            | AuthError::MissingToken
            | AuthError::InvalidCredentials
            | AuthError::Forbidden
            | AuthError::PasswordChangeRejected => ErrorKind::Unauthorized,
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::UsernameTaken | AuthError::EmailTaken => ErrorKind::Conflict,
            AuthError::PasswordValidation(_) => ErrorKind::UnprocessableEntity,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError, collapsing authentication failures into one
    /// generic detail so the response does not leak which check failed.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::Malformed
            | AuthError::InvalidSignature
            | AuthError::Expired
            | AuthError::IncompletePayload
            | AuthError::MissingToken
            | AuthError::InvalidCredentials
            | AuthError::Forbidden => AppError::unauthorized(AUTH_FAILED_DETAIL),
            AuthError::Database(_) | AuthError::Internal(_) => {
                AppError::internal("Internal server error")
            }
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::Forbidden => {
                tracing::warn!("Role policy rejected request");
            }
            AuthError::Malformed
            | AuthError::InvalidSignature
            | AuthError::Expired
            | AuthError::IncompletePayload
            | AuthError::MissingToken => {
                tracing::debug!(error = %self, "Token rejected");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_failures_collapse_to_one_detail() {
        for err in [
            AuthError::Malformed,
            AuthError::InvalidSignature,
            AuthError::Expired,
            AuthError::IncompletePayload,
            AuthError::MissingToken,
            AuthError::InvalidCredentials,
            AuthError::Forbidden,
        ] {
            let app = err.to_app_error();
            assert_eq!(app.status_code(), 401);
            assert_eq!(app.message(), AUTH_FAILED_DETAIL);
        }
    }

    #[test]
    fn test_password_change_detail_is_distinct() {
        let app = AuthError::PasswordChangeRejected.to_app_error();
        assert_eq!(app.status_code(), 401);
        assert_eq!(app.message(), "Error on password change");
    }

    #[test]
    fn test_internal_errors_do_not_leak() {
        let app = AuthError::Internal("secret detail".into()).to_app_error();
        assert_eq!(app.status_code(), 500);
        assert!(!app.message().contains("secret detail"));
    }

    #[test]
    fn test_conflict_kinds() {
        assert_eq!(AuthError::UsernameTaken.status_code(), StatusCode::CONFLICT);
        assert_eq!(AuthError::EmailTaken.status_code(), StatusCode::CONFLICT);
        assert_eq!(AuthError::UserNotFound.status_code(), StatusCode::NOT_FOUND);
    }
}
