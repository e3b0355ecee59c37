//! Error types for the asset tracker server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Postgres SQLSTATE for `unique_violation`
const PG_UNIQUE_VIOLATION: &str = "23505";
/// Postgres SQLSTATE for `foreign_key_violation`
const PG_FOREIGN_KEY_VIOLATION: &str = "23503";

/// Machine-readable error codes returned in the response body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    NotAuthorized = 2,
    DbFailure = 3,
    NotFound = 4,
    Duplicate = 5,
    InvalidState = 6,
    BadValue = 7,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// A write named a record that does not exist
    #[error("Not found: {0}")]
    MissingReference(String),

    /// Uniqueness violation: serial number, email, or an already-active assignment
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Requested transition is not allowed from the record's current state
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Authentication(_) => ErrorCode::NotAuthorized,
            AppError::NotFound(_) | AppError::MissingReference(_) => ErrorCode::NotFound,
            AppError::Conflict(_) => ErrorCode::Duplicate,
            AppError::InvalidState(_) => ErrorCode::InvalidState,
            AppError::Validation(_) => ErrorCode::BadValue,
            AppError::Database(_) => ErrorCode::DbFailure,
            AppError::Internal(_) => ErrorCode::Failure,
        }
    }

    /// Business-rule violations on writes all answer 400; callers tell them
    /// apart through the `error` field of the body.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Authentication(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MissingReference(_)
            | AppError::Conflict(_)
            | AppError::InvalidState(_)
            | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Update, assign and return answer 400 for an unknown id; reads and
    /// deletes keep 404.
    pub fn on_write(self) -> Self {
        match self {
            AppError::NotFound(msg) => AppError::MissingReference(msg),
            other => other,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_err) = err {
            match db_err.code().as_deref() {
                Some(PG_UNIQUE_VIOLATION) => {
                    let constraint = db_err.constraint().unwrap_or("unique constraint");
                    return AppError::Conflict(format!("Duplicate value violates {}", constraint));
                }
                Some(PG_FOREIGN_KEY_VIOLATION) => {
                    return AppError::Conflict(
                        "Record is still referenced by assignment history".to_string(),
                    );
                }
                _ => {}
            }
        }
        AppError::Database(err)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();
        let status = self.status();

        let message = match &self {
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "Database error".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal server error".to_string()
            }
            AppError::Authentication(msg)
            | AppError::NotFound(msg)
            | AppError::MissingReference(msg)
            | AppError::Conflict(msg)
            | AppError::InvalidState(msg)
            | AppError::Validation(msg) => msg.clone(),
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
