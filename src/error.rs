use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Every failure a request can end in.
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed or missing input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Bad credentials or an unusable token. The message is sent as-is and carries no detail.
    #[error("{0}")]
    Authentication(String),

    /// The caller is authenticated but may not touch the resource.
    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    /// A uniqueness rule was hit; `detail` keeps the store's own message when there is one.
    #[error("{message}")]
    Conflict {
        message: String,
        detail: Option<String>,
    },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("password hashing error: {0}")]
    Hashing(String),

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AppError {
    pub fn invalid_token() -> Self {
        AppError::Authentication("Invalid token".into())
    }

    pub fn invalid_credentials() -> Self {
        AppError::Authentication("Invalid email or password".into())
    }

    pub fn conflict(message: impl Into<String>, detail: Option<String>) -> Self {
        AppError::Conflict {
            message: message.into(),
            detail,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Authentication(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Database(_) | AppError::Hashing(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn body(&self) -> ErrorBody {
        let (message, error) = match self {
            AppError::Validation(detail) => {
                ("Could not parse request data".to_string(), Some(detail.clone()))
            }
            AppError::Authentication(msg)
            | AppError::Forbidden(msg)
            | AppError::NotFound(msg) => (msg.clone(), None),
            AppError::Conflict { message, detail } => (message.clone(), detail.clone()),
            AppError::Database(e) => (
                "Could not complete storage operation".to_string(),
                Some(e.to_string()),
            ),
            AppError::Hashing(detail) => {
                ("Could not process credentials".to_string(), Some(detail.clone()))
            }
            AppError::Internal(e) => ("Internal server error".to_string(), Some(e.to_string())),
        };
        ErrorBody { message, error }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Database(_) | AppError::Hashing(_) | AppError::Internal(_) => {
                tracing::error!(error = %self, "request failed");
            }
            AppError::Authentication(_) | AppError::Forbidden(_) => {
                tracing::warn!(%status, error = %self, "request rejected");
            }
            _ => tracing::debug!(%status, error = %self, "request rejected"),
        }
        (status, Json(self.body())).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

/// Postgres unique_violation (SQLSTATE 23505).
pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .map(|db| db.is_unique_violation())
        .unwrap_or(false)
}

/// Name of the constraint a database error reports, if any.
pub fn violated_constraint(e: &sqlx::Error) -> Option<&str> {
    e.as_database_error().and_then(|db| db.constraint())
}

/// Postgres foreign_key_violation (SQLSTATE 23503).
pub fn is_foreign_key_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .map(|db| db.is_foreign_key_violation())
        .unwrap_or(false)
}
