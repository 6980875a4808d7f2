//! Error types for the Biblioteca server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Main application error type.
///
/// The catalog endpoints answer failures with fixed plain-text bodies while
/// the account endpoints answer with a JSON `{message}` object; the variants
/// carry the public message so handlers stay free of response formatting.
#[derive(Error, Debug)]
pub enum AppError {
    /// Business failure (duplicate or unknown identification, wrong
    /// password), surfaced as 400 with a human-readable message.
    #[error("{0}")]
    BadRequest(String),

    /// Database failure on a catalog endpoint, rendered as plain text.
    #[error("catalog database error: {source}")]
    Catalog {
        #[source]
        source: sqlx::Error,
        message: &'static str,
    },

    /// Database failure on an account endpoint, rendered as JSON.
    #[error("account database error: {source}")]
    Account {
        #[source]
        source: sqlx::Error,
        message: &'static str,
    },

    /// Non-database failure (password hashing), rendered as JSON.
    #[error("{detail}")]
    Internal {
        detail: String,
        message: &'static str,
    },
}

impl AppError {
    pub fn catalog(source: sqlx::Error, message: &'static str) -> Self {
        AppError::Catalog { source, message }
    }

    pub fn account(source: sqlx::Error, message: &'static str) -> Self {
        AppError::Account { source, message }
    }
}

/// Error response body for JSON endpoints
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse { message }),
            )
                .into_response(),
            AppError::Catalog { source, message } => {
                tracing::error!("Database error: {:?}", source);
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
            AppError::Account { source, message } => {
                tracing::error!("Database error: {:?}", source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        message: message.to_string(),
                    }),
                )
                    .into_response()
            }
            AppError::Internal { detail, message } => {
                tracing::error!("Internal error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        message: message.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
