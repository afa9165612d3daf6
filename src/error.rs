//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {name}: '{value}'")]
    InvalidEnv { name: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

/// Error payload. Validation failures carry only `error`; not-found responses
/// use a generic title in `error` plus the specific `description`.
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::NotFound(description) => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: "Not Found".into(),
                    description: Some(description),
                },
            ),
            AppError::Validation(message) | AppError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: message,
                    description: None,
                },
            ),
            AppError::Db(e) => {
                tracing::error!(error = %e, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: "Internal Server Error".into(),
                        description: None,
                    },
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
