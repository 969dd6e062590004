/*
 * Responsibility
 * - Application-wide AppError
 * - IntoResponse (HTTP status + `{"error": "..."}` body)
 * - Map VerifyError onto the wire: missing credentials keep their own message,
 *   everything else collapses into the generic invalid-token message
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::auth::VerifyError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("No authorization header")]
    MissingAuthorization,
    #[error("No token provided")]
    MissingToken,
    #[error("Invalid token")]
    InvalidToken,
    #[error("Not found")]
    NotFound,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingAuthorization | AppError::MissingToken | AppError::InvalidToken => {
                StatusCode::UNAUTHORIZED
            }
            AppError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };

        (self.status(), Json(body)).into_response()
    }
}

impl From<VerifyError> for AppError {
    fn from(e: VerifyError) -> Self {
        match e {
            VerifyError::MissingHeader => AppError::MissingAuthorization,
            VerifyError::MissingToken => AppError::MissingToken,
            // Never tell the caller whether the secret or the token was at fault
            VerifyError::Misconfigured | VerifyError::Invalid(_) => AppError::InvalidToken,
        }
    }
}
