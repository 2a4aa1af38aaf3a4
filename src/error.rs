//! Application error types with Axum response mapping.
//!
//! Every variant renders as `{"error": "<message>"}`; the authority layer's
//! two outcomes both land on 401.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::authority::AuthError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("unauthorized")]
    Unauthorized,
}

impl AppError {
    fn status_and_body(&self) -> (StatusCode, serde_json::Value) {
        match self {
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                json!({"error": "invalid credentials"}),
            ),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, json!({"error": "unauthorized"})),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Rejected => AppError::InvalidCredentials,
            AuthError::Unauthorized => AppError::Unauthorized,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        (status, axum::Json(body)).into_response()
    }
}
