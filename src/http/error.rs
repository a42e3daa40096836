//! Request-level error taxonomy.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::http::auth::digest_challenge;
use crate::http::response::plain_text;

/// Every way a request to the simulated camera can fail.
///
/// The `Display` text is the response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Missing or malformed `Authorization: Digest` header. Answered with a
    /// fresh challenge, not a final rejection.
    #[error("401 Unauthorized")]
    Unauthenticated,

    #[error("Invalid action")]
    InvalidAction,

    #[error("Invalid config name")]
    InvalidConfigName,

    #[error("Missing MotionDetect Enable parameter")]
    MissingEnableParameter,

    #[error("Not found")]
    NotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::InvalidAction
            | ApiError::InvalidConfigName
            | ApiError::MissingEnableParameter => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Unauthenticated => digest_challenge(),
            other => {
                tracing::warn!(status = other.status().as_u16(), reason = %other, "Request rejected");
                plain_text(other.status(), other.to_string())
            }
        }
    }
}
