//! Response construction.
//!
//! # Responsibilities
//! - Build `text/plain` responses the way camera firmware sends them
//! - Always set an explicit `Content-Length` matching the body bytes

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

/// A `text/plain` response with an exact `Content-Length`.
pub fn plain_text(status: StatusCode, body: impl Into<String>) -> Response {
    let body = body.into();
    (
        status,
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("text/plain")),
            (header::CONTENT_LENGTH, HeaderValue::from(body.len())),
        ],
        body,
    )
        .into_response()
}
