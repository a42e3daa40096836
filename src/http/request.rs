//! Per-request bookkeeping.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) for `x-request-id`
//! - Emit one access log line per request
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - The access log never influences the response; a missing peer address
//!   is logged as `unknown`

use std::net::SocketAddr;

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Generates a random UUID v4 per request.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Peer IP of a request, or `unknown` when the transport did not record one.
pub fn client_address<B>(request: &Request<B>) -> String {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Access log middleware.
pub async fn access_log(request: Request<Body>, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    tracing::info!(
        method = %request.method(),
        path = %request.uri().path(),
        query = request.uri().query().unwrap_or(""),
        client = %client_address(&request),
        request_id = %request_id,
        "Request"
    );

    let response = next.run(request).await;

    tracing::debug!(
        request_id = %request_id,
        status = response.status().as_u16(),
        "Response"
    );
    response
}
