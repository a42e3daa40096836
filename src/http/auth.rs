//! Digest-style authentication gate.
//!
//! # Responsibilities
//! - Issue `WWW-Authenticate: Digest` challenges with a fresh nonce
//! - Accept any header that is shaped like a digest response
//!
//! # Design Decisions
//! - The response hash is never computed or compared. Clients under test only
//!   need to complete the challenge round trip, and any well-formed attempt
//!   must pass regardless of credentials.
//! - Unknown paths are challenged too; the gate runs before routing.

use axum::{
    body::Body,
    http::{header, HeaderMap, HeaderValue, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::http::error::ApiError;
use crate::http::response::plain_text;

/// Realm advertised in every challenge.
pub const REALM: &str = "Camera";

/// Bytes of randomness per nonce (hex-encoded to twice as many characters).
pub const NONCE_BYTES: usize = 16;

const DIGEST_SCHEME: &str = "Digest";
const REQUIRED_FIELDS: [&str; 4] = ["username=", "realm=", "nonce=", "response="];

/// Format-only check of an `Authorization` value.
///
/// Passes when the value starts with `Digest` and contains every one of
/// `username=`, `realm=`, `nonce=` and `response=` as literal substrings.
pub fn looks_like_digest_header(value: &str) -> bool {
    value.starts_with(DIGEST_SCHEME) && REQUIRED_FIELDS.iter().all(|field| value.contains(field))
}

/// Apply [`looks_like_digest_header`] to a request's headers.
///
/// The value is checked as raw bytes, so non-ASCII usernames still pass.
pub fn authorize(headers: &HeaderMap) -> Result<(), ApiError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .map(|v| String::from_utf8_lossy(v.as_bytes()));

    match value {
        Some(v) if looks_like_digest_header(&v) => Ok(()),
        _ => Err(ApiError::Unauthenticated),
    }
}

/// Random hex nonce.
pub fn generate_nonce() -> String {
    let bytes: [u8; NONCE_BYTES] = rand::random();
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// `WWW-Authenticate` value for a given nonce.
pub fn challenge_header(nonce: &str) -> String {
    format!(r#"Digest realm="{REALM}", nonce="{nonce}", algorithm=MD5, qop="auth""#)
}

/// 401 response carrying a freshly generated challenge.
pub fn digest_challenge() -> Response {
    let nonce = generate_nonce();
    let mut response = plain_text(StatusCode::UNAUTHORIZED, "401 Unauthorized");

    match HeaderValue::from_str(&challenge_header(&nonce)) {
        Ok(value) => {
            response.headers_mut().insert(header::WWW_AUTHENTICATE, value);
        }
        Err(e) => tracing::error!(error = %e, "Failed to encode digest challenge"),
    }

    tracing::info!(nonce = %nonce, "Sent digest challenge");
    response
}

/// Middleware rejecting requests without a digest-shaped `Authorization`.
pub async fn require_digest_auth(request: Request<Body>, next: Next) -> Response {
    match authorize(request.headers()) {
        Ok(()) => next.run(request).await,
        Err(e) => e.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_any_digest_shaped_value() {
        assert!(looks_like_digest_header(
            "Digest username=x, realm=y, nonce=z, response=w"
        ));
        assert!(looks_like_digest_header(
            r#"Digest username="ipc", realm="Camera", nonce="abc", uri="/", response="00000000000000000000000000000000""#
        ));
    }

    #[test]
    fn rejects_other_schemes_and_missing_fields() {
        assert!(!looks_like_digest_header("Basic aXBjOnBhc3M="));
        assert!(!looks_like_digest_header("digest username=x, realm=y, nonce=z, response=w"));
        assert!(!looks_like_digest_header("Digest username=x, realm=y, nonce=z"));
        assert!(!looks_like_digest_header("Digest"));
        assert!(!looks_like_digest_header(""));
    }

    #[test]
    fn authorize_reads_the_authorization_header() {
        let mut headers = HeaderMap::new();
        assert_eq!(authorize(&headers), Err(ApiError::Unauthenticated));

        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Digest username=a, realm=b, nonce=c, response=d"),
        );
        assert_eq!(authorize(&headers), Ok(()));

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer token"));
        assert_eq!(authorize(&headers), Err(ApiError::Unauthenticated));
    }

    #[test]
    fn non_ascii_usernames_pass() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_bytes(
                "Digest username=\"Jürgen\", realm=\"Camera\", nonce=\"abc\", uri=\"/\", response=\"x\""
                    .as_bytes(),
            )
            .unwrap(),
        );
        assert_eq!(authorize(&headers), Ok(()));

        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_bytes(b"Digest username=\"J\xfcrgen\", realm=y, nonce=z, response=w")
                .unwrap(),
        );
        assert_eq!(authorize(&headers), Ok(()));
    }

    #[test]
    fn nonces_are_fresh_hex() {
        let a = generate_nonce();
        let b = generate_nonce();

        assert_eq!(a.len(), NONCE_BYTES * 2);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }

    #[test]
    fn challenge_has_the_fixed_shape() {
        let response = digest_challenge();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let value = response.headers()[header::WWW_AUTHENTICATE].to_str().unwrap();
        assert!(value.starts_with(r#"Digest realm="Camera", nonce=""#));
        assert!(value.ends_with(r#"", algorithm=MD5, qop="auth""#));
    }
}
