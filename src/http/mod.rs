//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, access log)
//!     → auth.rs (digest challenge / format check)
//!     → handlers.rs (getConfig / setConfig / 404)
//!     → response.rs (text/plain with Content-Length)
//! ```

pub mod auth;
pub mod error;
pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use auth::looks_like_digest_header;
pub use error::ApiError;
pub use request::X_REQUEST_ID;
pub use server::{AppState, CameraServer, ServerHandle};
