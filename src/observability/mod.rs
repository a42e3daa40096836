//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and middleware produce:
//!     → tracing events (access log, challenge, state changes)
//!     → tower_http TraceLayer spans
//!
//! Consumers:
//!     → stdout via tracing-subscriber's fmt layer
//! ```

pub mod logging;

pub use logging::init_logging;
