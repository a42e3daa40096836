//! Structured logging.
//!
//! # Design Decisions
//! - Uses the tracing crate; events go to stdout with timestamps
//! - `RUST_LOG` wins over the configured filter

use tracing_subscriber::{
    layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter,
};

/// Install the global subscriber.
///
/// `default_filter` is used when `RUST_LOG` is unset or invalid.
pub fn init_logging(default_filter: &str) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}
