//! Network plumbing.
//!
//! # Data Flow
//! ```text
//! ListenerConfig
//!     → listener.rs (bind, fail fast with the offending address)
//!     → http::server (accept loop)
//!
//! local_ip.rs: outbound-facing address for the startup banner only
//! ```

pub mod listener;
pub mod local_ip;

pub use listener::bind;
pub use local_ip::detect_local_ip;
