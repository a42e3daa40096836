//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ServerConfig (validated, immutable)
//!     → handed to CameraServer at startup
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so the server runs without a file
//! - Camera behaviour (realm, delay, table values) is fixed, not configured
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{BannerConfig, ListenerConfig, LoggingConfig, ServerConfig, TimeoutConfig};
pub use validation::{validate_config, ValidationError};
