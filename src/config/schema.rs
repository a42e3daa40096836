//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::Deserialize;

/// Default port of the simulated camera.
pub const DEFAULT_PORT: u16 = 8081;

/// Root configuration for the mock camera server.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Credentials shown in the startup banner.
    pub banner: BannerConfig,

    /// Log filter settings.
    pub logging: LoggingConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8081").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: format!("0.0.0.0:{DEFAULT_PORT}"),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Total time allowed per request, including the setConfig delay.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Example credentials printed for operators.
///
/// The server accepts any digest-shaped header; these are only what the
/// banner suggests typing into a client.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BannerConfig {
    pub username: String,
    pub password: String,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            username: "ipc".to_string(),
            password: "pass".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "camera_mock=info,tower_http=info".to_string(),
        }
    }
}
