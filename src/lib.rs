//! Mock of a network camera's configuration API.

pub mod camera;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;

pub use camera::MotionState;
pub use config::ServerConfig;
pub use error::ServerError;
pub use http::{CameraServer, ServerHandle};
pub use lifecycle::Shutdown;
