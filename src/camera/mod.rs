//! Simulated camera configuration.
//!
//! # Data Flow
//! ```text
//! GET /cgi-bin/configManager.cgi?action=...
//!     → query.rs (ordered, multi-valued query parameters)
//!     → state.rs (motion flag behind a mutex)
//!     → table.rs (render `table.MotionDetect[0].*` lines)
//! ```
//!
//! # Design Decisions
//! - One flag only; Sensitivity and Threshold are fixed constants
//! - The flag starts disabled and is never persisted

pub mod query;
pub mod state;
pub mod table;

pub use query::QueryParams;
pub use state::MotionState;
