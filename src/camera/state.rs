//! Shared motion-detection state.

use std::sync::{Arc, Mutex, MutexGuard};

/// Handle to the process-wide motion-detection flag.
///
/// Cloning shares the same flag. Every read and write takes the lock for the
/// duration of a single `bool` access and nothing else.
#[derive(Debug, Clone, Default)]
pub struct MotionState {
    enabled: Arc<Mutex<bool>>,
}

impl MotionState {
    /// Create a new state with motion detection disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of the flag.
    pub fn get(&self) -> bool {
        *self.lock()
    }

    /// Overwrite the flag.
    pub fn set(&self, enabled: bool) {
        *self.lock() = enabled;
    }

    fn lock(&self) -> MutexGuard<'_, bool> {
        // A panic while holding the guard cannot leave a bool half-written.
        self.enabled.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
