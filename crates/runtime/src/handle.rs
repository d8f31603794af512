//! Cloneable stop switch for a run.
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shares the run's `active` flag with other threads.
///
/// The driver reads the flag once at the top of every tick, so a stop request
/// takes effect before the next decision, never in the middle of an action.
#[derive(Clone, Debug)]
pub struct RunHandle {
    active: Arc<AtomicBool>,
}

impl RunHandle {
    pub fn new() -> Self {
        Self {
            active: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Requests a stop. Returns false if the run was already stopped.
    pub fn stop(&self) -> bool {
        self.active.swap(false, Ordering::AcqRel)
    }
}

impl Default for RunHandle {
    fn default() -> Self {
        Self::new()
    }
}
