//! Cooperative stop flag for the run-forever drivers.

use core::sync::atomic::{AtomicBool, Ordering};

/// Flag checked by the driver loops once per iteration.
///
/// A firmware that never calls [`StopSignal::request_stop`] gets loops that
/// run until reset. Requesting a stop from an interrupt or another context
/// makes the active loop return after its current iteration.
#[derive(Debug, Default)]
pub struct StopSignal {
    requested: AtomicBool,
}

impl StopSignal {
    /// Creates a signal with no stop requested.
    pub const fn new() -> Self {
        Self {
            requested: AtomicBool::new(false),
        }
    }

    /// Asks the running loop to return.
    pub fn request_stop(&self) {
        self.requested.store(true, Ordering::Release);
    }

    /// Returns true once a stop has been requested.
    #[inline]
    pub fn is_stop_requested(&self) -> bool {
        self.requested.load(Ordering::Acquire)
    }

    /// Clears a previous request so the signal can be reused.
    pub fn clear(&self) {
        self.requested.store(false, Ordering::Release);
    }
}
