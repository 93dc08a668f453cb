//! Cooperative cancellation shared by the packing loops.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Cancellation flag plus an optional deadline.
///
/// Clones share the flag, so cancelling any clone stops every loop that
/// polls one. The flag stays set until [`Interrupt::reset`].
#[derive(Debug, Clone, Default)]
pub struct Interrupt {
    cancelled: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl Interrupt {
    /// Creates a flag that is not set and has no deadline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a clone sharing the flag that also trips `ms` milliseconds from now.
    ///
    /// `0` means no deadline.
    pub fn with_time_limit(&self, ms: u64) -> Self {
        Self {
            cancelled: Arc::clone(&self.cancelled),
            deadline: (ms > 0).then(|| Instant::now() + Duration::from_millis(ms)),
        }
    }

    /// Sets the flag.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Clears the flag.
    pub fn reset(&self) {
        self.cancelled.store(false, Ordering::Relaxed);
    }

    /// Returns true if cancelled or past the deadline.
    pub fn is_triggered(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
            || self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}
