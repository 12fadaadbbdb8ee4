use std::time::Instant;

/// Narrow time source for the controller's debounce and sweep timers.
/// All timing in the crate is elapsed-milliseconds comparison against a
/// monotonic counter; injecting the source keeps the state machine testable
/// without real delays.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed epoch. Never goes backwards.
    fn now_ms(&self) -> u64;
}

/// Wall implementation backed by `std::time::Instant`.
pub struct MonotonicClock {
    epoch: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }
}
