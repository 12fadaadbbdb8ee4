// This file is only compiled during tests

use std::cell::Cell;
use std::rc::Rc;

use crate::clock::Clock;

/// Manually advanced clock. Clones share the same time, so a test can keep
/// one handle and move time forward while the controller holds the other.
#[derive(Clone)]
pub struct MockClock {
    now_ms: Rc<Cell<u64>>,
}

impl MockClock {
    pub fn new() -> Self {
        Self {
            now_ms: Rc::new(Cell::new(0)),
        }
    }

    pub fn advance(&self, ms: u64) {
        self.now_ms.set(self.now_ms.get() + ms);
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }
}
