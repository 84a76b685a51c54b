//! Start-once guard for long-running services

use std::sync::atomic::{AtomicBool, Ordering};

/// Idle → running transition that succeeds exactly once
#[derive(Debug, Default)]
pub struct Lifecycle {
    started: AtomicBool,
}

impl Lifecycle {
    pub const fn new() -> Self {
        Self {
            started: AtomicBool::new(false),
        }
    }

    /// Returns `true` only for the caller that moved the guard to running
    pub fn try_start(&self) -> bool {
        self.started
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub fn is_running(&self) -> bool {
        self.started.load(Ordering::Acquire)
    }
}
