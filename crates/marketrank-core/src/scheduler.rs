//! Flush schedulers for the dwell coalescing queue.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::traits::IFlushScheduler;

/// No update cycle: every request is answered with "flush now".
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateFlush;

impl IFlushScheduler for ImmediateFlush {
    fn request_flush(&self) -> bool {
        false
    }
}

/// At most one pending flush per cycle. The cycle driver (a render loop,
/// a timer, a test) calls [`CycleScheduler::take_pending`] once per tick
/// and flushes when it returns `true`.
#[derive(Debug, Default)]
pub struct CycleScheduler {
    pending: AtomicBool,
}

impl CycleScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a flush has been requested since the last tick.
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Consume the pending request.
    pub fn take_pending(&self) -> bool {
        self.pending.swap(false, Ordering::AcqRel)
    }
}

impl IFlushScheduler for CycleScheduler {
    fn request_flush(&self) -> bool {
        self.pending.store(true, Ordering::Release);
        true
    }
}
