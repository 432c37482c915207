/// Update-cycle scheduler used to coalesce high-frequency writes.
pub trait IFlushScheduler: Send + Sync {
    /// Ask for a flush at the end of the current cycle.
    ///
    /// Returns `false` when no cycle scheduler is attached; the caller must
    /// then flush immediately.
    fn request_flush(&self) -> bool;
}
