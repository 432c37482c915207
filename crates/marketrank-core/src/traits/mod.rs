mod clock;
mod scheduler;
mod storage;

pub use clock::IClock;
pub use scheduler::IFlushScheduler;
pub use storage::IKeyValueStorage;
