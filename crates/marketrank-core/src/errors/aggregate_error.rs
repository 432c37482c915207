/// Background aggregate computation errors.
#[derive(Debug, thiserror::Error)]
pub enum AggregateError {
    #[error("worker thread failed to spawn: {reason}")]
    WorkerSpawnFailed { reason: String },

    #[error("worker thread disconnected")]
    WorkerDisconnected,

    #[error("aggregate computation failed: {reason}")]
    ComputationFailed { reason: String },
}
