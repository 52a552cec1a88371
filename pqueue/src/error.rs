use std::collections::TryReserveError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PQueueError {
    #[error("priority queue is empty")]
    Empty,
    #[error("failed to allocate priority queue storage: {0}")]
    Allocation(#[from] TryReserveError),
}
