// rust/engine/src/engine/error.rs
#![forbid(unsafe_code)]

use thiserror::Error;

/// Queue-level failures. `Full` and `Empty` are recoverable no-ops.
#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
pub enum QueueError {
    #[error("queue is full (capacity {capacity}); no more pieces can be inserted")]
    Full { capacity: usize },
    #[error("queue is empty; there is no piece to play")]
    Empty,
    #[error("queue capacity must be at least 1")]
    ZeroCapacity,
    #[error("queue capacity {capacity} exceeds the maximum of {max}")]
    CapacityTooLarge { capacity: usize, max: usize },
}

/// Menu input that does not map to an action.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum SelectionError {
    #[error("invalid input {0:?}; please enter a number")]
    Unparseable(String),
    #[error("invalid option {0}; choose 1, 2 or 0")]
    Unknown(i64),
}
