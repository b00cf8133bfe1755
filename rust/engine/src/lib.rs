// rust/engine/src/lib.rs
#![forbid(unsafe_code)]

pub mod engine;

// Re-export the bits the CLI and tests need:
pub use engine::{
    DEFAULT_CAPACITY, Input, Kind, Outcome, Phase, Piece, PieceGenerator, PieceQueue,
    PieceRuleKind, Placed, QueueError, QueueState, Selection, SelectionError, Session,
    SessionConfig,
};
