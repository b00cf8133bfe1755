// rust/engine/src/engine/mod.rs
#![forbid(unsafe_code)]

mod constants;
mod error;
mod generator;
mod piece_rule;
mod pieces;
mod queue;
mod render;
mod session;

/**
 * Curated engine public API.
 *
 * Internal implementation modules remain private; only stable items are re-exported here.
 */
pub use constants::{
    DEFAULT_CAPACITY, MAX_CAPACITY, MENU_EXIT, MENU_INSERT, MENU_PLAY, NUM_KINDS,
};
pub use error::{QueueError, SelectionError};
pub use generator::PieceGenerator;
pub use piece_rule::{PieceRule, PieceRuleKind};
pub use pieces::{Kind, Piece};
pub use queue::{Iter, PieceQueue, QueueState};
pub use render::{
    render_banner, render_menu, render_outcome, render_panel, render_placed, render_sequence,
};
pub use session::{Input, Outcome, Phase, Placed, Selection, Session, SessionConfig};
