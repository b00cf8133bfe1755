// rust/engine/src/engine/render.rs
#![forbid(unsafe_code)]

use std::fmt::Write as _;

use crate::engine::pieces::Piece;
use crate::engine::queue::PieceQueue;
use crate::engine::session::{Outcome, Placed};

const RULE_HEAVY: &str = "======================================================";
const RULE_LIGHT: &str = "------------------------------------------------------";

pub fn render_banner() -> String {
    let rule = "==================================================";
    format!("{rule}\n        Tetris Stack - Next Piece Queue\n{rule}\n")
}

pub fn render_menu() -> &'static str {
    "\n--- ACTIONS ---\n\
     Code | Action\n\
     ---------------------------\n\
     \x20 1  | Play piece (dequeue)\n\
     \x20 2  | Insert new piece (enqueue)\n\
     \x20 0  | Exit\n\
     ---------------------------\n\
     Choose an option: "
}

/// `[I 0] -> [O 1] -> [T 2]`; empty string for no pieces.
pub fn render_sequence<'a>(pieces: impl IntoIterator<Item = &'a Piece>) -> String {
    let mut s = String::new();
    for (i, p) in pieces.into_iter().enumerate() {
        if i > 0 {
            s.push_str(" -> ");
        }
        let _ = write!(s, "{p}");
    }
    s
}

/// Queue panel: capacity, occupancy, raw head/tail indices and the front-to-back sequence.
pub fn render_panel(q: &PieceQueue) -> String {
    let mut s = String::new();
    s.push('\n');
    s.push_str(RULE_HEAVY);
    s.push_str("\n              NEXT PIECE QUEUE\n");
    s.push_str(RULE_HEAVY);
    s.push('\n');

    let (Some(head), Some(tail)) = (q.head(), q.tail()) else {
        s.push_str("The queue is EMPTY. Insert a new piece to get started!\n");
        s.push_str(RULE_LIGHT);
        s.push('\n');
        return s;
    };

    let _ = writeln!(s, "Capacity: {} | Occupancy: {}", q.capacity(), q.len());
    let _ = writeln!(s, "Front (dequeue): {head} | Rear (enqueue): {tail}");
    let _ = writeln!(s, "\nQueue: {}", render_sequence(q.iter()));
    s.push_str(RULE_LIGHT);
    s.push('\n');
    s
}

pub fn render_placed(placed: &Placed) -> String {
    format!(
        "\nPiece {} enqueued (slot {}).\n",
        placed.piece,
        placed.slot()
    )
}

/// Line(s) printed right after an action, before the panel.
pub fn render_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Played(p) => format!(
            "\nPiece played: type [{}], id [{}].\n",
            p.kind.glyph(),
            p.id
        ),
        Outcome::Inserted(placed) => render_placed(placed),
        Outcome::Rejected(e) => format!("\nCannot do that: {e}.\n"),
        Outcome::Invalid(e) => format!("\n{}.\n", capitalize(&e.to_string())),
        Outcome::Exited { remaining } if remaining.is_empty() => {
            "\nLeaving Tetris Stack. No pieces left in the queue.\n".to_string()
        }
        Outcome::Exited { remaining } => format!(
            "\nLeaving Tetris Stack. Pieces left unplayed ({}): {}\n",
            remaining.len(),
            render_sequence(remaining)
        ),
        Outcome::Terminated => String::new(),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
