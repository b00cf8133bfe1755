// rust/engine/src/engine/pieces.rs
#![forbid(unsafe_code)]

use std::fmt;

use crate::engine::constants::NUM_KINDS;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Kind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl Kind {
    /// The alphabet in draw-table order.
    pub fn all() -> &'static [Kind; NUM_KINDS] {
        use Kind::*;
        &[I, O, T, L, J, S, Z]
    }

    pub fn glyph(self) -> char {
        use Kind::*;
        match self {
            I => 'I',
            O => 'O',
            T => 'T',
            L => 'L',
            J => 'J',
            S => 'S',
            Z => 'Z',
        }
    }

}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// One queued piece: a kind tag plus an id unique within a generator's lifetime.
///
/// Plain value: the queue stores copies, never references.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Piece {
    pub kind: Kind,
    pub id: u64,
}

impl Piece {
    pub fn new(kind: Kind, id: u64) -> Self {
        Self { kind, id }
    }
}

/// Renders as `[T 3]`, the token used in the queue panel.
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.kind.glyph(), self.id)
    }
}
