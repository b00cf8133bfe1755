// rust/engine/src/engine/session.rs
#![forbid(unsafe_code)]

/*
Driver state machine.

The console loop is modelled as explicit phases so the queue logic can be
driven (and tested) without any terminal:

    AwaitingInput --apply--> ApplyingAction --> Displaying --finish_display--> AwaitingInput
                                            \-> Terminated (exit selection)

`apply` is the only mutating entrypoint after `fill`. Every failure it can
meet (full queue, empty queue, bad selection) is reported as an `Outcome` and
leaves the queue untouched.
*/

use tracing::{debug, info, warn};

use crate::engine::constants::{DEFAULT_CAPACITY, MENU_EXIT, MENU_INSERT, MENU_PLAY};
use crate::engine::error::{QueueError, SelectionError};
use crate::engine::generator::PieceGenerator;
use crate::engine::piece_rule::PieceRuleKind;
use crate::engine::pieces::Piece;
use crate::engine::queue::PieceQueue;

/// Session configuration (data only; no logic).
#[derive(Clone, Copy, Debug)]
pub struct SessionConfig {
    pub capacity: usize,
    pub seed: u64,
    pub rule_kind: PieceRuleKind,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            seed: 0,
            rule_kind: PieceRuleKind::Uniform,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    AwaitingInput,
    ApplyingAction,
    Displaying,
    Terminated,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Selection {
    Play,
    Insert,
    Exit,
}

impl Selection {
    pub fn from_code(code: i64) -> Result<Self, SelectionError> {
        match code {
            MENU_PLAY => Ok(Selection::Play),
            MENU_INSERT => Ok(Selection::Insert),
            MENU_EXIT => Ok(Selection::Exit),
            other => Err(SelectionError::Unknown(other)),
        }
    }
}

/// One menu read, as delivered by the input source.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Input {
    Code(i64),
    /// Text that could not be read as a number; the reader already discarded the rest of its line.
    Unparseable(String),
}

impl Input {
    pub fn selection(&self) -> Result<Selection, SelectionError> {
        match self {
            Input::Code(code) => Selection::from_code(*code),
            Input::Unparseable(text) => Err(SelectionError::Unparseable(text.clone())),
        }
    }
}

/// A successful enqueue: the piece and the storage index it landed in.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Placed {
    pub piece: Piece,
    pub index: usize,
}

impl Placed {
    /// 1-based slot position, as shown to the player.
    pub fn slot(&self) -> usize {
        self.index + 1
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    Played(Piece),
    Inserted(Placed),
    /// Queue refused the action (full on insert, empty on play).
    Rejected(QueueError),
    Invalid(SelectionError),
    /// Exit selection; carries the pieces left unplayed, front to back.
    Exited { remaining: Vec<Piece> },
    /// `apply` after the session already ended.
    Terminated,
}

impl Outcome {
    /// Every action except leaving re-displays the queue.
    pub fn shows_panel(&self) -> bool {
        !matches!(self, Outcome::Exited { .. } | Outcome::Terminated)
    }
}

pub struct Session {
    queue: PieceQueue,
    generator: PieceGenerator,
    phase: Phase,
}

impl Session {
    pub fn new(cfg: &SessionConfig) -> Result<Self, QueueError> {
        let queue = PieceQueue::new(cfg.capacity)?;
        let generator = PieceGenerator::new_with_rule(cfg.seed, cfg.rule_kind);
        info!(
            capacity = cfg.capacity,
            seed = cfg.seed,
            rule = cfg.rule_kind.name(),
            "session created"
        );
        Ok(Self {
            queue,
            generator,
            phase: Phase::AwaitingInput,
        })
    }

    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    pub fn generator(&self) -> &PieceGenerator {
        &self.generator
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_terminated(&self) -> bool {
        self.phase == Phase::Terminated
    }

    /// Generates and enqueues pieces until the queue is full.
    ///
    /// On a fresh session this is exactly `capacity` generate+enqueue pairs.
    pub fn fill(&mut self) -> Vec<Placed> {
        let room = self.queue.capacity() - self.queue.len();
        let mut placed = Vec::with_capacity(room);
        for _ in 0..room {
            match self.insert() {
                Ok(p) => placed.push(p),
                Err(e) => {
                    warn!(error = %e, "fill stopped early");
                    break;
                }
            }
        }
        placed
    }

    fn insert(&mut self) -> Result<Placed, QueueError> {
        // The piece is drawn before the capacity check, so a rejected insert still burns an id.
        let piece = self.generator.generate();
        let index = self.queue.enqueue(piece)?;
        Ok(Placed { piece, index })
    }

    pub fn apply(&mut self, input: Input) -> Outcome {
        if self.is_terminated() {
            return Outcome::Terminated;
        }
        self.phase = Phase::ApplyingAction;

        let outcome = match input.selection() {
            Ok(Selection::Play) => match self.queue.dequeue() {
                Ok(piece) => Outcome::Played(piece),
                Err(e) => Outcome::Rejected(e),
            },
            Ok(Selection::Insert) => match self.insert() {
                Ok(placed) => Outcome::Inserted(placed),
                Err(e) => Outcome::Rejected(e),
            },
            Ok(Selection::Exit) => Outcome::Exited {
                remaining: self.queue.snapshot(),
            },
            Err(e) => Outcome::Invalid(e),
        };

        match &outcome {
            Outcome::Rejected(e) => warn!(error = %e, "action rejected"),
            Outcome::Invalid(e) => warn!(error = %e, "selection rejected"),
            Outcome::Exited { remaining } => info!(remaining = remaining.len(), "session exited"),
            _ => debug!(?outcome, "action applied"),
        }

        self.phase = if matches!(outcome, Outcome::Exited { .. }) {
            Phase::Terminated
        } else {
            Phase::Displaying
        };
        outcome
    }

    /// Marks the post-action panel as shown; ready for the next read.
    pub fn finish_display(&mut self) {
        if self.phase == Phase::Displaying {
            self.phase = Phase::AwaitingInput;
        }
    }
}
