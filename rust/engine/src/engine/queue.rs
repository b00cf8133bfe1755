// rust/engine/src/engine/queue.rs
#![forbid(unsafe_code)]

/*
Bounded circular queue of upcoming pieces.

Layout
------
A fixed arena of `capacity` slots addressed by `head` (front index) and
`count` (occupancy). The rear index is derived, never stored:

    tail = (head + count - 1) mod capacity

Slots inside [head, head + count) (mod capacity) are always `Some`: only
`enqueue` fills a slot and only `dequeue` vacates one, always the front.
Slots outside that range are vacant (`None`) and are never read. When the
queue drains, `head` is reset so the next enqueue lands in slot 0; the public
`head()` / `tail()` report `None` (the unset sentinel) whenever the queue is
empty.
*/

use std::iter::FusedIterator;

use tracing::debug;

use crate::engine::constants::MAX_CAPACITY;
use crate::engine::error::QueueError;
use crate::engine::pieces::Piece;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum QueueState {
    Empty,
    Partial,
    Full,
}

#[derive(Clone, Debug)]
pub struct PieceQueue {
    slots: Box<[Option<Piece>]>,
    head: usize,
    count: usize,
}

impl PieceQueue {
    pub fn new(capacity: usize) -> Result<Self, QueueError> {
        if capacity == 0 {
            return Err(QueueError::ZeroCapacity);
        }
        if capacity > MAX_CAPACITY {
            return Err(QueueError::CapacityTooLarge {
                capacity,
                max: MAX_CAPACITY,
            });
        }
        Ok(Self {
            slots: vec![None; capacity].into_boxed_slice(),
            head: 0,
            count: 0,
        })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.count == self.capacity()
    }

    pub fn state(&self) -> QueueState {
        if self.is_empty() {
            QueueState::Empty
        } else if self.is_full() {
            QueueState::Full
        } else {
            QueueState::Partial
        }
    }

    /// Raw storage index of the front piece; `None` when empty.
    pub fn head(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.head)
    }

    /// Raw storage index of the most recently inserted piece; `None` when empty.
    pub fn tail(&self) -> Option<usize> {
        (!self.is_empty()).then(|| self.wrap(self.head + self.count - 1))
    }

    #[inline]
    fn wrap(&self, idx: usize) -> usize {
        idx % self.capacity()
    }

    /// Appends `piece` at the rear.
    ///
    /// Returns the storage index written. On a full queue this is a no-op
    /// returning `QueueError::Full`.
    pub fn enqueue(&mut self, piece: Piece) -> Result<usize, QueueError> {
        if self.is_full() {
            debug!(%piece, capacity = self.capacity(), "enqueue rejected: queue full");
            return Err(QueueError::Full {
                capacity: self.capacity(),
            });
        }
        if self.is_empty() {
            self.head = 0;
        }
        let idx = self.wrap(self.head + self.count);
        self.slots[idx] = Some(piece);
        self.count += 1;
        debug!(%piece, slot = idx, count = self.count, "enqueued");
        Ok(idx)
    }

    /// Removes and returns the front piece. No-op `QueueError::Empty` when empty.
    pub fn dequeue(&mut self) -> Result<Piece, QueueError> {
        if self.is_empty() {
            debug!("dequeue rejected: queue empty");
            return Err(QueueError::Empty);
        }
        let removed = self.slots[self.head].take().ok_or(QueueError::Empty)?;
        self.head = self.wrap(self.head + 1);
        self.count -= 1;
        if self.is_empty() {
            self.head = 0;
        }
        debug!(piece = %removed, count = self.count, "dequeued");
        Ok(removed)
    }

    /// Front piece without removing it.
    pub fn peek(&self) -> Option<Piece> {
        self.iter().next().copied()
    }

    /// Front-to-back borrowed view.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            queue: self,
            offset: 0,
        }
    }

    /// Front-to-back owned copy; unaffected by later mutations.
    pub fn snapshot(&self) -> Vec<Piece> {
        self.iter().copied().collect()
    }
}

pub struct Iter<'a> {
    queue: &'a PieceQueue,
    offset: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Piece;

    fn next(&mut self) -> Option<&'a Piece> {
        if self.offset >= self.queue.count {
            return None;
        }
        let idx = self.queue.wrap(self.queue.head + self.offset);
        self.offset += 1;
        let piece = self.queue.slots[idx].as_ref();
        debug_assert!(piece.is_some(), "occupied slot {idx} is vacant");
        piece
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.queue.count - self.offset;
        (rem, Some(rem))
    }
}

impl ExactSizeIterator for Iter<'_> {}
impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a PieceQueue {
    type Item = &'a Piece;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
