// rust/engine/tests/queue_invariants_prop.rs
#![forbid(unsafe_code)]

/**
 * Property/invariant tests for the circular queue.
 *
 * Purpose:
 * - Fuzz arbitrary enqueue/dequeue interleavings against a `VecDeque` model.
 *
 * Invariants covered:
 * - `0 <= len <= capacity` after every operation.
 * - `head()`/`tail()` are `None` iff the queue is empty.
 * - `tail == (head + len - 1) mod capacity` whenever non-empty.
 * - Failed operations are no-ops; successful ones match the model exactly.
 */
use std::collections::VecDeque;

use proptest::prelude::*;
use tetris_stack_engine::{PieceGenerator, PieceQueue, QueueError, QueueState};

proptest! {
    #[test]
    fn random_interleavings_match_model(
        seed in any::<u64>(),
        capacity in 1usize..9,
        ops in prop::collection::vec(any::<bool>(), 0..200),
    ) {
        let mut q = PieceQueue::new(capacity).unwrap();
        let mut g = PieceGenerator::new(seed);
        let mut model = VecDeque::new();

        for enqueue in ops {
            if enqueue {
                let p = g.generate();
                let r = q.enqueue(p);
                if model.len() == capacity {
                    prop_assert_eq!(r, Err(QueueError::Full { capacity }));
                } else {
                    prop_assert!(r.is_ok());
                    model.push_back(p);
                }
            } else {
                let r = q.dequeue();
                match model.pop_front() {
                    Some(expected) => prop_assert_eq!(r, Ok(expected)),
                    None => prop_assert_eq!(r, Err(QueueError::Empty)),
                }
            }

            prop_assert!(q.len() <= capacity);
            prop_assert_eq!(q.len(), model.len());
            prop_assert_eq!(q.snapshot(), model.iter().copied().collect::<Vec<_>>());

            match (q.head(), q.tail()) {
                (None, None) => prop_assert_eq!(q.state(), QueueState::Empty),
                (Some(h), Some(t)) => {
                    prop_assert!(h < capacity && t < capacity);
                    prop_assert_eq!(t, (h + q.len() - 1) % capacity);
                }
                other => prop_assert!(false, "head/tail disagree: {:?}", other),
            }
        }
    }
}
