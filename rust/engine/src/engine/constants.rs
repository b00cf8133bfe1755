// rust/engine/src/engine/constants.rs
#![forbid(unsafe_code)]

/// Reference queue capacity (number of "next" pieces kept ahead of play).
pub const DEFAULT_CAPACITY: usize = 5;

/// Largest accepted capacity; storage is allocated up front.
pub const MAX_CAPACITY: usize = 4096;

/**
 * Menu selection codes.
 * - Anything outside this set is a no-op warning, never a state change.
 */
pub const MENU_PLAY: i64 = 1;
pub const MENU_INSERT: i64 = 2;
pub const MENU_EXIT: i64 = 0;

/// Number of distinct piece kinds (size of the 7-bag).
pub const NUM_KINDS: usize = 7;
