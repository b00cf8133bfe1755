// rust/tetris_cli/src/console/mod.rs
#![forbid(unsafe_code)]

pub mod input;
pub mod runner;

pub use input::SelectionReader;
pub use runner::{ConsoleRunner, RunReport};
