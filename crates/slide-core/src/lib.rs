//! Core engine for a 3x3 sliding-tile puzzle.
//!
//! The engine owns the board (a permutation of the labels 0..=8, with 0 as
//! the blank), validates adjacency-based moves, shuffles by random legal
//! moves from the goal so every puzzle is solvable by construction, and
//! tracks the move count. [`RecordStore`] persists the best move count
//! across sessions.
//!
//! Nothing here renders: a frontend drives [`Engine`] with cell indices
//! and draws the returned snapshots however it likes.

pub use board::{Board, BLANK, CELLS, SIDE};
pub use engine::{Difficulty, Engine, MoveOutcome, Snapshot};
pub use record::RecordStore;

mod board;
mod engine;
mod record;
