use crate::board::{Board, CELLS};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty levels, each mapping to a shuffle depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Every level, in menu order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Number of random legal moves applied from the goal when shuffling.
    pub fn shuffle_depth(self) -> usize {
        match self {
            Difficulty::Easy => 30,
            Difficulty::Medium => 80,
            Difficulty::Hard => 150,
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Easy
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        write!(f, "{}", name)
    }
}

/// Immutable view of the board and move count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub board: Board,
    pub moves: u32,
}

/// What a call to [`Engine::attempt_move`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Whether the selected tile slid into the blank. Rejected selections
    /// leave the board and move count untouched.
    pub moved: bool,
    /// Whether the board is in the goal configuration after the call.
    pub solved: bool,
    /// Board and move count after the call.
    pub state: Snapshot,
}

/// The puzzle engine: board, move count, and shuffle randomness.
///
/// Two observable states: Active (board differs from the goal) and Solved.
/// A winning move transitions Active to Solved; only [`Engine::reset`]
/// transitions back.
pub struct Engine {
    board: Board,
    moves: u32,
    level: Difficulty,
    rng: StdRng,
}

impl Engine {
    /// Creates an engine seeded from entropy and shuffles immediately at
    /// `level`.
    pub fn new(level: Difficulty) -> Self {
        Self::with_rng(level, StdRng::from_entropy())
    }

    /// Creates an engine with a fixed seed for reproducible shuffles.
    pub fn with_seed(level: Difficulty, seed: u64) -> Self {
        Self::with_rng(level, StdRng::seed_from_u64(seed))
    }

    fn with_rng(level: Difficulty, rng: StdRng) -> Self {
        let mut engine = Self {
            board: Board::solved(),
            moves: 0,
            level,
            rng,
        };
        engine.reset(level);
        engine
    }

    /// Starts from a known position instead of a shuffle, with the move
    /// count at 0.
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            moves: 0,
            level: Difficulty::default(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Replaces the board with a fresh shuffle at `level` and resets the
    /// move count.
    ///
    /// The shuffle walks the blank through `shuffle_depth` uniformly random
    /// legal swaps starting from the goal, so every result is reachable
    /// from the goal and therefore solvable. A short shuffle can wander
    /// back onto the goal itself; that is accepted.
    pub fn reset(&mut self, level: Difficulty) {
        self.level = level;
        self.board = Board::solved();
        for _ in 0..level.shuffle_depth() {
            let blank = self.board.blank_index();
            let neighbors: Vec<usize> = Board::neighbors_of(blank).collect();
            let &target = neighbors
                .choose(&mut self.rng)
                .expect("every cell has at least two neighbors");
            self.board.swap(blank, target);
        }
        self.moves = 0;
    }

    /// Attempts to slide the tile at `index` into the blank.
    ///
    /// Selections that are not orthogonally adjacent to the blank are
    /// silently rejected, as is any selection once the board is solved.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 9`; an out-of-range index can only come from a
    /// bug in the calling presentation layer.
    pub fn attempt_move(&mut self, index: usize) -> MoveOutcome {
        assert!(index < CELLS, "cell index out of range: {index}");

        let blank = self.board.blank_index();
        if self.board.is_solved() || !Board::is_adjacent(blank, index) {
            return MoveOutcome {
                moved: false,
                solved: self.board.is_solved(),
                state: self.current_state(),
            };
        }

        self.board.swap(blank, index);
        self.moves += 1;
        MoveOutcome {
            moved: true,
            solved: self.board.is_solved(),
            state: self.current_state(),
        }
    }

    /// Whether the board equals the goal configuration.
    pub fn is_solved(&self) -> bool {
        self.board.is_solved()
    }

    /// Immutable snapshot of the board and move count.
    pub fn current_state(&self) -> Snapshot {
        Snapshot {
            board: self.board,
            moves: self.moves,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn level(&self) -> Difficulty {
        self.level
    }
}
