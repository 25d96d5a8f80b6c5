use serde::{Deserialize, Serialize};
use std::fmt;

/// Width and height of the grid.
pub const SIDE: usize = 3;
/// Number of cells on the board.
pub const CELLS: usize = SIDE * SIDE;
/// Label of the blank cell.
pub const BLANK: u8 = 0;

/// A 3x3 arrangement of tile labels in row-major order.
///
/// Always a permutation of 0..=8; label 0 is the blank slot tiles slide
/// into. The goal configuration is the identity permutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [u8; CELLS],
}

impl Board {
    /// The goal configuration: every label on its home cell.
    pub fn solved() -> Self {
        Self {
            cells: std::array::from_fn(|i| i as u8),
        }
    }

    /// Builds a board from raw cells, rejecting anything that is not a
    /// permutation of 0..=8.
    pub fn from_cells(cells: [u8; CELLS]) -> Option<Self> {
        let mut seen = [false; CELLS];
        for &label in &cells {
            let slot = seen.get_mut(label as usize)?;
            if *slot {
                return None;
            }
            *slot = true;
        }
        Some(Self { cells })
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[u8; CELLS] {
        &self.cells
    }

    /// Label at a cell index.
    pub fn tile(&self, index: usize) -> u8 {
        self.cells[index]
    }

    /// Index currently holding the blank.
    pub fn blank_index(&self) -> usize {
        self.cells
            .iter()
            .position(|&label| label == BLANK)
            .expect("board always contains the blank")
    }

    /// Whether two cell indices are orthogonal neighbors.
    ///
    /// Adjacency is checked in grid coordinates, not raw index distance:
    /// indices 2 and 3 differ by one but sit on different rows and are not
    /// adjacent.
    pub fn is_adjacent(a: usize, b: usize) -> bool {
        let (row_a, col_a) = (a / SIDE, a % SIDE);
        let (row_b, col_b) = (b / SIDE, b % SIDE);
        row_a.abs_diff(row_b) + col_a.abs_diff(col_b) == 1
    }

    /// Cell indices orthogonally adjacent to `index`.
    pub fn neighbors_of(index: usize) -> impl Iterator<Item = usize> {
        (0..CELLS).filter(move |&i| Self::is_adjacent(index, i))
    }

    /// Whether every label sits on its home cell.
    pub fn is_solved(&self) -> bool {
        self.cells
            .iter()
            .enumerate()
            .all(|(i, &label)| label as usize == i)
    }

    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        self.cells.swap(a, b);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::solved()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIDE {
            for col in 0..SIDE {
                let label = self.cells[row * SIDE + col];
                if label == BLANK {
                    write!(f, " .")?;
                } else {
                    write!(f, " {}", label)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_board_is_solved() {
        let board = Board::solved();
        assert!(board.is_solved());
        assert_eq!(board.cells(), &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(board.blank_index(), 0);
    }

    #[test]
    fn from_cells_accepts_permutations() {
        let board = Board::from_cells([8, 7, 6, 5, 4, 3, 2, 1, 0]).unwrap();
        assert!(!board.is_solved());
        assert_eq!(board.blank_index(), 8);
    }

    #[test]
    fn from_cells_rejects_duplicates_and_out_of_range() {
        assert!(Board::from_cells([0, 1, 2, 3, 4, 5, 6, 7, 7]).is_none());
        assert!(Board::from_cells([1, 2, 3, 4, 5, 6, 7, 8, 9]).is_none());
    }

    #[test]
    fn adjacency_uses_grid_coordinates() {
        // 2 is the end of row 0, 3 the start of row 1; numerically adjacent
        // indices, but not neighbors on the grid.
        assert!(!Board::is_adjacent(2, 3));
        assert!(!Board::is_adjacent(5, 6));

        assert!(Board::is_adjacent(0, 1));
        assert!(Board::is_adjacent(0, 3));
        assert!(Board::is_adjacent(4, 1));
        assert!(Board::is_adjacent(4, 7));

        // Diagonals and self are out.
        assert!(!Board::is_adjacent(0, 4));
        assert!(!Board::is_adjacent(4, 4));
    }

    #[test]
    fn neighbor_counts_by_position() {
        // Corners have 2 neighbors, edges 3, the center 4.
        for corner in [0, 2, 6, 8] {
            assert_eq!(Board::neighbors_of(corner).count(), 2, "corner {corner}");
        }
        for edge in [1, 3, 5, 7] {
            assert_eq!(Board::neighbors_of(edge).count(), 3, "edge {edge}");
        }
        assert_eq!(Board::neighbors_of(4).count(), 4);
    }

    #[test]
    fn display_renders_blank_as_dot() {
        let board = Board::solved();
        let text = board.to_string();
        assert_eq!(text, " . 1 2\n 3 4 5\n 6 7 8\n");
    }
}
