//! Backtracking tour search.

use crate::board::{Board, BORDER};
use crate::moves::{self, KNIGHT_OFFSETS};
use crate::Position;
use serde::{Deserialize, Serialize};

/// A completed tour: every cell of a `size` x `size` board, in
/// visiting order, each consecutive pair one knight move apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tour {
    size: usize,
    cells: Vec<Position>,
}

impl Tour {
    /// Side length of the board this tour covers.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of visited cells, always `size * size` for a tour the
    /// solver produced.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The visited cells in order, start first.
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    /// Consecutive `(from, to)` pairs, for move-by-move listings.
    pub fn steps(&self) -> impl Iterator<Item = (Position, Position)> + '_ {
        self.cells.windows(2).map(|w| (w[0], w[1]))
    }

    /// True iff the path visits all `size * size` cells exactly once
    /// and every consecutive pair differs by a knight offset.
    pub fn is_complete(&self) -> bool {
        let expected = self.size * self.size;
        if self.cells.len() != expected {
            return false;
        }

        let mut seen = vec![false; expected];
        for pos in &self.cells {
            if pos.row >= self.size || pos.col >= self.size {
                return false;
            }
            let index = pos.row * self.size + pos.col;
            if seen[index] {
                return false;
            }
            seen[index] = true;
        }

        self.steps().all(|(from, to)| {
            let dr = to.row as i32 - from.row as i32;
            let dc = to.col as i32 - from.col as i32;
            KNIGHT_OFFSETS.contains(&(dr, dc))
        })
    }
}

/// Unit struct solver — stateless, all state is per-call.
pub struct Solver;

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Search for a tour of a `size` x `size` board starting at
    /// `start`, in user coordinates.
    ///
    /// Returns `None` when the exhaustive search runs out of options —
    /// an expected outcome for some `(size, start)` combinations (no
    /// 3x3 or 4x4 board has a tour from any start), not an error.
    ///
    /// Callers validate the inputs: `size` in `[MIN_SIZE, MAX_SIZE]`
    /// and `start` on the board.
    pub fn solve(&self, size: usize, start: Position) -> Option<Tour> {
        let mut board = Board::new(size);
        let row = start.row + BORDER;
        let col = start.col + BORDER;
        board.mark(row, col, 1);

        // The path accumulates on the way back out of the recursion,
        // last move first; one reversal at the end puts it in visiting
        // order.
        let mut path = Vec::with_capacity(size * size);
        if !Self::extend(&mut board, row, col, 2, &mut path) {
            return None;
        }
        path.push(start);
        path.reverse();
        Some(Tour { size, cells: path })
    }

    /// Try to place move `current_move` on each ranked candidate from
    /// `(row, col)`, recursing on the rest of the tour and undoing the
    /// placement on dead ends. Depth is bounded by `size * size`, at
    /// most 4096 frames, each holding two coordinates and one small
    /// candidate vector.
    fn extend(
        board: &mut Board,
        row: usize,
        col: usize,
        current_move: i32,
        path: &mut Vec<Position>,
    ) -> bool {
        if current_move as usize > board.size() * board.size() {
            return true;
        }

        for (next_row, next_col) in moves::ranked_moves(board, row, col) {
            board.mark(next_row, next_col, current_move);
            if Self::extend(board, next_row, next_col, current_move + 1, path) {
                path.push(Position::new(next_row - BORDER, next_col - BORDER));
                return true;
            }
            board.unmark(next_row, next_col);
        }

        false
    }
}
