//! Knight move generation and Warnsdorff ordering.

use crate::board::Board;

/// The eight knight moves as `(row, col)` deltas, in fixed enumeration
/// order. Candidates are generated in exactly this order, and ties
/// between equal-degree candidates resolve to it.
pub(crate) const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// Landable destinations one knight move from `(row, col)`, in
/// offset-table order.
///
/// `(row, col)` must be an interior (bordered) coordinate; every
/// offset from an interior cell stays inside the allocated grid, so
/// the probes below never go out of range.
pub(crate) fn candidate_moves(board: &Board, row: usize, col: usize) -> Vec<(usize, usize)> {
    let mut moves = Vec::with_capacity(KNIGHT_OFFSETS.len());
    for &(dr, dc) in &KNIGHT_OFFSETS {
        let next_row = (row as i32 + dr) as usize;
        let next_col = (col as i32 + dc) as usize;
        if board.is_landable(next_row, next_col) {
            moves.push((next_row, next_col));
        }
    }
    moves
}

/// Number of onward moves from `(row, col)` against the current board.
pub(crate) fn onward_degree(board: &Board, row: usize, col: usize) -> usize {
    candidate_moves(board, row, col).len()
}

/// Candidates from `(row, col)` ordered by Warnsdorff's rule:
/// ascending onward-degree, so the most constrained continuation is
/// tried first. The sort is stable, leaving equal-degree candidates in
/// offset-table order. Read-only: the board is probed, never mutated.
pub(crate) fn ranked_moves(board: &Board, row: usize, col: usize) -> Vec<(usize, usize)> {
    let mut moves = candidate_moves(board, row, col);
    moves.sort_by_key(|&(r, c)| onward_degree(board, r, c));
    moves
}
