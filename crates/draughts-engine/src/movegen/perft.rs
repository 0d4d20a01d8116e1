//! Perft (performance test) for move generator validation.
//!
//! Perft counts the number of leaf nodes at a given depth, which can be
//! compared against known-correct values to validate the move generator.
//! Like the search, it treats every jump as one ply and hands the move to
//! the opponent afterwards.

use super::{generate_moves, make_move};
use crate::Board;
use draughts_core::Side;

/// Counts the number of leaf nodes at the given depth.
pub fn perft(board: &Board, side: Side, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_moves(board, side);

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for m in &moves {
        let next = make_move(board, *m);
        nodes += perft(&next, side.opposite(), depth - 1);
    }
    nodes
}

/// Perft with divide - shows node count for each move at depth-1.
/// Useful for debugging to identify which moves have incorrect counts.
pub fn perft_divide(board: &Board, side: Side, depth: u32) -> Vec<(String, u64)> {
    let moves = generate_moves(board, side);
    let mut results = Vec::with_capacity(moves.len());

    for m in &moves {
        let next = make_move(board, *m);
        let nodes = if depth > 1 {
            perft(&next, side.opposite(), depth - 1)
        } else {
            1
        };
        results.push((m.to_notation(), nodes));
    }

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
