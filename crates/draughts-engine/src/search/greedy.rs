//! One-ply greedy move choice.

use crate::Board;
use draughts_core::Move;

/// Ranking of a candidate; larger is better, compared field by field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct GreedyKey {
    captures: usize,
    promotes: bool,
    /// Rows advanced from the mover's home row after a step; zero for jumps.
    advance: u8,
}

fn key(board: &Board, m: Move) -> GreedyKey {
    let Some(piece) = board.piece_at(m.from()) else {
        return GreedyKey {
            captures: 0,
            promotes: false,
            advance: 0,
        };
    };
    let promotes = !piece.is_king() && m.to().row() == piece.side.promotion_row();
    let advance = if m.is_capture() {
        0
    } else {
        piece.side.rows_advanced(m.to().row())
    };
    GreedyKey {
        captures: m.captured().len(),
        promotes,
        advance,
    }
}

/// Picks the candidate that captures the most, then crowns a man, then
/// (among steps) lands furthest up the board.
///
/// Ties go to the earliest candidate, so the choice is deterministic.
pub fn greedy_move(board: &Board, candidates: &[Move]) -> Option<Move> {
    let mut best: Option<(GreedyKey, Move)> = None;
    for &m in candidates {
        let k = key(board, m);
        if best.map_or(true, |(best_key, _)| k > best_key) {
            best = Some((k, m));
        }
    }
    best.map(|(_, m)| m)
}
