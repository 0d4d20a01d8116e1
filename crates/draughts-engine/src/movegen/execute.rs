//! Move execution: relocation, capture removal, and crowning.

use super::capture_moves_from;
use crate::Board;
use draughts_core::{Move, Piece, Square};

/// Everything that changed when a move was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEffect {
    /// The board after the move.
    pub board: Board,
    /// The moving piece as it stood before the move, or `None` if `from` was empty.
    pub moved: Option<Piece>,
    /// The piece removed by the move and where it stood.
    pub captured: Option<(Square, Piece)>,
    /// True if a man reached its crowning row on this move.
    pub promoted: bool,
    /// True if the move was a jump and the same piece can jump again, so
    /// the mover keeps the turn.
    pub further_capture: bool,
}

/// Applies a move and returns the resulting board.
///
/// This is the fast path used by search: it does not look for chain
/// continuations. The move is not validated; a move from an empty square
/// leaves the board unchanged.
pub fn make_move(board: &Board, m: Move) -> Board {
    let mut next = *board;
    let Some(piece) = next.remove_piece(m.from()) else {
        return next;
    };

    let crowned = !piece.is_king() && m.to().row() == piece.side.promotion_row();
    let piece = if crowned { piece.promoted() } else { piece };
    next.set_piece(m.to(), piece);

    for &sq in m.captured() {
        next.remove_piece(sq);
    }
    next
}

/// Applies a move and reports promotion, the captured piece, and whether
/// the chain capture continues from the landing square.
pub fn apply_move(board: &Board, m: Move) -> MoveEffect {
    let moved = board.piece_at(m.from());
    let captured = m
        .captured()
        .first()
        .and_then(|&sq| board.piece_at(sq).map(|piece| (sq, piece)));
    let next = make_move(board, m);

    let promoted = match (moved, next.piece_at(m.to())) {
        (Some(before), Some(after)) => !before.is_king() && after.is_king(),
        _ => false,
    };
    let further_capture =
        moved.is_some() && m.is_capture() && !capture_moves_from(&next, m.to()).is_empty();

    MoveEffect {
        board: next,
        moved,
        captured,
        promoted,
        further_capture,
    }
}
