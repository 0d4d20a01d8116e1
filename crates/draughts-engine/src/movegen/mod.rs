//! Move generation.
//!
//! Legal moves are generated per piece and then combined side-wide:
//! - A man steps or jumps along its two forward diagonals; a king uses all four.
//! - A jump passes over an adjacent opposing piece onto the empty square
//!   directly beyond it. There are no long-range king moves.
//! - Captures are mandatory. If any piece of the side can jump, only jumps
//!   are legal for the whole side.
//!
//! Generation order is deterministic: pieces by ascending square index, then
//! directions in [`DIRECTIONS`] order.

mod execute;
pub mod perft;

use crate::Board;
use draughts_core::{Move, Piece, PieceKind, Side, Square};

pub use execute::{apply_move, make_move, MoveEffect};

/// All four diagonals as (row delta, column delta).
pub const DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

const RED_FORWARD: [(i8, i8); 2] = forward_diagonals(Side::Red);
const BLACK_FORWARD: [(i8, i8); 2] = forward_diagonals(Side::Black);

const fn forward_diagonals(side: Side) -> [(i8, i8); 2] {
    let dr = side.forward();
    [(dr, -1), (dr, 1)]
}

/// A list of moves with a fixed maximum capacity.
///
/// Twelve kings with four directions each is the most any side can have,
/// so a fixed-size array avoids heap allocations during search.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; Self::MAX_MOVES],
    len: usize,
}

impl MoveList {
    /// Upper bound on the moves available to one side.
    pub const MAX_MOVES: usize = 64;

    /// Creates an empty move list.
    #[inline]
    pub const fn new() -> Self {
        MoveList {
            moves: [Move::NULL; Self::MAX_MOVES],
            len: 0,
        }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: Move) {
        debug_assert!(self.len < Self::MAX_MOVES);
        self.moves[self.len] = m;
        self.len += 1;
    }

    /// Returns the number of moves.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    /// Returns true if any move in the list is a capture.
    #[inline]
    pub fn has_capture(&self) -> bool {
        self.as_slice().iter().any(|m| m.is_capture())
    }

    /// Clears the move list.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Keeps only the moves matching the predicate, preserving order.
    pub fn retain(&mut self, mut keep: impl FnMut(&Move) -> bool) {
        let mut kept = 0;
        for i in 0..self.len {
            if keep(&self.moves[i]) {
                self.moves[kept] = self.moves[i];
                kept += 1;
            }
        }
        self.len = kept;
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < self.len);
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        let mut list = MoveList::new();
        for m in iter {
            list.push(m);
        }
        list
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Returns the diagonals a piece may move along.
#[inline]
pub fn directions(piece: Piece) -> &'static [(i8, i8)] {
    match (piece.kind, piece.side) {
        (PieceKind::King, _) => &DIRECTIONS,
        (PieceKind::Man, Side::Red) => &RED_FORWARD,
        (PieceKind::Man, Side::Black) => &BLACK_FORWARD,
    }
}

fn push_jumps(board: &Board, from: Square, piece: Piece, list: &mut MoveList) {
    for &(dr, dc) in directions(piece) {
        // the landing square is checked first so that no lookup happens off the board
        let Some(to) = from.offset(2 * dr, 2 * dc) else {
            continue;
        };
        let Some(over) = from.offset(dr, dc) else {
            continue;
        };
        let jumps_opponent = board
            .piece_at(over)
            .is_some_and(|victim| victim.side != piece.side);
        if jumps_opponent && board.is_vacant(to) {
            list.push(Move::jump(from, over, to));
        }
    }
}

fn push_steps(board: &Board, from: Square, piece: Piece, list: &mut MoveList) {
    for &(dr, dc) in directions(piece) {
        if let Some(to) = from.offset(dr, dc) {
            if board.is_vacant(to) {
                list.push(Move::step(from, to));
            }
        }
    }
}

/// Generates the jumps available to the piece on `from`.
///
/// This is the continuation set while a chain capture is in progress.
/// Returns an empty list if the square is empty.
pub fn capture_moves_from(board: &Board, from: Square) -> MoveList {
    let mut list = MoveList::new();
    if let Some(piece) = board.piece_at(from) {
        push_jumps(board, from, piece, &mut list);
    }
    list
}

/// Generates the moves of the piece on `from` in isolation.
///
/// If the piece can jump, only its jumps are returned. Other pieces of the
/// same side are not considered; use [`generate_moves`] for the side-wide
/// legal set.
pub fn piece_moves(board: &Board, from: Square) -> MoveList {
    let mut list = MoveList::new();
    let Some(piece) = board.piece_at(from) else {
        return list;
    };
    push_jumps(board, from, piece, &mut list);
    if list.is_empty() {
        push_steps(board, from, piece, &mut list);
    }
    list
}

/// Returns true if any piece of `side` has a jump.
pub fn has_capture(board: &Board, side: Side) -> bool {
    board
        .pieces(side)
        .into_iter()
        .any(|from| !capture_moves_from(board, from).is_empty())
}

/// Generates all legal moves for `side`, enforcing mandatory capture.
///
/// If any piece can jump, the result holds every jump of every piece and
/// nothing else. Otherwise it holds every step.
pub fn generate_moves(board: &Board, side: Side) -> MoveList {
    let mut list = MoveList::new();
    for from in board.pieces(side) {
        if let Some(piece) = board.piece_at(from) {
            push_jumps(board, from, piece, &mut list);
        }
    }
    if !list.is_empty() {
        return list;
    }

    for from in board.pieces(side) {
        if let Some(piece) = board.piece_at(from) {
            push_steps(board, from, piece, &mut list);
        }
    }
    list
}
