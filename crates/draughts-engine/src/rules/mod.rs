//! Rule set abstraction and terminal-state detection.
//!
//! The [`RuleSet`] trait bundles everything the session needs to know about
//! the game's rules behind one seam. [`outcome`] is the terminal detector.

mod standard;

pub use standard::StandardDraughts;

use crate::movegen::generate_moves;
use crate::{Board, MoveList};
use draughts_core::{Move, Side};

/// State of a game: still running, or won by one side.
///
/// There are no draws: a side that cannot move loses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Outcome {
    #[default]
    Ongoing,
    Winner(Side),
}

impl Outcome {
    /// Returns true once a side has won.
    #[inline]
    pub const fn is_over(self) -> bool {
        matches!(self, Outcome::Winner(_))
    }

    /// Returns the winning side, if any.
    #[inline]
    pub const fn winner(self) -> Option<Side> {
        match self {
            Outcome::Ongoing => None,
            Outcome::Winner(side) => Some(side),
        }
    }
}

/// Decides whether the game is over with `side_to_move` about to play.
///
/// A side with no pieces loses. The side to move also loses if it has
/// pieces but no legal move. Only call this once the turn has actually
/// passed, never in the middle of a chain capture.
pub fn outcome(board: &Board, side_to_move: Side) -> Outcome {
    for side in Side::ALL {
        if board.count(side) == 0 {
            return Outcome::Winner(side.opposite());
        }
    }
    if generate_moves(board, side_to_move).is_empty() {
        return Outcome::Winner(side_to_move.opposite());
    }
    Outcome::Ongoing
}

/// Trait for implementing draughts variants.
///
/// # Example
///
/// ```
/// use draughts_engine::rules::RuleSet;
/// use draughts_engine::StandardDraughts;
/// use draughts_core::Side;
///
/// let board = StandardDraughts.initial_board();
/// let moves = StandardDraughts.generate_moves(&board, Side::Red);
/// assert_eq!(moves.len(), 7);
/// ```
pub trait RuleSet {
    /// Returns the starting board for this variant.
    fn initial_board(&self) -> Board;

    /// Returns the side that moves first.
    fn first_to_move(&self) -> Side;

    /// Generates all legal moves for `side`.
    fn generate_moves(&self, board: &Board, side: Side) -> MoveList;

    /// Returns true if the given move is legal for `side`.
    fn is_legal(&self, board: &Board, side: Side, m: Move) -> bool {
        self.generate_moves(board, side).as_slice().contains(&m)
    }

    /// Applies a move, returning the new board.
    ///
    /// The move is not validated; use [`is_legal`](RuleSet::is_legal)
    /// first, or [`try_make_move`](RuleSet::try_make_move).
    fn make_move(&self, board: &Board, m: Move) -> Board;

    /// Attempts to make a move, returning `None` if illegal.
    fn try_make_move(&self, board: &Board, side: Side, m: Move) -> Option<Board> {
        if self.is_legal(board, side, m) {
            Some(self.make_move(board, m))
        } else {
            None
        }
    }

    /// Returns the outcome with `side_to_move` about to play.
    fn outcome(&self, board: &Board, side_to_move: Side) -> Outcome;

    /// Returns true if the game is over.
    fn is_game_over(&self, board: &Board, side_to_move: Side) -> bool {
        self.outcome(board, side_to_move).is_over()
    }
}
