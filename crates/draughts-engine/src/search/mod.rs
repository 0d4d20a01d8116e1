//! Move selection for the computer player.
//!
//! The difficulty is a closed set of policies:
//! - [`Difficulty::Random`] - any legal move, uniformly
//! - [`Difficulty::Greedy`] - one-ply heuristic, see [`greedy_move`]
//! - [`Difficulty::Minimax`] - fixed-depth minimax with alpha-beta pruning
//!
//! Every policy picks from a candidate set that is already restricted by
//! mandatory capture, so no policy can choose an illegal step.

mod greedy;
mod minimax;

pub use greedy::greedy_move;
pub use minimax::{best_move, minimax_value, SearchResult, Searcher, WIN_SCORE};

use crate::movegen::generate_moves;
use crate::Board;
use draughts_core::{Move, Side};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

/// How the computer chooses its moves. Fixed for the length of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Random,
    Greedy,
    Minimax { depth: u8 },
}

impl Difficulty {
    /// Search depth of the reference minimax policy, in plies.
    pub const DEFAULT_DEPTH: u8 = 3;
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Minimax {
            depth: Self::DEFAULT_DEPTH,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Random => write!(f, "random"),
            Difficulty::Greedy => write!(f, "greedy"),
            Difficulty::Minimax { depth } => write!(f, "minimax (depth {})", depth),
        }
    }
}

/// Picks a move for `side` among all its legal moves.
///
/// Returns `None` when `side` has no legal move, which means it has lost.
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    side: Side,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Move> {
    let moves = generate_moves(board, side);
    choose_move_among(board, side, moves.as_slice(), difficulty, rng)
}

/// Picks a move for `side` among the given candidates.
///
/// The session uses this while a chain capture is in progress, when only
/// the jumping piece's continuations may be played.
pub fn choose_move_among<R: Rng + ?Sized>(
    board: &Board,
    side: Side,
    candidates: &[Move],
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Move> {
    match difficulty {
        Difficulty::Random => candidates.choose(rng).copied(),
        Difficulty::Greedy => greedy_move(board, candidates),
        Difficulty::Minimax { depth } => Searcher::new(side)
            .best_move_among(board, candidates, depth)
            .map(|result| result.mv),
    }
}
