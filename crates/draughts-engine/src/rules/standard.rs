//! Standard rules implementation.

use super::{outcome, Outcome, RuleSet};
use crate::movegen::{generate_moves, make_move};
use crate::{Board, MoveList};
use draughts_core::{Move, Side};

/// 8x8 draughts as played here:
/// - Men step and jump diagonally forward, kings in all four directions
/// - Jumps are mandatory side-wide and chain while the same piece can jump
/// - Men are crowned on the far row
/// - A side with no pieces or no legal move loses
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardDraughts;

impl RuleSet for StandardDraughts {
    fn initial_board(&self) -> Board {
        Board::initial()
    }

    fn first_to_move(&self) -> Side {
        Side::Red
    }

    fn generate_moves(&self, board: &Board, side: Side) -> MoveList {
        generate_moves(board, side)
    }

    fn make_move(&self, board: &Board, m: Move) -> Board {
        make_move(board, m)
    }

    fn outcome(&self, board: &Board, side_to_move: Side) -> Outcome {
        outcome(board, side_to_move)
    }
}
