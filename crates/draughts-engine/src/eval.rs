//! Static evaluation.
//!
//! Scores are from Black's point of view: positive favours Black, negative
//! favours Red. Terms, in points:
//! - material: 5 per man, 10 per king
//! - men: 0.1 per row advanced from their home row
//! - kings: 0.2 × (8 − Manhattan distance to the board centre)
//!
//! Terms are summed in tenths of a point, so mirroring a position negates
//! its score exactly.

use crate::Board;
use draughts_core::{Side, Square};

/// Value of a man, in tenths.
pub const MAN_VALUE: i32 = 50;
/// Value of a king, in tenths.
pub const KING_VALUE: i32 = 100;
/// Bonus per row a man has advanced, in tenths.
pub const ADVANCE_BONUS: i32 = 1;
/// Bonus per unit of closeness to the centre for a king, in tenths.
pub const CENTRE_BONUS: i32 = 2;

/// Manhattan distance from a square to the centre point (3.5, 3.5).
///
/// Always a whole number: 1 for the four centre squares, 7 for the corners.
#[inline]
pub fn centre_distance(sq: Square) -> i32 {
    let twice = (7 - 2 * sq.row() as i32).abs() + (7 - 2 * sq.col() as i32).abs();
    twice / 2
}

fn side_tenths(board: &Board, side: Side) -> i32 {
    let men: i32 = board
        .men(side)
        .into_iter()
        .map(|sq| MAN_VALUE + ADVANCE_BONUS * side.rows_advanced(sq.row()) as i32)
        .sum();
    let kings: i32 = board
        .kings(side)
        .into_iter()
        .map(|sq| KING_VALUE + CENTRE_BONUS * (8 - centre_distance(sq)))
        .sum();
    men + kings
}

/// Scores the board in tenths of a point, Black positive.
pub fn evaluate_tenths(board: &Board) -> i32 {
    side_tenths(board, Side::Black) - side_tenths(board, Side::Red)
}

/// Scores the board, Black positive.
pub fn evaluate(board: &Board) -> f64 {
    f64::from(evaluate_tenths(board)) / 10.0
}

/// Scores the board from `side`'s point of view.
pub fn evaluate_for(board: &Board, side: Side) -> f64 {
    match side {
        Side::Black => evaluate(board),
        Side::Red => -evaluate(board),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    fn board(text: &str) -> Board {
        Board::from_diagram(text).unwrap()
    }

    #[test]
    fn initial_position_is_balanced() {
        assert_eq!(evaluate(&Board::initial()), 0.0);
    }

    #[test]
    fn empty_board_scores_zero() {
        assert_eq!(evaluate(&Board::empty()), 0.0);
    }

    #[test]
    fn centre_distance_values() {
        assert_eq!(centre_distance(sq(3, 4)), 1);
        assert_eq!(centre_distance(sq(4, 3)), 1);
        assert_eq!(centre_distance(sq(0, 7)), 7);
        assert_eq!(centre_distance(sq(7, 0)), 7);
        assert_eq!(centre_distance(sq(2, 5)), 3);
    }

    #[test]
    fn lone_black_man_scores_material_and_advance() {
        let b = board(
            "
            ........
            ........
            ........
            ........
            ...b....
            ........
            ........
            ........",
        );
        // 5 + 4 rows × 0.1
        assert_eq!(evaluate_tenths(&b), 54);
        assert!((evaluate(&b) - 5.4).abs() < 1e-12);
    }

    #[test]
    fn lone_red_king_scores_negative() {
        let b = board(
            "
            ........
            ........
            ........
            ....R...
            ........
            ........
            ........
            ........",
        );
        // 10 + 0.2 × (8 - 1)
        assert_eq!(evaluate_tenths(&b), -114);
        assert!((evaluate_for(&b, Side::Red) - 11.4).abs() < 1e-12);
    }

    #[test]
    fn advancing_improves_the_score_for_the_mover() {
        let back = board(
            "
            ........
            ..b.....
            ........
            ........
            ........
            ........
            .....r..
            ........",
        );
        let advanced_black = board(
            "
            ........
            ........
            ........
            ........
            .b......
            ........
            .....r..
            ........",
        );
        let advanced_red = board(
            "
            ........
            ..b.....
            ........
            ......r.
            ........
            ........
            ........
            ........",
        );
        assert!(evaluate_for(&advanced_black, Side::Black) > evaluate_for(&back, Side::Black));
        assert!(evaluate_for(&advanced_red, Side::Red) > evaluate_for(&back, Side::Red));
    }

    #[test]
    fn king_prefers_the_centre() {
        let corner = board(
            "
            .......B
            ........
            ........
            ........
            ........
            ........
            ........
            ........",
        );
        let centre = board(
            "
            ........
            ........
            ........
            ....B...
            ........
            ........
            ........
            ........",
        );
        assert!(evaluate(&centre) > evaluate(&corner));
    }

    #[test]
    fn mirrored_position_negates_score() {
        let b = board(
            "
            ........
            ..b.....
            .....B..
            ........
            ...r....
            ........
            .R......
            r.......",
        );
        assert_eq!(evaluate(&b.mirrored()), -evaluate(&b));
        assert_ne!(evaluate(&b), 0.0);
    }
}
