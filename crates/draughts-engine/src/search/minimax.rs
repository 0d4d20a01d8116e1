//! Fixed-depth minimax with alpha-beta pruning.
//!
//! Scores are from the point of view of the searching side (the maximizer).
//! Each ply is a single jump or step: a chain capture is searched as
//! alternating plies rather than as one compound move.

use crate::eval::evaluate_for;
use crate::movegen::{generate_moves, make_move};
use crate::Board;
use draughts_core::{Move, Side};
use tracing::debug;

/// Base score of a decided position. A win found with `d` plies of depth
/// remaining scores `WIN_SCORE + d`, so sooner wins rank above later ones.
pub const WIN_SCORE: f64 = 1000.0;

/// Result of a root search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    pub mv: Move,
    pub score: f64,
    pub nodes: u64,
}

/// Search state for one side.
#[derive(Debug)]
pub struct Searcher {
    maximizer: Side,
    nodes: u64,
}

impl Searcher {
    pub fn new(maximizer: Side) -> Self {
        Searcher {
            maximizer,
            nodes: 0,
        }
    }

    /// Finds the best of the maximizer's legal moves.
    pub fn best_move(&mut self, board: &Board, depth: u8) -> Option<SearchResult> {
        let moves = generate_moves(board, self.maximizer);
        self.best_move_among(board, moves.as_slice(), depth)
    }

    /// Finds the best of the given candidate moves.
    ///
    /// Ties go to the earliest candidate. A depth of zero is searched as one.
    pub fn best_move_among(
        &mut self,
        board: &Board,
        candidates: &[Move],
        depth: u8,
    ) -> Option<SearchResult> {
        let depth = depth.max(1);
        let mut alpha = f64::NEG_INFINITY;
        let beta = f64::INFINITY;
        let mut best: Option<(Move, f64)> = None;

        for &mv in candidates {
            let child = make_move(board, mv);
            let score = self.alpha_beta(&child, depth - 1, alpha, beta, false);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
            if score > alpha {
                alpha = score;
            }
        }

        let (mv, score) = best?;
        debug!(
            side = %self.maximizer,
            depth,
            best = %mv,
            score,
            nodes = self.nodes,
            "search finished"
        );
        Some(SearchResult {
            mv,
            score,
            nodes: self.nodes,
        })
    }

    fn alpha_beta(
        &mut self,
        board: &Board,
        depth: u8,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> f64 {
        self.nodes += 1;

        if depth == 0 {
            return evaluate_for(board, self.maximizer);
        }

        let side = if maximizing {
            self.maximizer
        } else {
            self.maximizer.opposite()
        };
        let moves = generate_moves(board, side);
        if moves.is_empty() {
            return terminal_score(depth, maximizing);
        }

        if maximizing {
            let mut best = f64::NEG_INFINITY;
            for &mv in &moves {
                let child = make_move(board, mv);
                let score = self.alpha_beta(&child, depth - 1, alpha, beta, false);
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = f64::INFINITY;
            for &mv in &moves {
                let child = make_move(board, mv);
                let score = self.alpha_beta(&child, depth - 1, alpha, beta, true);
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}

/// Score of a node where the side to move has no legal move.
///
/// The win is biased by the remaining depth so a sooner win scores higher.
/// This departs from a `-1000 + depth` / `1000 - depth` form, which would
/// rank slower wins above sooner ones.
fn terminal_score(depth: u8, maximizing: bool) -> f64 {
    let score = WIN_SCORE + f64::from(depth);
    if maximizing {
        -score
    } else {
        score
    }
}

/// Finds the best legal move for `side` at the given depth.
pub fn best_move(board: &Board, side: Side, depth: u8) -> Option<Move> {
    Searcher::new(side)
        .best_move(board, depth)
        .map(|result| result.mv)
}

/// Plain minimax value of a position, without pruning.
///
/// `maximizing` says whether `maximizer` is the side to move.
pub fn minimax_value(board: &Board, maximizer: Side, depth: u8, maximizing: bool) -> f64 {
    if depth == 0 {
        return evaluate_for(board, maximizer);
    }
    let side = if maximizing {
        maximizer
    } else {
        maximizer.opposite()
    };
    let moves = generate_moves(board, side);
    if moves.is_empty() {
        return terminal_score(depth, maximizing);
    }

    let values = moves
        .as_slice()
        .iter()
        .map(|&mv| minimax_value(&make_move(board, mv), maximizer, depth - 1, !maximizing));
    if maximizing {
        values.fold(f64::NEG_INFINITY, f64::max)
    } else {
        values.fold(f64::INFINITY, f64::min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use draughts_core::Square;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    fn board(text: &str) -> Board {
        Board::from_diagram(text).unwrap()
    }

    const MIDGAME: &str = "
        .b.b.b.b
        ........
        .b.b.b..
        ..b.....
        ...r.r..
        r.....r.
        .r.r...r
        r.r.....";

    #[test]
    fn search_is_deterministic() {
        let b = Board::initial();
        let first = Searcher::new(Side::Black).best_move(&b, 3);
        let second = Searcher::new(Side::Black).best_move(&b, 3);
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn pruned_score_matches_plain_minimax() {
        for (b, side) in [
            (Board::initial(), Side::Red),
            (Board::initial(), Side::Black),
            (board(MIDGAME), Side::Red),
            (board(MIDGAME), Side::Black),
        ] {
            for depth in 1..=4 {
                let result = Searcher::new(side).best_move(&b, depth).unwrap();
                assert_eq!(result.score, minimax_value(&b, side, depth, true));

                let child = make_move(&b, result.mv);
                assert_eq!(result.score, minimax_value(&child, side, depth - 1, false));
            }
        }
    }

    #[test]
    fn pruning_visits_fewer_nodes() {
        let b = board(MIDGAME);
        let result = Searcher::new(Side::Red).best_move(&b, 4).unwrap();

        fn count(b: &Board, side: Side, depth: u8) -> u64 {
            if depth == 0 {
                return 1;
            }
            let moves = generate_moves(b, side);
            1 + moves
                .as_slice()
                .iter()
                .map(|&m| count(&make_move(b, m), side.opposite(), depth - 1))
                .sum::<u64>()
        }
        let full = count(&b, Side::Red, 4) - 1;
        assert!(result.nodes < full, "{} >= {}", result.nodes, full);
    }

    #[test]
    fn capturing_the_last_piece_scores_a_win() {
        let b = board(
            "
            ........
            ........
            ........
            ..b.....
            ...r....
            ........
            ........
            ........",
        );
        let result = Searcher::new(Side::Black).best_move(&b, 3).unwrap();
        assert_eq!(result.mv, Move::jump(sq(3, 2), sq(4, 3), sq(5, 4)));
        assert_eq!(result.score, WIN_SCORE + 2.0);
    }

    #[test]
    fn side_without_moves_has_lost() {
        let b = board(
            "
            ........
            ........
            ........
            ........
            ........
            ........
            ........
            b.......",
        );
        assert_eq!(best_move(&b, Side::Black, 3), None);
        assert_eq!(minimax_value(&b, Side::Black, 3, true), -(WIN_SCORE + 3.0));
        assert_eq!(minimax_value(&b, Side::Red, 3, false), WIN_SCORE + 3.0);
    }

    #[test]
    fn depth_zero_searches_one_ply() {
        let b = Board::initial();
        let shallow = Searcher::new(Side::Red).best_move(&b, 0).unwrap();
        let one = Searcher::new(Side::Red).best_move(&b, 1).unwrap();
        assert_eq!(shallow, one);
    }

    #[test]
    fn looks_ahead_past_a_hanging_step() {
        let b = board(
            "
            .b......
            ........
            ........
            b.......
            ........
            ..r.....
            ........
            ........",
        );
        // One ply sees a tie and keeps the first step, which hangs the man.
        let shallow = Searcher::new(Side::Red).best_move(&b, 1).unwrap();
        assert_eq!(shallow.mv, Move::step(sq(5, 2), sq(4, 1)));

        for depth in 2..=3 {
            let result = Searcher::new(Side::Red).best_move(&b, depth).unwrap();
            assert_eq!(result.mv, Move::step(sq(5, 2), sq(4, 3)));
        }
    }
}
