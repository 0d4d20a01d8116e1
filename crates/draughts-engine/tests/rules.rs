//! End-to-end rules scenarios through the public API.

use draughts_core::{Move, Piece, Side, Square};
use draughts_engine::movegen::perft::perft;
use draughts_engine::rules::RuleSet;
use draughts_engine::{
    apply_move, capture_moves_from, generate_moves, outcome, Board, Game, Outcome,
    StandardDraughts, TurnStatus,
};

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col).unwrap()
}

fn board(text: &str) -> Board {
    Board::from_diagram(text).unwrap()
}

#[test]
fn edge_man_has_a_single_step_from_the_start() {
    let board = StandardDraughts.initial_board();
    assert_eq!(StandardDraughts.first_to_move(), Side::Red);

    let moves = generate_moves(&board, Side::Red);
    let from_edge: Vec<Move> = moves
        .as_slice()
        .iter()
        .copied()
        .filter(|m| m.from() == sq(5, 0))
        .collect();
    assert_eq!(from_edge, vec![Move::step(sq(5, 0), sq(4, 1))]);
    assert!(!moves.has_capture());
}

#[test]
fn capture_overrides_steps_elsewhere() {
    let b = board(
        "
        .b......
        ........
        ........
        ..b.....
        ...r....
        ........
        .....r..
        ........",
    );
    let moves = generate_moves(&b, Side::Red);
    assert_eq!(moves.as_slice(), &[Move::jump(sq(4, 3), sq(3, 2), sq(2, 1))]);

    let step = Move::step(sq(6, 5), sq(5, 4));
    assert!(StandardDraughts.try_make_move(&b, Side::Red, step).is_none());
    let after = StandardDraughts.try_make_move(&b, Side::Red, moves[0]).unwrap();
    assert_eq!(after.piece_at(sq(3, 2)), None);
    assert_eq!(after.piece_at(sq(2, 1)), Some(Piece::man(Side::Red)));
}

#[test]
fn crowned_man_continues_its_chain() {
    let b = board(
        "
        ........
        ..b.b...
        .r......
        ........
        ........
        ......b.
        ........
        ........",
    );
    let first = Move::jump(sq(2, 1), sq(1, 2), sq(0, 3));
    let effect = apply_move(&b, first);
    assert!(effect.promoted);
    assert!(effect.further_capture);
    assert_eq!(effect.board.piece_at(sq(0, 3)), Some(Piece::king(Side::Red)));
    assert_eq!(
        capture_moves_from(&effect.board, sq(0, 3)).as_slice(),
        &[Move::jump(sq(0, 3), sq(1, 4), sq(2, 5))]
    );

    let mut game = Game::from_board(b, Side::Red);
    assert_eq!(
        game.request_move(sq(2, 1), sq(0, 3)),
        Ok(TurnStatus::ChainContinues(sq(0, 3)))
    );
    assert_eq!(game.request_move(sq(0, 3), sq(2, 5)), Ok(TurnStatus::Passed));
    assert_eq!(game.board().count(Side::Black), 1);
}

#[test]
fn men_are_crowned_on_the_far_row() {
    let b = board(
        "
        ........
        r.......
        ........
        ........
        ........
        ........
        .b......
        ........",
    );
    let red = StandardDraughts.make_move(&b, Move::step(sq(1, 0), sq(0, 1)));
    assert_eq!(red.piece_at(sq(0, 1)), Some(Piece::king(Side::Red)));

    let black = StandardDraughts.make_move(&red, Move::step(sq(6, 1), sq(7, 2)));
    assert_eq!(black.piece_at(sq(7, 2)), Some(Piece::king(Side::Black)));

    // A king stepping back off the crowning row stays a king.
    let back = StandardDraughts.make_move(&black, Move::step(sq(0, 1), sq(1, 2)));
    assert_eq!(back.piece_at(sq(1, 2)), Some(Piece::king(Side::Red)));
}

#[test]
fn terminal_positions() {
    let no_black = board(
        "
        ........
        ........
        ........
        ........
        ........
        ........
        .r......
        ........",
    );
    assert_eq!(outcome(&no_black, Side::Black), Outcome::Winner(Side::Red));

    let stuck = board(
        "
        .b......
        r.......
        ........
        ........
        ........
        ........
        ........
        ........",
    );
    assert_eq!(
        StandardDraughts.outcome(&stuck, Side::Red),
        Outcome::Winner(Side::Black)
    );
    assert!(StandardDraughts.is_game_over(&stuck, Side::Red));
    assert_eq!(StandardDraughts.outcome(&stuck, Side::Black), Outcome::Ongoing);
}

#[test]
fn perft_from_the_start() {
    let b = Board::initial();
    assert_eq!(perft(&b, Side::Red, 1), 7);
    assert_eq!(perft(&b, Side::Red, 2), 49);
    assert_eq!(perft(&b, Side::Red, 3), 302);
}
