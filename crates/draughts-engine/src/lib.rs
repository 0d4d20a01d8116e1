//! Draughts engine with bitboard representation.
//!
//! This crate provides:
//! - [`Bitboard`] - 64-bit set of squares
//! - [`Board`] - piece placement, cheap to copy
//! - [`Game`] - turn order, chain captures, history and undo
//! - [`RuleSet`] - trait for implementing draughts variants
//! - Move generation with mandatory capture
//! - Static evaluation and fixed-depth alpha-beta search
//!
//! # Architecture
//!
//! Each side's pieces and the set of kings are 64-bit integers where each
//! bit represents a square. A [`Board`] is `Copy`, so the search explores
//! children on private copies and never undoes moves in place.
//!
//! # Example
//!
//! ```
//! use draughts_engine::{Game, StandardDraughts, TurnStatus};
//! use draughts_engine::rules::RuleSet;
//! use draughts_engine::search::{choose_move, Difficulty};
//! use draughts_core::{MoveRequest, Side};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! // Stateless rules
//! let board = StandardDraughts.initial_board();
//! let moves = StandardDraughts.generate_moves(&board, Side::Red);
//! println!("Legal moves from the starting position: {}", moves.len());
//!
//! // A full game
//! let mut game = Game::new();
//! let status = game.request(MoveRequest::from_notation("c3-d4").unwrap()).unwrap();
//! assert_eq!(status, TurnStatus::Passed);
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let reply = choose_move(game.board(), Side::Black, Difficulty::default(), &mut rng);
//! assert!(reply.is_some());
//! ```

mod bitboard;
mod board;
pub mod eval;
mod game;
pub mod movegen;
pub mod rules;
pub mod search;

pub use bitboard::Bitboard;
pub use board::Board;
pub use eval::{evaluate, evaluate_for};
pub use game::{Game, GameError, GameMove, TurnStatus};
pub use movegen::{
    apply_move, capture_moves_from, generate_moves, has_capture, make_move, piece_moves,
    MoveEffect, MoveList,
};
pub use rules::{outcome, Outcome, RuleSet, StandardDraughts};
pub use search::{best_move, choose_move, Difficulty};
