//! Core types for draughts.
//!
//! This crate provides the fundamental types used across the draughts engine:
//! - [`Side`] for the two players
//! - [`Piece`] and [`PieceKind`] for piece representation
//! - [`Square`] for board coordinates
//! - [`Move`] for move representation
//! - Board diagram parsing and serialization

mod diagram;
mod mov;
mod piece;
mod side;
mod square;

pub use diagram::{Diagram, DiagramError};
pub use mov::{Move, MoveRequest};
pub use piece::{Piece, PieceKind};
pub use side::Side;
pub use square::Square;
