//! Board diagram parsing and serialization.
//!
//! A diagram is eight lines of eight characters, row 0 first:
//! `.` is an empty square, `r`/`R` a red man/king, `b`/`B` a black man/king.
//! Blank lines and surrounding whitespace are ignored, so diagrams can be
//! written as indented raw strings.

use crate::{Piece, Square};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when parsing a board diagram.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiagramError {
    #[error("invalid diagram: expected 8 rows, got {0}")]
    InvalidRowCount(usize),

    #[error("row {row} has {width} squares, expected 8")]
    InvalidRowWidth { row: usize, width: usize },

    #[error("invalid character '{c}' in row {row}")]
    InvalidCharacter { c: char, row: usize },

    #[error("piece on light square {0}")]
    LightSquare(Square),
}

/// A parsed board diagram: one optional piece per square.
///
/// The engine converts this into its own board representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diagram {
    cells: [[Option<Piece>; 8]; 8],
}

impl Diagram {
    /// The standard starting position.
    pub const STARTING: &'static str = "\
.b.b.b.b
b.b.b.b.
.b.b.b.b
........
........
r.r.r.r.
.r.r.r.r
r.r.r.r.";

    /// Creates a diagram with no pieces.
    pub const fn empty() -> Self {
        Diagram {
            cells: [[None; 8]; 8],
        }
    }

    /// Parses a diagram.
    pub fn parse(text: &str) -> Result<Self, DiagramError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if rows.len() != 8 {
            return Err(DiagramError::InvalidRowCount(rows.len()));
        }

        let mut diagram = Diagram::empty();
        for (row, line) in rows.iter().enumerate() {
            let width = line.chars().count();
            if width != 8 {
                return Err(DiagramError::InvalidRowWidth { row, width });
            }
            for (col, c) in line.chars().enumerate() {
                if c == '.' {
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(DiagramError::InvalidCharacter { c, row })?;
                // row and col are both < 8 here
                let Some(sq) = Square::new(row as u8, col as u8) else {
                    continue;
                };
                if !sq.is_dark() {
                    return Err(DiagramError::LightSquare(sq));
                }
                diagram.cells[row][col] = Some(piece);
            }
        }

        Ok(diagram)
    }

    /// Returns the piece on a square, if any.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    /// Places or clears a piece.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.cells[sq.row() as usize][sq.col() as usize] = piece;
    }

    /// Iterates over occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (0..64u8).filter_map(move |index| {
            let sq = Square::from_index(index)?;
            self.get(sq).map(|piece| (sq, piece))
        })
    }
}

impl Default for Diagram {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Diagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in cells {
                let c = cell.map_or('.', Piece::to_char);
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}
