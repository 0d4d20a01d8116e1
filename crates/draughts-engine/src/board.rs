//! Draughts board representation.

use draughts_core::{Diagram, DiagramError, Piece, PieceKind, Side, Square};
use std::fmt;

use crate::Bitboard;

/// The placement of every piece on the board.
///
/// A board is a small `Copy` value, so search code can explore a child
/// position by copying and never has to undo changes to a shared board.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Squares occupied by each side, indexed by [`Side::index`].
    sides: [Bitboard; 2],
    /// Squares occupied by crowned pieces of either side.
    kings: Bitboard,
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            sides: [Bitboard::EMPTY; 2],
            kings: Bitboard::EMPTY,
        }
    }

    /// Creates the standard starting position: Black men on the dark
    /// squares of rows 0-2, Red men on rows 5-7.
    pub const fn initial() -> Self {
        let black = Bitboard::row(0).0 | Bitboard::row(1).0 | Bitboard::row(2).0;
        let red = Bitboard::row(5).0 | Bitboard::row(6).0 | Bitboard::row(7).0;
        Board {
            sides: [
                Bitboard(red & Bitboard::DARK.0),
                Bitboard(black & Bitboard::DARK.0),
            ],
            kings: Bitboard::EMPTY,
        }
    }

    /// Creates a board from a diagram string.
    pub fn from_diagram(text: &str) -> Result<Self, DiagramError> {
        Diagram::parse(text).map(Board::from)
    }

    /// Converts the board into a diagram.
    pub fn to_diagram(&self) -> Diagram {
        let mut diagram = Diagram::empty();
        for sq in self.occupied() {
            diagram.set(sq, self.piece_at(sq));
        }
        diagram
    }

    /// Returns the piece at the given square, if any.
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        let side = if self.sides[Side::Red.index()].contains(sq) {
            Side::Red
        } else if self.sides[Side::Black.index()].contains(sq) {
            Side::Black
        } else {
            return None;
        };

        let kind = if self.kings.contains(sq) {
            PieceKind::King
        } else {
            PieceKind::Man
        };
        Some(Piece::new(side, kind))
    }

    /// Places a piece, replacing whatever was on the square.
    pub fn set_piece(&mut self, sq: Square, piece: Piece) {
        self.remove_piece(sq);
        self.sides[piece.side.index()].set(sq);
        if piece.is_king() {
            self.kings.set(sq);
        }
    }

    /// Removes and returns the piece on a square.
    pub fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        let piece = self.piece_at(sq)?;
        self.sides[piece.side.index()].clear(sq);
        self.kings.clear(sq);
        Some(piece)
    }

    /// Returns true if no piece stands on the square.
    #[inline]
    pub fn is_vacant(&self, sq: Square) -> bool {
        !self.occupied().contains(sq)
    }

    /// Returns all squares holding a piece of `side`.
    #[inline]
    pub fn pieces(&self, side: Side) -> Bitboard {
        self.sides[side.index()]
    }

    /// Returns the crowned pieces of `side`.
    #[inline]
    pub fn kings(&self, side: Side) -> Bitboard {
        self.sides[side.index()] & self.kings
    }

    /// Returns the uncrowned pieces of `side`.
    #[inline]
    pub fn men(&self, side: Side) -> Bitboard {
        self.sides[side.index()] & !self.kings
    }

    /// Returns the number of pieces `side` has left.
    #[inline]
    pub fn count(&self, side: Side) -> u32 {
        self.sides[side.index()].count()
    }

    /// Returns a bitboard of all occupied squares.
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.sides[0] | self.sides[1]
    }

    /// Returns the same position seen from the other side of the table:
    /// colours swapped and every square rotated half a turn.
    pub fn mirrored(&self) -> Board {
        Board {
            sides: [
                self.sides[Side::Black.index()].rotated(),
                self.sides[Side::Red.index()].rotated(),
            ],
            kings: self.kings.rotated(),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl From<Diagram> for Board {
    fn from(diagram: Diagram) -> Self {
        let mut board = Board::empty();
        for (sq, piece) in diagram.pieces() {
            board.set_piece(sq, piece);
        }
        board
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board(")?;
        writeln!(f, "{}", self.to_diagram())?;
        write!(f, ")")
    }
}

/// Prints the board with rank digits on the left and file letters below.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8u8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8u8 {
                let c = Square::new(row, col)
                    .and_then(|sq| self.piece_at(sq))
                    .map_or('.', Piece::to_char);
                write!(f, "{} ", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
