//! Draughts piece representation.

use crate::Side;

/// Whether a piece has been crowned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Man = 0,
    King = 1,
}

/// A piece on the board: its owner and its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub side: Side,
    pub kind: PieceKind,
}

impl Piece {
    /// Creates a piece.
    #[inline]
    pub const fn new(side: Side, kind: PieceKind) -> Self {
        Piece { side, kind }
    }

    /// Creates an uncrowned piece.
    #[inline]
    pub const fn man(side: Side) -> Self {
        Piece::new(side, PieceKind::Man)
    }

    /// Creates a crowned piece.
    #[inline]
    pub const fn king(side: Side) -> Self {
        Piece::new(side, PieceKind::King)
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self.kind, PieceKind::King)
    }

    /// Returns this piece crowned. Crowning a king is a no-op.
    #[inline]
    pub const fn promoted(self) -> Self {
        Piece::king(self.side)
    }

    /// Returns the diagram character for this piece.
    pub const fn to_char(self) -> char {
        match (self.side, self.kind) {
            (Side::Red, PieceKind::Man) => 'r',
            (Side::Red, PieceKind::King) => 'R',
            (Side::Black, PieceKind::Man) => 'b',
            (Side::Black, PieceKind::King) => 'B',
        }
    }

    /// Parses a diagram character into a piece.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'r' => Some(Piece::man(Side::Red)),
            'R' => Some(Piece::king(Side::Red)),
            'b' => Some(Piece::man(Side::Black)),
            'B' => Some(Piece::king(Side::Black)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.kind {
            PieceKind::Man => "man",
            PieceKind::King => "king",
        };
        write!(f, "{} {}", self.side, kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_to_char() {
        assert_eq!(Piece::man(Side::Red).to_char(), 'r');
        assert_eq!(Piece::king(Side::Red).to_char(), 'R');
        assert_eq!(Piece::man(Side::Black).to_char(), 'b');
        assert_eq!(Piece::king(Side::Black).to_char(), 'B');
    }

    #[test]
    fn piece_from_char() {
        assert_eq!(Piece::from_char('r'), Some(Piece::man(Side::Red)));
        assert_eq!(Piece::from_char('B'), Some(Piece::king(Side::Black)));
        assert_eq!(Piece::from_char('x'), None);
        assert_eq!(Piece::from_char('.'), None);
    }

    #[test]
    fn promotion_is_one_way() {
        let man = Piece::man(Side::Black);
        assert!(!man.is_king());
        assert!(man.promoted().is_king());
        assert_eq!(man.promoted().side, Side::Black);
        assert_eq!(Piece::king(Side::Red).promoted(), Piece::king(Side::Red));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Piece::man(Side::Red)), "Red man");
        assert_eq!(format!("{}", Piece::king(Side::Black)), "Black king");
    }
}
