//! Board square representation.

use std::fmt;

/// A square on the board, indexed 0-63.
///
/// Squares are indexed row-major from the top-left corner as Red sees it:
/// - (row 0, col 0) = 0, (row 0, col 7) = 7
/// - (row 7, col 7) = 63
///
/// Row 0 is Black's home row and Red's crowning row. In algebraic notation
/// the column is a file letter and the row is `8 - row`, so (0, 0) is `a8`
/// and (7, 0) is `a1`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Creates a square from row and column, or `None` when off the board.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square(row * 8 + col))
        } else {
            None
        }
    }

    /// Creates a square from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Creates a square from index without bounds checking.
    ///
    /// # Safety
    /// The index must be in the range 0-63.
    #[inline]
    pub const unsafe fn from_index_unchecked(index: u8) -> Self {
        debug_assert!(index < 64);
        Square(index)
    }

    /// Returns the square `dr` rows and `dc` columns away, if it is on the board.
    #[inline]
    pub const fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row() as i8 + dr;
        let col = self.col() as i8 + dc;
        if row < 0 || col < 0 {
            return None;
        }
        Square::new(row as u8, col as u8)
    }

    /// Parses a square from algebraic notation (e.g., "c3").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if file < b'a' || file > b'h' || rank < b'1' || rank > b'8' {
            return None;
        }
        Square::new(b'8' - rank, file - b'a')
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    /// Returns true for the playable squares, where `row + col` is odd.
    #[inline]
    pub const fn is_dark(self) -> bool {
        (self.row() + self.col()) % 2 == 1
    }

    /// Returns the square reached by rotating the board half a turn.
    #[inline]
    pub const fn rotated(self) -> Self {
        Square(63 - self.0)
    }

    /// The top-left corner, (row 0, col 0).
    pub const A8: Square = Square(0);

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        let file = (b'a' + self.col()) as char;
        let rank = (b'8' - self.row()) as char;
        format!("{}{}", file, rank)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}, {})", self.row(), self.col())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_new() {
        let sq = Square::new(5, 0).unwrap();
        assert_eq!(sq.row(), 5);
        assert_eq!(sq.col(), 0);
        assert_eq!(sq.index(), 40);
        assert_eq!(Square::new(8, 0), None);
        assert_eq!(Square::new(0, 8), None);
    }

    #[test]
    fn square_offset_rejects_off_board() {
        let corner = Square::new(0, 0).unwrap();
        assert_eq!(corner.offset(-1, 1), None);
        assert_eq!(corner.offset(1, -1), None);
        assert_eq!(corner.offset(1, 1), Square::new(1, 1));
        let far = Square::new(7, 7).unwrap();
        assert_eq!(far.offset(1, 1), None);
        assert_eq!(far.offset(-2, -2), Square::new(5, 5));
    }

    #[test]
    fn square_from_algebraic() {
        assert_eq!(Square::from_algebraic("a8"), Square::new(0, 0));
        assert_eq!(Square::from_algebraic("a1"), Square::new(7, 0));
        assert_eq!(Square::from_algebraic("h1"), Square::new(7, 7));
        assert_eq!(Square::from_algebraic("C3"), Square::new(5, 2));
        assert_eq!(Square::from_algebraic("i1"), None);
        assert_eq!(Square::from_algebraic("a9"), None);
        assert_eq!(Square::from_algebraic("a0"), None);
        assert_eq!(Square::from_algebraic(""), None);
    }

    #[test]
    fn square_to_algebraic() {
        assert_eq!(Square::new(0, 0).unwrap().to_algebraic(), "a8");
        assert_eq!(Square::new(5, 0).unwrap().to_algebraic(), "a3");
        assert_eq!(Square::new(4, 1).unwrap().to_algebraic(), "b4");
    }

    #[test]
    fn dark_squares() {
        assert!(Square::new(0, 1).unwrap().is_dark());
        assert!(Square::new(5, 0).unwrap().is_dark());
        assert!(!Square::new(0, 0).unwrap().is_dark());
        assert!(!Square::new(7, 7).unwrap().is_dark());
    }

    #[test]
    fn rotation_keeps_colour() {
        for index in 0..64 {
            let sq = Square::from_index(index).unwrap();
            assert_eq!(sq.rotated().is_dark(), sq.is_dark());
            assert_eq!(sq.rotated().rotated(), sq);
            assert_eq!(sq.rotated().row(), 7 - sq.row());
        }
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn algebraic_roundtrip(row in 0u8..8, col in 0u8..8) {
                let sq = Square::new(row, col).unwrap();
                prop_assert_eq!(Square::from_algebraic(&sq.to_algebraic()), Some(sq));
            }

            #[test]
            fn offset_stays_on_board(index in 0u8..64, dr in -2i8..=2, dc in -2i8..=2) {
                let sq = Square::from_index(index).unwrap();
                if let Some(target) = sq.offset(dr, dc) {
                    prop_assert_eq!(target.row() as i8, sq.row() as i8 + dr);
                    prop_assert_eq!(target.col() as i8, sq.col() as i8 + dc);
                }
            }
        }
    }
}
