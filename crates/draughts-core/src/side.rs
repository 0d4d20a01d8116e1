//! Player side representation.

/// The two players. Red sets up on rows 5-7 and moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Side {
    Red = 0,
    Black = 1,
}

impl Side {
    /// Both sides in turn order.
    pub const ALL: [Side; 2] = [Side::Red, Side::Black];

    /// Returns the opposite side.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Red => Side::Black,
            Side::Black => Side::Red,
        }
    }

    /// Returns the index (0 for Red, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the row delta of a forward step (-1 for Red, +1 for Black).
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Side::Red => -1,
            Side::Black => 1,
        }
    }

    /// Returns the row on which men of this side are crowned.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Side::Red => 0,
            Side::Black => 7,
        }
    }

    /// Returns the row closest to this side's own edge of the board.
    #[inline]
    pub const fn home_row(self) -> u8 {
        match self {
            Side::Red => 7,
            Side::Black => 0,
        }
    }

    /// Number of rows between `row` and this side's home row.
    #[inline]
    pub const fn rows_advanced(self, row: u8) -> u8 {
        self.home_row().abs_diff(row)
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Red => write!(f, "Red"),
            Side::Black => write!(f, "Black"),
        }
    }
}
