//! Sets of squares packed into a `u64`.
//!
//! Bit `n` stands for the square with index `n`, so bit 0 is the top-left
//! corner (a8) and bit 63 the bottom-right corner (h1). Only the 32 dark
//! squares ever hold pieces.

use draughts_core::Square;
use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

/// A 64-bit set of squares.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard(pub u64);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);

    /// The 32 playable squares, where `row + col` is odd.
    pub const DARK: Bitboard = Bitboard(0x55AA_55AA_55AA_55AA);

    /// Every square of one row (0-7).
    #[inline]
    pub const fn row(row: u8) -> Self {
        Bitboard(0xFFu64 << (8 * (row as u32 & 7)))
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of squares in the set.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        self.0 >> sq.index() & 1 == 1
    }

    #[inline]
    pub fn set(&mut self, sq: Square) {
        self.0 |= 1u64 << sq.index();
    }

    #[inline]
    pub fn clear(&mut self, sq: Square) {
        self.0 &= !(1u64 << sq.index());
    }

    /// Removes the lowest-indexed square and returns it.
    #[inline]
    pub fn pop_lsb(&mut self) -> Option<Square> {
        if self.is_empty() {
            return None;
        }
        let index = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        // SAFETY: a non-zero u64 has at most 63 trailing zeros
        Some(unsafe { Square::from_index_unchecked(index) })
    }

    /// Maps every square to [`Square::rotated`].
    #[inline]
    pub const fn rotated(self) -> Bitboard {
        Bitboard(self.0.reverse_bits())
    }
}

impl BitAnd for Bitboard {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitOr for Bitboard {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Bitboard(self.0 | rhs.0)
    }
}

impl Not for Bitboard {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Bitboard(!self.0)
    }
}

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Bitboard({:#018x})", self.0)?;
        for row in 0..8u8 {
            let line: String = (0..8u8)
                .map(|col| match Square::new(row, col) {
                    Some(sq) if self.contains(sq) => 'x',
                    Some(sq) if sq.is_dark() => '.',
                    _ => ' ',
                })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Squares of a bitboard in ascending index order.
pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        self.0.pop_lsb()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count() as usize;
        (len, Some(len))
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIter;

    #[inline]
    fn into_iter(self) -> BitboardIter {
        BitboardIter(self)
    }
}
