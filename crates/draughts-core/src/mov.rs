//! Move representation.

use crate::Square;
use std::fmt;

/// A single step or a single jump.
///
/// A chain capture is played as a sequence of jumps by the same piece, each
/// one a separate `Move`, so a generated move captures at most one piece.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    captured: Option<Square>,
}

impl Move {
    /// Creates a non-capturing diagonal step.
    #[inline]
    pub const fn step(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            captured: None,
        }
    }

    /// Creates a jump from `from` over `over` to `to`.
    #[inline]
    pub const fn jump(from: Square, over: Square, to: Square) -> Self {
        Move {
            from,
            to,
            captured: Some(over),
        }
    }

    /// Returns the source square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Returns the squares whose pieces this move removes, in capture order.
    #[inline]
    pub fn captured(&self) -> &[Square] {
        self.captured.as_slice()
    }

    /// Returns true if this move removes an opposing piece.
    #[inline]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    /// Returns true if this move goes from `from` to `to`.
    #[inline]
    pub fn matches(self, request: MoveRequest) -> bool {
        self.from == request.from && self.to == request.to
    }

    /// Returns the notation for this move (e.g., "c3-d4", "c3xe5").
    pub fn to_notation(self) -> String {
        let sep = if self.is_capture() { 'x' } else { '-' };
        format!("{}{}{}", self.from, sep, self.to)
    }

    /// A null move (used as placeholder, not a legal move).
    pub const NULL: Move = Move::step(Square::A8, Square::A8);
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_notation())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}

/// A requested move given only by its endpoints.
///
/// Whether it captures is decided by matching it against the legal moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveRequest {
    pub from: Square,
    pub to: Square,
}

impl MoveRequest {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        MoveRequest { from, to }
    }

    /// Parses a request from notation.
    ///
    /// Accepts `-` or `x` between the squares, or no separator at all
    /// ("c3d4").
    pub fn from_notation(s: &str) -> Option<Self> {
        let s = s.trim();
        let (from, to) = match s.len() {
            4 => (s.get(0..2)?, s.get(2..4)?),
            5 => {
                let sep = s.get(2..3)?;
                if sep != "-" && !sep.eq_ignore_ascii_case("x") {
                    return None;
                }
                (s.get(0..2)?, s.get(3..5)?)
            }
            _ => return None,
        };
        Some(MoveRequest {
            from: Square::from_algebraic(from)?,
            to: Square::from_algebraic(to)?,
        })
    }
}

impl From<Move> for MoveRequest {
    fn from(m: Move) -> Self {
        MoveRequest::new(m.from(), m.to())
    }
}
