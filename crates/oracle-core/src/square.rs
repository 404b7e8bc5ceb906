//! Board square representation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A square on the chess board, addressed by row and column.
///
/// Row 0 is White's home rank (rank 1) and column 0 is the a-file, so
/// `Square::new(3, 4)` is e4. Coordinates outside `0..8` are representable:
/// stepping off the edge of the board yields an off-board square rather than
/// an error, and [`Square::is_valid`] tells the two apart. Off-board squares
/// never appear in any set derived from a board.
///
/// Ordering is row-major, which for valid squares matches [`Square::index`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: i8,
    pub column: i8,
}

impl Square {
    /// Number of squares on the board.
    pub const COUNT: usize = 64;

    /// Creates a square from row and column.
    #[inline]
    pub const fn new(row: i8, column: i8) -> Self {
        Square { row, column }
    }

    /// Returns true if both coordinates lie on the board.
    #[inline]
    pub const fn is_valid(self) -> bool {
        0 <= self.row && self.row < 8 && 0 <= self.column && self.column < 8
    }

    /// Creates a square from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square::new((index / 8) as i8, (index % 8) as i8))
        } else {
            None
        }
    }

    /// Returns the index (0-63), or `None` for an off-board square.
    ///
    /// a1 = 0, b1 = 1, ..., h1 = 7, a2 = 8, ..., h8 = 63.
    #[inline]
    pub const fn index(self) -> Option<u8> {
        if self.is_valid() {
            Some((self.row * 8 + self.column) as u8)
        } else {
            None
        }
    }

    /// Returns the square shifted by the given row and column deltas.
    ///
    /// The result may be off the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_column: i8) -> Self {
        Square::new(
            self.row.saturating_add(d_row),
            self.column.saturating_add(d_column),
        )
    }

    /// Parses a square from algebraic notation (e.g., "e4").
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
        Some(Square::new((rank - b'1') as i8, (file - b'a') as i8))
    }

    /// Returns the algebraic notation for this square, or `None` if off-board.
    pub fn to_algebraic(self) -> Option<String> {
        if !self.is_valid() {
            return None;
        }
        let file = (b'a' + self.column as u8) as char;
        let rank = (b'1' + self.row as u8) as char;
        Some(format!("{}{}", file, rank))
    }

    // Back-rank squares used by castling.
    pub const A1: Square = Square::new(0, 0);
    pub const B1: Square = Square::new(0, 1);
    pub const C1: Square = Square::new(0, 2);
    pub const D1: Square = Square::new(0, 3);
    pub const E1: Square = Square::new(0, 4);
    pub const F1: Square = Square::new(0, 5);
    pub const G1: Square = Square::new(0, 6);
    pub const H1: Square = Square::new(0, 7);
    pub const A8: Square = Square::new(7, 0);
    pub const B8: Square = Square::new(7, 1);
    pub const C8: Square = Square::new(7, 2);
    pub const D8: Square = Square::new(7, 3);
    pub const E8: Square = Square::new(7, 4);
    pub const F8: Square = Square::new(7, 5);
    pub const G8: Square = Square::new(7, 6);
    pub const H8: Square = Square::new(7, 7);
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_algebraic() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "({},{})", self.row, self.column),
        }
    }
}
