//! Move representation.

use crate::Square;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a move.
///
/// Promotion piece choice is not part of a move; a [`MoveType::PawnPromotion`]
/// move only records that the pawn reaches its last rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveType {
    /// Normal move or capture.
    #[default]
    Ordinary,
    /// Pawn push or capture onto the last rank.
    PawnPromotion,
    /// Pawn advance of two squares from its starting row.
    DoublePawnPush,
    /// Kingside castling (O-O).
    ShortCastle,
    /// Queenside castling (O-O-O).
    LongCastle,
}

impl MoveType {
    /// Returns true if this is a castling move.
    #[inline]
    pub const fn is_castling(self) -> bool {
        matches!(self, MoveType::ShortCastle | MoveType::LongCastle)
    }

    /// Returns true if this is a promotion move.
    #[inline]
    pub const fn is_promotion(self) -> bool {
        matches!(self, MoveType::PawnPromotion)
    }
}

/// A chess move: start square, end square and move kind.
///
/// Two moves are equal only if all three fields match, so a promotion and an
/// ordinary move between the same squares are distinct.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub start: Square,
    pub end: Square,
    pub kind: MoveType,
}

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(start: Square, end: Square, kind: MoveType) -> Self {
        Move { start, end, kind }
    }

    /// Creates an ordinary move.
    #[inline]
    pub const fn ordinary(start: Square, end: Square) -> Self {
        Self::new(start, end, MoveType::Ordinary)
    }

    /// Returns coordinate notation for this move (e.g., "e2e4").
    pub fn to_uci(self) -> String {
        format!("{}{}", self.start, self.end)
    }

    /// Parses the start and end squares of coordinate notation.
    ///
    /// The move kind depends on the position, so callers match the squares
    /// against generated moves rather than constructing a move directly.
    pub fn parse_squares(s: &str) -> Option<(Square, Square)> {
        if s.len() != 4 || !s.is_ascii() {
            return None;
        }
        let start = Square::from_algebraic(&s[0..2])?;
        let end = Square::from_algebraic(&s[2..4])?;
        Some((start, end))
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}, {:?})", self.to_uci(), self.kind)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}
