//! Castling rights.

use crate::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Long and short castling rights for both colors.
///
/// Rights only record that neither the king nor the relevant rook has moved;
/// whether castling is playable right now is decided by move generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights(0);
    pub const ALL: CastlingRights = CastlingRights(0b1111);

    const WHITE_SHORT: u8 = 0b0001;
    const WHITE_LONG: u8 = 0b0010;
    const BLACK_SHORT: u8 = 0b0100;
    const BLACK_LONG: u8 = 0b1000;

    #[inline]
    const fn short_flag(color: Color) -> u8 {
        match color {
            Color::White => Self::WHITE_SHORT,
            Color::Black => Self::BLACK_SHORT,
        }
    }

    #[inline]
    const fn long_flag(color: Color) -> u8 {
        match color {
            Color::White => Self::WHITE_LONG,
            Color::Black => Self::BLACK_LONG,
        }
    }

    /// Returns true if `color` may still castle kingside.
    #[inline]
    pub const fn short(self, color: Color) -> bool {
        self.0 & Self::short_flag(color) != 0
    }

    /// Returns true if `color` may still castle queenside.
    #[inline]
    pub const fn long(self, color: Color) -> bool {
        self.0 & Self::long_flag(color) != 0
    }

    /// Returns a copy with the kingside right of `color` set or cleared.
    #[inline]
    pub const fn with_short(self, color: Color, allowed: bool) -> Self {
        if allowed {
            CastlingRights(self.0 | Self::short_flag(color))
        } else {
            CastlingRights(self.0 & !Self::short_flag(color))
        }
    }

    /// Returns a copy with the queenside right of `color` set or cleared.
    #[inline]
    pub const fn with_long(self, color: Color, allowed: bool) -> Self {
        if allowed {
            CastlingRights(self.0 | Self::long_flag(color))
        } else {
            CastlingRights(self.0 & !Self::long_flag(color))
        }
    }

    /// Returns a copy with both rights of `color` cleared.
    #[inline]
    pub const fn without_color(self, color: Color) -> Self {
        self.with_short(color, false).with_long(color, false)
    }

    /// Returns true if no color can castle.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Formats the rights the way FEN does ("KQkq", or "-" when empty).
impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        for (present, c) in [
            (self.short(Color::White), 'K'),
            (self.long(Color::White), 'Q'),
            (self.short(Color::Black), 'k'),
            (self.long(Color::Black), 'q'),
        ] {
            if present {
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}
