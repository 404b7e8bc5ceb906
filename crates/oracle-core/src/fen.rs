//! FEN (Forsyth-Edwards Notation) parsing and serialization.

use crate::{CastlingRights, Color, Piece, PieceType, Square};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when parsing FEN strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected 4 or 6 parts, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),

    #[error("invalid castling rights: {0}")]
    InvalidCastlingRights(String),

    #[error("invalid en passant square: {0}")]
    InvalidEnPassantSquare(String),

    #[error("invalid halfmove clock: {0}")]
    InvalidHalfmoveClock(String),

    #[error("invalid fullmove number: {0}")]
    InvalidFullmoveNumber(String),

    #[error("expected exactly one {color} king, found {count}")]
    KingCount { color: Color, count: usize },
}

/// A parsed FEN record.
///
/// Pieces are kept as a list of occupied squares in ascending square order;
/// turning them into a board is left to the caller. A parsed record always
/// has exactly one king per color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fen {
    /// Occupied squares and their pieces.
    pub pieces: Vec<(Square, Piece)>,
    /// Side to move.
    pub turn: Color,
    /// Castling availability.
    pub castling: CastlingRights,
    /// En passant target square.
    pub en_passant: Option<Square>,
    /// Halfmove clock (for 50-move rule).
    pub halfmove_clock: u32,
    /// Fullmove number.
    pub fullmove_number: u32,
}

impl Fen {
    /// The standard starting position FEN.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    /// Parses a FEN string.
    ///
    /// The move counters may be omitted, in which case they default to 0 and 1.
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() != 6 && parts.len() != 4 {
            return Err(FenError::InvalidPartCount(parts.len()));
        }

        let pieces = Self::parse_piece_placement(parts[0])?;

        let turn = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::InvalidActiveColor(other.to_string())),
        };

        let castling = Self::held_castling(Self::parse_castling(parts[2])?, &pieces);
        let en_passant = Self::parse_en_passant(parts[3], turn)?;

        let (halfmove_clock, fullmove_number) = if parts.len() == 6 {
            let halfmove = parts[4]
                .parse::<u32>()
                .map_err(|_| FenError::InvalidHalfmoveClock(parts[4].to_string()))?;
            let fullmove = parts[5]
                .parse::<u32>()
                .map_err(|_| FenError::InvalidFullmoveNumber(parts[5].to_string()))?;
            (halfmove, fullmove)
        } else {
            (0, 1)
        };

        Ok(Fen {
            pieces,
            turn,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        })
    }

    fn parse_piece_placement(placement: &str) -> Result<Vec<(Square, Piece)>, FenError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "expected 8 ranks, got {}",
                ranks.len()
            )));
        }

        let mut pieces = Vec::new();
        for (i, rank) in ranks.iter().enumerate() {
            // FEN lists rank 8 first.
            let row = 7 - i as i8;
            let mut column = 0i8;
            for c in rank.chars() {
                if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    column += skip as i8;
                } else if let Some(piece) = Piece::from_fen_char(c) {
                    if column < 8 {
                        pieces.push((Square::new(row, column), piece));
                    }
                    column += 1;
                } else {
                    return Err(FenError::InvalidPiecePlacement(format!(
                        "invalid character '{}' in rank {}",
                        c,
                        8 - i
                    )));
                }
                if column > 8 {
                    break;
                }
            }
            if column != 8 {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "rank {} does not describe 8 squares",
                    8 - i
                )));
            }
        }

        for color in Color::ALL {
            let count = pieces
                .iter()
                .filter(|(_, p)| *p == Piece::new(color, PieceType::King))
                .count();
            if count != 1 {
                return Err(FenError::KingCount { color, count });
            }
        }

        pieces.sort_by_key(|(sq, _)| *sq);
        Ok(pieces)
    }

    fn parse_castling(castling: &str) -> Result<CastlingRights, FenError> {
        if castling == "-" {
            return Ok(CastlingRights::NONE);
        }

        let mut rights = CastlingRights::NONE;
        for c in castling.chars() {
            rights = match c {
                'K' => rights.with_short(Color::White, true),
                'Q' => rights.with_long(Color::White, true),
                'k' => rights.with_short(Color::Black, true),
                'q' => rights.with_long(Color::Black, true),
                _ => {
                    return Err(FenError::InvalidCastlingRights(format!(
                        "invalid character '{}'",
                        c
                    )))
                }
            };
        }

        Ok(rights)
    }

    /// Clears each right whose king or rook has left its starting square.
    fn held_castling(castling: CastlingRights, pieces: &[(Square, Piece)]) -> CastlingRights {
        let has = |sq: Square, kind: PieceType, color: Color| {
            pieces.contains(&(sq, Piece::new(color, kind)))
        };

        let mut held = castling;
        for (color, king, long_rook, short_rook) in [
            (Color::White, Square::E1, Square::A1, Square::H1),
            (Color::Black, Square::E8, Square::A8, Square::H8),
        ] {
            if !has(king, PieceType::King, color) {
                held = held.without_color(color);
                continue;
            }
            if !has(long_rook, PieceType::Rook, color) {
                held = held.with_long(color, false);
            }
            if !has(short_rook, PieceType::Rook, color) {
                held = held.with_short(color, false);
            }
        }
        held
    }

    fn parse_en_passant(ep: &str, turn: Color) -> Result<Option<Square>, FenError> {
        if ep == "-" {
            return Ok(None);
        }

        // The target lies behind a pawn the opponent just pushed two squares.
        let row = match turn {
            Color::White => 5,
            Color::Black => 2,
        };
        match Square::from_algebraic(ep) {
            Some(sq) if sq.row == row => Ok(Some(sq)),
            _ => Err(FenError::InvalidEnPassantSquare(ep.to_string())),
        }
    }

    fn write_piece_placement(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut grid = [[None::<Piece>; 8]; 8];
        for (sq, piece) in &self.pieces {
            if sq.is_valid() {
                grid[sq.row as usize][sq.column as usize] = Some(*piece);
            }
        }

        for row in (0..8).rev() {
            let mut empty = 0;
            for cell in grid[row] {
                match cell {
                    Some(piece) => {
                        if empty > 0 {
                            write!(f, "{}", empty)?;
                            empty = 0;
                        }
                        write!(f, "{}", piece.to_fen_char())?;
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                write!(f, "{}", empty)?;
            }
            if row > 0 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Fen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_piece_placement(f)?;
        write!(f, " {} {} ", self.turn.to_fen_char(), self.castling)?;
        match self.en_passant {
            Some(sq) => write!(f, "{}", sq)?,
            None => write!(f, "-")?,
        }
        write!(f, " {} {}", self.halfmove_clock, self.fullmove_number)
    }
}
