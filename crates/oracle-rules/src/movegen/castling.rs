//! Castling move generation.
//!
//! Castling is not tested by simulating the move. Its preconditions are
//! checked directly: the king is not in check, the right is still held, and
//! every square between king and rook is empty and unattacked.

use super::{attacked_squares, is_king_attacked};
use crate::game::KING_COLUMN;
use crate::{Board, CastlingLanding, Game, RulesError};
use oracle_core::{Move, MoveType, Square};

/// Columns between king and queenside rook.
const LONG_PATH: [i8; 3] = [1, 2, 3];

/// Columns between king and kingside rook.
const SHORT_PATH: [i8; 2] = [5, 6];

/// Returns the landing columns emitted for each castling side.
const fn landing_columns(kind: MoveType, landing: CastlingLanding) -> &'static [i8] {
    match (kind, landing) {
        (MoveType::LongCastle, CastlingLanding::Canonical) => &[2],
        (MoveType::LongCastle, CastlingLanding::Compatible) => &[0, 1, 2],
        (_, CastlingLanding::Canonical) => &[6],
        (_, CastlingLanding::Compatible) => &[6, 7],
    }
}

/// Generates the castling moves available to the side to move, long castling
/// first.
///
/// # Errors
///
/// Returns [`RulesError::BoardMissingKing`] if the side to move has no king.
pub fn castling_moves(game: &Game, landing: CastlingLanding) -> Result<Vec<Move>, RulesError> {
    let us = game.turn;
    if is_king_attacked(&game.board, us)? {
        return Ok(Vec::new());
    }

    let row = Board::pawn_end_row(us.opposite());
    let attacked = attacked_squares(&game.board, us.opposite());
    let path_is_safe = |columns: &[i8]| {
        columns.iter().all(|&column| {
            let sq = Square::new(row, column);
            game.board.is_vacant(sq) && !attacked.contains(sq)
        })
    };

    let king_start = Square::new(row, KING_COLUMN);
    let mut moves = Vec::new();
    for (kind, allowed, path) in [
        (MoveType::LongCastle, game.long_castling_rights(us), &LONG_PATH[..]),
        (MoveType::ShortCastle, game.short_castling_rights(us), &SHORT_PATH[..]),
    ] {
        if allowed && path_is_safe(path) {
            for &column in landing_columns(kind, landing) {
                moves.push(Move::new(king_start, Square::new(row, column), kind));
            }
        }
    }
    Ok(moves)
}
