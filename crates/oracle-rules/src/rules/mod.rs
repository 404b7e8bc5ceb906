//! Rule set abstraction.
//!
//! This module provides the [`RuleSet`] trait, the interface callers such as
//! a game loop or UI use to query a position. [`GameRules`] implements it for
//! standard chess.

mod standard;

pub use standard::GameRules;

use crate::{Board, Game, RulesError};
use oracle_core::{Color, Move};
use serde::Serialize;
use std::fmt;

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameResult {
    /// White wins by checkmate.
    WhiteWins,
    /// Black wins by checkmate.
    BlackWins,
    /// The side to move has no legal moves but is not in check.
    Stalemate,
    /// Neither side has enough material to deliver checkmate.
    InsufficientMaterial,
}

impl GameResult {
    /// Returns the result in which `color` has won.
    pub const fn win_for(color: Color) -> Self {
        match color {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }

    /// Returns the winning color, or `None` for a draw.
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameResult::WhiteWins => Some(Color::White),
            GameResult::BlackWins => Some(Color::Black),
            GameResult::Stalemate | GameResult::InsufficientMaterial => None,
        }
    }

    /// Returns true if the game ended in a draw.
    pub const fn is_draw(self) -> bool {
        self.winner().is_none()
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::WhiteWins => write!(f, "1-0"),
            GameResult::BlackWins => write!(f, "0-1"),
            GameResult::Stalemate => write!(f, "1/2-1/2 (stalemate)"),
            GameResult::InsufficientMaterial => write!(f, "1/2-1/2 (insufficient material)"),
        }
    }
}

/// Rules queries over a position snapshot.
///
/// Implementations are pure: they never mutate the game or board they are
/// given, and the same input always yields the same output in the same order.
///
/// # Example
///
/// ```
/// use oracle_rules::{Game, GameRules, RuleSet};
///
/// let game = Game::startpos();
/// let moves = GameRules::default().legal_moves(&game).unwrap();
/// assert_eq!(moves.len(), 20);
/// ```
pub trait RuleSet {
    /// Returns every legal move for the side to move.
    fn legal_moves(&self, game: &Game) -> Result<Vec<Move>, RulesError>;

    /// Returns true if the king of `king_color` is attacked on `board`.
    fn is_check(&self, board: &Board, king_color: Color) -> Result<bool, RulesError>;

    /// Returns the game result if the game is over, otherwise `None`.
    ///
    /// Only conditions visible in a single position are detected
    /// (checkmate, stalemate, insufficient material).
    fn game_result(&self, game: &Game) -> Result<Option<GameResult>, RulesError>;

    /// Returns true if `m` is among the legal moves of `game`.
    fn is_legal(&self, game: &Game, m: Move) -> Result<bool, RulesError> {
        Ok(self.legal_moves(game)?.contains(&m))
    }

    /// Returns true if the game is over.
    fn is_game_over(&self, game: &Game) -> Result<bool, RulesError> {
        Ok(self.game_result(game)?.is_some())
    }
}
