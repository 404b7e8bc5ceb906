//! Chess rules oracle.
//!
//! Given a position snapshot, this crate answers three questions: which
//! moves are legal, whether a king is in check, and whether the game is over.
//!
//! - [`Board`] - piece placement on the 8x8 grid
//! - [`Game`] - board plus side to move, castling rights and en passant target
//! - [`RuleSet`] - the query interface, implemented by [`GameRules`]
//! - [`movegen`] - per-piece move patterns and attacked squares
//! - [`RulesConfig`] - optional TOML configuration
//!
//! Queries are pure. They never modify the game they are given and return
//! moves in a deterministic order.
//!
//! # Example
//!
//! ```
//! use oracle_rules::{Game, GameRules, RuleSet};
//!
//! let game = Game::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
//! let rules = GameRules::default();
//!
//! assert_eq!(rules.legal_moves(&game).unwrap().len(), 5);
//! assert!(!rules.is_check(&game.board, game.turn).unwrap());
//! assert!(rules.game_result(&game).unwrap().is_some());
//! ```

mod board;
mod config;
mod error;
mod game;
pub mod movegen;
pub mod rules;
mod square_set;

pub use board::Board;
pub use config::{CastlingLanding, ConfigError, RulesConfig};
pub use error::RulesError;
pub use game::Game;
pub use movegen::perft::{perft, perft_divide};
pub use movegen::{attacked_squares, castling_moves, is_king_attacked, pseudo_legal_moves, Pattern};
pub use rules::{GameResult, GameRules, RuleSet};
pub use square_set::SquareSet;

pub use oracle_core::{CastlingRights, Color, Fen, FenError, Move, MoveType, Piece, PieceType, Square};
