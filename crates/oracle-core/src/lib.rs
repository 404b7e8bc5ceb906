//! Core value types for the chess rules oracle.
//!
//! This crate provides the immutable values shared by the rules crate and its
//! callers:
//! - [`Square`] for board coordinates (off-board squares are representable)
//! - [`Color`], [`PieceType`] and [`Piece`] for piece identity
//! - [`Move`] and [`MoveType`] for move instructions
//! - [`CastlingRights`]
//! - FEN parsing and serialization

mod castling;
mod color;
mod fen;
mod mov;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use color::Color;
pub use fen::{Fen, FenError};
pub use mov::{Move, MoveType};
pub use piece::{Piece, PieceType};
pub use square::Square;
