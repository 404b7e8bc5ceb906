//! Game state: a board plus turn, castling rights and en passant target.
//!
//! [`Game`] is the snapshot the rules operate on. It never records history;
//! [`Game::simulate_move`] and [`Game::play`] return new values and leave the
//! receiver as it was.

use crate::Board;
use oracle_core::{CastlingRights, Color, Fen, FenError, Move, MoveType, Piece, PieceType, Square};

/// Column of both kings at the start of the game.
pub(crate) const KING_COLUMN: i8 = 4;

/// A position together with the state needed to generate moves from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    /// Piece placement.
    pub board: Board,

    /// The side to move.
    pub turn: Color,

    /// The square a pawn may capture onto this move, if the previous move was
    /// a double pawn push.
    pub en_passant: Option<Square>,

    /// Castling rights for both colors.
    pub castling: CastlingRights,

    /// Halfmove clock, carried for FEN round-trips only.
    pub halfmove_clock: u32,

    /// Fullmove number (starts at 1, increments after Black's move).
    pub fullmove_number: u32,
}

impl Game {
    /// Creates a game from a board with White to move and no castling rights.
    pub fn new(board: Board) -> Self {
        Game {
            board,
            turn: Color::White,
            en_passant: None,
            castling: CastlingRights::NONE,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Creates the standard starting position.
    pub fn startpos() -> Self {
        Game {
            castling: CastlingRights::ALL,
            ..Game::new(Board::startpos())
        }
    }

    /// Creates a game from a FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parsed = Fen::parse(fen)?;
        Ok(Game {
            board: Board::from_pieces(parsed.pieces),
            turn: parsed.turn,
            en_passant: parsed.en_passant,
            castling: parsed.castling,
            halfmove_clock: parsed.halfmove_clock,
            fullmove_number: parsed.fullmove_number,
        })
    }

    /// Converts the game to a FEN string.
    pub fn to_fen(&self) -> String {
        let fen = Fen {
            pieces: Color::ALL
                .into_iter()
                .flat_map(|color| self.board.pieces(color))
                .collect(),
            turn: self.turn,
            castling: self.castling,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        };
        fen.to_string()
    }

    /// Returns a copy with a different side to move.
    pub fn with_turn(&self, turn: Color) -> Self {
        Game {
            turn,
            ..self.clone()
        }
    }

    /// Returns true if `color` may still castle queenside.
    #[inline]
    pub fn long_castling_rights(&self, color: Color) -> bool {
        self.castling.long(color)
    }

    /// Returns true if `color` may still castle kingside.
    #[inline]
    pub fn short_castling_rights(&self, color: Color) -> bool {
        self.castling.short(color)
    }

    /// Returns the board that results from making `m`, without touching
    /// `self`.
    ///
    /// The move is not checked for legality. A move from an empty square
    /// yields an unchanged copy of the board. Promotions place a queen.
    /// Castling moves always put the king on the c- or g-file with the rook
    /// beside it, whatever end square the move names.
    pub fn simulate_move(&self, m: Move) -> Board {
        let Some(piece) = self.board[m.start] else {
            return self.board.clone();
        };

        let mut board = self.board.clone();
        match m.kind {
            MoveType::ShortCastle | MoveType::LongCastle => {
                let row = m.start.row;
                let (king_to, rook_from, rook_to) = castling_columns(m.kind);
                board.put(m.start, None);
                board.put(Square::new(row, rook_from), None);
                board.put(Square::new(row, king_to), Some(piece));
                board.put(
                    Square::new(row, rook_to),
                    Some(Piece::new(piece.color, PieceType::Rook)),
                );
            }
            MoveType::Ordinary | MoveType::PawnPromotion | MoveType::DoublePawnPush => {
                if self.is_en_passant_capture(piece, m) {
                    board.put(Square::new(m.start.row, m.end.column), None);
                }
                let placed = if m.kind == MoveType::PawnPromotion {
                    Piece::new(piece.color, PieceType::Queen)
                } else {
                    piece
                };
                board.put(m.start, None);
                board.put(m.end, Some(placed));
            }
        }
        board
    }

    /// Returns the game after making `m`: the simulated board plus the
    /// updated turn, en passant target, castling rights and move counters.
    ///
    /// Like [`Game::simulate_move`], this does not check legality.
    pub fn play(&self, m: Move) -> Game {
        let board = self.simulate_move(m);
        let mover = self.board[m.start];
        let us = self.turn;

        let en_passant = match m.kind {
            MoveType::DoublePawnPush => Some(Square::new(
                (m.start.row + m.end.row) / 2,
                m.start.column,
            )),
            _ => None,
        };

        let mut castling = self.castling;
        if mover.map(|p| p.kind) == Some(PieceType::King) {
            castling = castling.without_color(us);
        }
        // A rook leaving or being captured on its corner ends that right.
        for sq in [m.start, m.end] {
            for color in Color::ALL {
                let home = Board::pawn_end_row(color.opposite());
                if sq == Square::new(home, 0) {
                    castling = castling.with_long(color, false);
                } else if sq == Square::new(home, 7) {
                    castling = castling.with_short(color, false);
                }
            }
        }

        let is_capture = self.board[m.end].is_some()
            || mover.is_some_and(|piece| self.is_en_passant_capture(piece, m));
        let halfmove_clock = if is_capture || mover.map(|p| p.kind) == Some(PieceType::Pawn) {
            0
        } else {
            self.halfmove_clock.saturating_add(1)
        };
        let fullmove_number = match us {
            Color::Black => self.fullmove_number.saturating_add(1),
            Color::White => self.fullmove_number,
        };

        Game {
            board,
            turn: us.opposite(),
            en_passant,
            castling,
            halfmove_clock,
            fullmove_number,
        }
    }

    fn is_en_passant_capture(&self, piece: Piece, m: Move) -> bool {
        piece.kind == PieceType::Pawn
            && Some(m.end) == self.en_passant
            && m.start.column != m.end.column
            && self.board[m.end].is_none()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::startpos()
    }
}

/// Returns (king destination, rook origin, rook destination) columns.
pub(crate) const fn castling_columns(kind: MoveType) -> (i8, i8, i8) {
    match kind {
        MoveType::LongCastle => (2, 0, 3),
        _ => (6, 7, 5),
    }
}
