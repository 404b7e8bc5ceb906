//! Board snapshot: which piece, if any, stands on each square.

use crate::SquareSet;
use oracle_core::{Color, Piece, PieceType, Square};
use std::fmt;
use std::ops::Index;

/// An immutable snapshot mapping each square to an optional piece.
///
/// Boards are values: the editing methods return a new board and leave the
/// receiver untouched. Looking up an off-board square yields `None`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            squares: [None; Square::COUNT],
        }
    }

    /// Creates the standard starting arrangement.
    pub fn startpos() -> Self {
        let back_rank = [
            PieceType::Rook,
            PieceType::Knight,
            PieceType::Bishop,
            PieceType::Queen,
            PieceType::King,
            PieceType::Bishop,
            PieceType::Knight,
            PieceType::Rook,
        ];
        let mut board = Board::empty();
        for color in Color::ALL {
            let home = Self::pawn_end_row(color.opposite());
            let pawns = Self::pawn_starting_row(color);
            for (column, kind) in (0i8..).zip(back_rank) {
                board.put(Square::new(home, column), Some(Piece::new(color, kind)));
                board.put(
                    Square::new(pawns, column),
                    Some(Piece::new(color, PieceType::Pawn)),
                );
            }
        }
        board
    }

    /// Creates a board from a list of placed pieces. Off-board squares are
    /// ignored; later entries overwrite earlier ones.
    pub fn from_pieces<I>(pieces: I) -> Self
    where
        I: IntoIterator<Item = (Square, Piece)>,
    {
        let mut board = Board::empty();
        for (sq, piece) in pieces {
            board.put(sq, Some(piece));
        }
        board
    }

    /// Returns a copy of this board with `piece` placed on `sq`.
    pub fn with_piece(&self, sq: Square, piece: Piece) -> Self {
        let mut board = self.clone();
        board.put(sq, Some(piece));
        board
    }

    /// Returns a copy of this board with `sq` emptied.
    pub fn without_piece(&self, sq: Square) -> Self {
        let mut board = self.clone();
        board.put(sq, None);
        board
    }

    /// Writes a square in place. Only used while building a new snapshot.
    #[inline]
    pub(crate) fn put(&mut self, sq: Square, piece: Option<Piece>) {
        if let Some(index) = sq.index() {
            self.squares[index as usize] = piece;
        }
    }

    /// Returns the piece on the given square, if any.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        sq.index().and_then(|index| self.squares[index as usize])
    }

    /// Returns true if `sq` is on the board and holds no piece.
    #[inline]
    pub fn is_vacant(&self, sq: Square) -> bool {
        sq.is_valid() && self.get(sq).is_none()
    }

    /// Returns the squares holding pieces of the given color.
    pub fn squares_with_pieces(&self, color: Color) -> SquareSet {
        self.pieces(color).map(|(sq, _)| sq).collect()
    }

    /// Returns all squares holding no piece.
    pub fn empty_squares(&self) -> SquareSet {
        !self.occupied()
    }

    /// Returns all squares holding a piece of either color.
    pub fn occupied(&self) -> SquareSet {
        self.squares_with_pieces(Color::White) | self.squares_with_pieces(Color::Black)
    }

    /// Iterates over the pieces of `color` in ascending square order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (0u8..)
            .zip(self.squares.iter())
            .filter_map(move |(index, cell)| match cell {
                Some(piece) if piece.color == color => {
                    Square::from_index(index).map(|sq| (sq, *piece))
                }
                _ => None,
            })
    }

    /// Returns the square of the king of `color`, if there is one.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|(_, piece)| piece.kind == PieceType::King)
            .map(|(sq, _)| sq)
    }

    /// Row delta of a single pawn step (+1 for White, -1 for Black).
    #[inline]
    pub const fn pawn_direction(color: Color) -> i8 {
        match color {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Row on which pawns of `color` start (and may double-push from).
    #[inline]
    pub const fn pawn_starting_row(color: Color) -> i8 {
        match color {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Row on which pawns of `color` promote: the opponent's home row.
    #[inline]
    pub const fn pawn_end_row(color: Color) -> i8 {
        match color {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;

    #[inline]
    fn index(&self, sq: Square) -> &Self::Output {
        match sq.index() {
            Some(index) => &self.squares[index as usize],
            None => &None,
        }
    }
}

/// Renders the board as an 8x8 diagram with rank 8 at the top.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..8).rev() {
            write!(f, "{} ", row + 1)?;
            for column in 0..8 {
                match self.get(Square::new(row, column)) {
                    Some(piece) => write!(f, "{} ", piece.to_fen_char())?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board")?;
        write!(f, "{}", self)
    }
}
