//! Move generation.
//!
//! Every piece type maps to one candidate-destination routine, used both for
//! pseudo-legal move generation and for attacked-square computation. The two
//! uses differ only for pawns, selected by [`Pattern`].

mod castling;
pub mod perft;

pub use castling::castling_moves;

use crate::{Board, Game, RulesError, SquareSet};
use oracle_core::{Color, Move, MoveType, Piece, PieceType, Square};

/// Knight jumps as (row, column) deltas.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
];

/// King steps as (row, column) deltas.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// Diagonal ray directions.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Orthogonal ray directions.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Which pawn rules apply when generating candidate destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Pawn movement rules: captures need a target, pushes need empty
    /// squares. `en_passant` is the square a pawn may capture onto this move.
    Moves { en_passant: Option<Square> },
    /// Pawn attack geometry: both forward diagonals, occupied or not.
    Attacks,
}

/// Returns the pseudo-legal moves of `piece` standing on `from`.
///
/// Pseudo-legal moves follow the piece's movement pattern and board
/// occupancy but ignore whether the mover's king is left in check. Castling
/// is never produced here; see [`castling_moves`].
pub fn pseudo_legal_moves(piece: Piece, from: Square, board: &Board, pattern: Pattern) -> Vec<Move> {
    let mut moves = Vec::new();
    generate_piece_moves(piece, from, board, pattern, &mut moves);
    moves
}

fn generate_piece_moves(
    piece: Piece,
    from: Square,
    board: &Board,
    pattern: Pattern,
    moves: &mut Vec<Move>,
) {
    match piece.kind {
        PieceType::Pawn => generate_pawn_moves(piece.color, from, board, pattern, moves),
        PieceType::Knight => generate_step_moves(piece.color, from, board, &KNIGHT_OFFSETS, moves),
        PieceType::Bishop => {
            generate_ray_moves(piece.color, from, board, &BISHOP_DIRECTIONS, moves)
        }
        PieceType::Rook => generate_ray_moves(piece.color, from, board, &ROOK_DIRECTIONS, moves),
        PieceType::Queen => {
            generate_ray_moves(piece.color, from, board, &BISHOP_DIRECTIONS, moves);
            generate_ray_moves(piece.color, from, board, &ROOK_DIRECTIONS, moves);
        }
        PieceType::King => generate_step_moves(piece.color, from, board, &KING_OFFSETS, moves),
    }
}

/// Generates pawn captures first, then pushes.
fn generate_pawn_moves(
    color: Color,
    from: Square,
    board: &Board,
    pattern: Pattern,
    moves: &mut Vec<Move>,
) {
    let direction = Board::pawn_direction(color);
    let ahead = from.offset(direction, 0);
    let kind = if ahead.row == Board::pawn_end_row(color) {
        MoveType::PawnPromotion
    } else {
        MoveType::Ordinary
    };

    let en_passant = match pattern {
        Pattern::Attacks => {
            for side in [-1, 1] {
                let target = from.offset(direction, side);
                if target.is_valid() {
                    moves.push(Move::ordinary(from, target));
                }
            }
            return;
        }
        Pattern::Moves { en_passant } => en_passant,
    };

    for side in [-1, 1] {
        let target = from.offset(direction, side);
        let holds_opponent = board[target].is_some_and(|p| p.color != color);
        let is_en_passant = target.is_valid() && Some(target) == en_passant;
        if holds_opponent || is_en_passant {
            moves.push(Move::new(from, target, kind));
        }
    }

    if board.is_vacant(ahead) {
        moves.push(Move::new(from, ahead, kind));

        let two_ahead = ahead.offset(direction, 0);
        if from.row == Board::pawn_starting_row(color) && board.is_vacant(two_ahead) {
            moves.push(Move::new(from, two_ahead, MoveType::DoublePawnPush));
        }
    }
}

/// Generates single-step moves from a fixed offset table (knight, king).
fn generate_step_moves(
    color: Color,
    from: Square,
    board: &Board,
    offsets: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(d_row, d_column) in offsets {
        let to = from.offset(d_row, d_column);
        if !to.is_valid() {
            continue;
        }
        match board[to] {
            Some(p) if p.color == color => {}
            _ => moves.push(Move::ordinary(from, to)),
        }
    }
}

/// Ray-casts along each direction until the edge or a piece blocks the ray.
/// An opponent piece ends the ray but is itself a destination.
fn generate_ray_moves(
    color: Color,
    from: Square,
    board: &Board,
    directions: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(d_row, d_column) in directions {
        let mut to = from.offset(d_row, d_column);
        while to.is_valid() {
            match board[to] {
                None => moves.push(Move::ordinary(from, to)),
                Some(p) => {
                    if p.color != color {
                        moves.push(Move::ordinary(from, to));
                    }
                    break;
                }
            }
            to = to.offset(d_row, d_column);
        }
    }
}

/// Returns every square attacked by the pieces of `color`.
///
/// Pawns attack both forward diagonals regardless of occupancy; every other
/// piece attacks the end squares of its pseudo-legal moves.
pub fn attacked_squares(board: &Board, color: Color) -> SquareSet {
    let mut targets = Vec::new();
    for (sq, piece) in board.pieces(color) {
        generate_piece_moves(piece, sq, board, Pattern::Attacks, &mut targets);
    }
    targets.into_iter().map(|m| m.end).collect()
}

/// Returns true if the king of `king_color` stands on a square attacked by
/// the other side.
///
/// # Errors
///
/// Returns [`RulesError::BoardMissingKing`] if `board` holds no king of
/// `king_color`.
pub fn is_king_attacked(board: &Board, king_color: Color) -> Result<bool, RulesError> {
    let king = board
        .king_square(king_color)
        .ok_or(RulesError::BoardMissingKing { color: king_color })?;
    Ok(attacked_squares(board, king_color.opposite()).contains(king))
}

/// Generates the pseudo-legal moves of the side to move, in ascending order
/// of their start square.
pub fn generate_pseudo_legal_moves(game: &Game) -> Vec<Move> {
    let pattern = Pattern::Moves {
        en_passant: game.en_passant,
    };
    let mut moves = Vec::new();
    for (sq, piece) in game.board.pieces(game.turn) {
        generate_piece_moves(piece, sq, &game.board, pattern, &mut moves);
    }
    moves
}

/// Generates all legal moves except castling for the side to move.
///
/// A pseudo-legal move is kept only if the board after simulating it leaves
/// the mover's king unattacked.
pub fn generate_moves(game: &Game) -> Result<Vec<Move>, RulesError> {
    let mut legal = Vec::new();
    for m in generate_pseudo_legal_moves(game) {
        if !is_king_attacked(&game.simulate_move(m), game.turn)? {
            legal.push(m);
        }
    }
    Ok(legal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn destinations(fen: &str, from: &str) -> Vec<Square> {
        let game = Game::from_fen(fen).unwrap();
        let piece = game.board[sq(from)].unwrap();
        let pattern = Pattern::Moves {
            en_passant: game.en_passant,
        };
        let mut ends: Vec<Square> = pseudo_legal_moves(piece, sq(from), &game.board, pattern)
            .into_iter()
            .map(|m| m.end)
            .collect();
        ends.sort();
        ends
    }

    fn squares(names: &[&str]) -> Vec<Square> {
        let mut v: Vec<Square> = names.iter().map(|n| sq(n)).collect();
        v.sort();
        v
    }

    #[test]
    fn generate_moves_startpos() {
        let moves = generate_moves(&Game::startpos()).unwrap();
        assert_eq!(moves.len(), 20); // 16 pawn moves + 4 knight moves
    }

    #[test]
    fn pawn_single_and_double_push() {
        let game = Game::startpos();
        let pawn = game.board[sq("e2")].unwrap();
        let moves = pseudo_legal_moves(pawn, sq("e2"), &game.board, Pattern::Moves { en_passant: None });
        assert_eq!(
            moves,
            vec![
                Move::ordinary(sq("e2"), sq("e3")),
                Move::new(sq("e2"), sq("e4"), MoveType::DoublePawnPush),
            ]
        );
    }

    #[test]
    fn blocked_pawn_has_no_push() {
        assert!(destinations("4k3/8/8/8/8/4p3/4P3/4K3 w - - 0 1", "e2").is_empty());
        // Double push needs the far square empty too.
        assert_eq!(
            destinations("4k3/8/8/8/4p3/8/4P3/4K3 w - - 0 1", "e2"),
            squares(&["e3"])
        );
    }

    #[test]
    fn pawn_captures_need_a_target() {
        assert_eq!(
            destinations("4k3/8/8/3p1P2/4P3/8/8/4K3 w - - 0 1", "e4"),
            squares(&["d5", "e5"])
        );
    }

    #[test]
    fn pawn_captures_en_passant_target() {
        let ends = destinations("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1", "e5");
        assert_eq!(ends, squares(&["d6", "e6"]));
    }

    #[test]
    fn black_pawn_moves_down() {
        assert_eq!(
            destinations("4k3/3p4/8/8/8/8/8/4K3 b - - 0 1", "d7"),
            squares(&["d5", "d6"])
        );
    }

    #[test]
    fn promotion_tags_push_and_capture() {
        let game = Game::from_fen("1n2k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let pawn = game.board[sq("a7")].unwrap();
        let moves = pseudo_legal_moves(pawn, sq("a7"), &game.board, Pattern::Moves { en_passant: None });
        assert_eq!(
            moves,
            vec![
                Move::new(sq("a7"), sq("b8"), MoveType::PawnPromotion),
                Move::new(sq("a7"), sq("a8"), MoveType::PawnPromotion),
            ]
        );
    }

    #[test]
    fn knight_in_corner() {
        assert_eq!(
            destinations("4k3/8/8/8/8/8/2P5/N3K3 w - - 0 1", "a1"),
            squares(&["b3"])
        );
    }

    #[test]
    fn king_steps_avoid_friendly_pieces() {
        assert_eq!(
            destinations("4k3/8/8/8/8/8/3PP3/4K3 w - - 0 1", "e1"),
            squares(&["d1", "f1", "f2"])
        );
    }

    #[test]
    fn rook_rays_stop_at_pieces() {
        assert_eq!(
            destinations("4k3/8/8/8/8/p7/8/R2BK3 w - - 0 1", "a1"),
            squares(&["a2", "a3", "b1", "c1"])
        );
    }

    #[test]
    fn bishop_rays() {
        assert_eq!(
            destinations("4k3/8/8/8/8/8/1P6/2B1K3 w - - 0 1", "c1").len(),
            5 // d2, e3, f4, g5, h6
        );
    }

    #[test]
    fn queen_is_bishop_plus_rook() {
        let fen = "4k3/8/8/8/3Q4/8/8/4K3 w - - 0 1";
        let game = Game::from_fen(fen).unwrap();
        let color = Color::White;
        let d4 = sq("d4");
        let queen = pseudo_legal_moves(Piece::new(color, PieceType::Queen), d4, &game.board, Pattern::Attacks);
        let bishop = pseudo_legal_moves(Piece::new(color, PieceType::Bishop), d4, &game.board, Pattern::Attacks);
        let rook = pseudo_legal_moves(Piece::new(color, PieceType::Rook), d4, &game.board, Pattern::Attacks);
        assert_eq!(queen.len(), bishop.len() + rook.len());
        assert_eq!(queen.len(), 27);
    }

    #[test]
    fn pawn_attacks_ignore_occupancy() {
        let game = Game::from_fen("4k3/8/8/8/8/8/P6P/4K3 w - - 0 1").unwrap();
        let attacked = attacked_squares(&game.board, Color::White);
        assert!(attacked.contains(sq("b3")));
        assert!(attacked.contains(sq("g3")));
        // The a- and h-pawns each have a single on-board diagonal.
        assert!(!attacked.contains(sq("a3")));
        assert!(!attacked.contains(sq("h3")));
    }

    #[test]
    fn attacks_startpos() {
        let board = Board::startpos();
        let attacked = attacked_squares(&board, Color::White);
        assert!(attacked.contains(sq("e3")));
        assert!(!attacked.contains(sq("e4")));
    }

    #[test]
    fn king_attacked() {
        let board = Game::from_fen("4k3/8/8/8/8/8/8/r3K3 w - - 0 1").unwrap().board;
        assert_eq!(is_king_attacked(&board, Color::White), Ok(true));
        assert_eq!(is_king_attacked(&board, Color::Black), Ok(false));
    }

    #[test]
    fn missing_king_is_an_error() {
        let board = Board::startpos().without_piece(Square::E8);
        assert_eq!(
            is_king_attacked(&board, Color::Black),
            Err(RulesError::BoardMissingKing {
                color: Color::Black
            })
        );
    }

    #[test]
    fn pinned_piece_cannot_leave_the_line() {
        let game = Game::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").unwrap();
        let moves = generate_moves(&game).unwrap();
        assert!(moves.iter().all(|m| m.start != sq("e2")));
    }
}
