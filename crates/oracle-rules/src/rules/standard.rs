//! Standard chess rules implementation.

use super::{GameResult, RuleSet};
use crate::movegen::{attacked_squares, castling_moves, generate_moves, is_king_attacked};
use crate::{Board, CastlingLanding, Game, RulesConfig, RulesError, SquareSet};
use oracle_core::{Color, Move, Piece, PieceType};
use std::collections::BTreeSet;

/// Standard chess rules.
///
/// - Standard piece movement, including en passant and promotion tagging
/// - Castling (kingside and queenside)
/// - Check, checkmate, and stalemate detection
/// - Insufficient material (bare king, king and knight, king and bishop)
///
/// The only field is configuration, so the type is `Copy` and can be shared
/// freely between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameRules {
    landing: CastlingLanding,
}

impl GameRules {
    /// Creates a rule set with the given castling landing mode.
    pub const fn new(landing: CastlingLanding) -> Self {
        GameRules { landing }
    }

    /// Creates a rule set from loaded configuration.
    pub fn from_config(config: &RulesConfig) -> Self {
        Self::new(config.castling_landing)
    }

    /// Returns every square attacked by the pieces of `color`.
    pub fn attacked_squares(&self, board: &Board, color: Color) -> SquareSet {
        attacked_squares(board, color)
    }
}

impl RuleSet for GameRules {
    fn legal_moves(&self, game: &Game) -> Result<Vec<Move>, RulesError> {
        let mut moves = generate_moves(game)?;
        moves.extend(castling_moves(game, self.landing)?);
        tracing::trace!(turn = %game.turn, count = moves.len(), "generated legal moves");
        Ok(moves)
    }

    fn is_check(&self, board: &Board, king_color: Color) -> Result<bool, RulesError> {
        is_king_attacked(board, king_color)
    }

    fn game_result(&self, game: &Game) -> Result<Option<GameResult>, RulesError> {
        let result = if self.legal_moves(game)?.is_empty() {
            if self.is_check(&game.board, game.turn)? {
                Some(GameResult::win_for(game.turn.opposite()))
            } else {
                Some(GameResult::Stalemate)
            }
        } else if Color::ALL
            .into_iter()
            .all(|color| is_insufficient_material(game.board.pieces(color).map(|(_, p)| p)))
        {
            Some(GameResult::InsufficientMaterial)
        } else {
            None
        };

        if let Some(result) = result {
            tracing::debug!(%result, turn = %game.turn, "game over");
        }
        Ok(result)
    }
}

/// Returns true if one side's pieces cannot deliver checkmate on their own:
/// a bare king, or a king with a single knight or bishop.
fn is_insufficient_material(pieces: impl Iterator<Item = Piece>) -> bool {
    let kinds: Vec<PieceType> = pieces.map(|p| p.kind).collect();
    if kinds.len() > 2 {
        return false;
    }

    let kinds: BTreeSet<PieceType> = kinds.into_iter().collect();
    let kinds: Vec<PieceType> = kinds.into_iter().collect();
    matches!(
        kinds.as_slice(),
        [PieceType::King]
            | [PieceType::Knight, PieceType::King]
            | [PieceType::Bishop, PieceType::King]
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use oracle_core::{Fen, MoveType, Square};

    fn game(fen: &str) -> Game {
        Game::from_fen(fen).unwrap()
    }

    fn pieces(kinds: &[PieceType]) -> impl Iterator<Item = Piece> + '_ {
        kinds.iter().map(|&kind| Piece::new(Color::White, kind))
    }

    #[test]
    fn startpos_has_twenty_moves() {
        let rules = GameRules::default();
        let moves = rules.legal_moves(&Game::startpos()).unwrap();
        assert_eq!(moves.len(), 20);
        let doubles = moves
            .iter()
            .filter(|m| m.kind == MoveType::DoublePawnPush)
            .count();
        assert_eq!(doubles, 8);
    }

    #[test]
    fn legal_moves_are_deterministic() {
        let rules = GameRules::default();
        let g = game("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
        assert_eq!(rules.legal_moves(&g).unwrap(), rules.legal_moves(&g).unwrap());
    }

    #[test]
    fn castling_comes_last() {
        let rules = GameRules::default();
        let moves = rules
            .legal_moves(&game("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1"))
            .unwrap();
        let tail: Vec<MoveType> = moves.iter().rev().take(2).map(|m| m.kind).collect();
        assert_eq!(tail, vec![MoveType::ShortCastle, MoveType::LongCastle]);
    }

    #[test]
    fn compatible_rules_offer_legacy_castling_variants() {
        let rules = GameRules::new(CastlingLanding::Compatible);
        let moves = rules
            .legal_moves(&game("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1"))
            .unwrap();
        assert_eq!(moves.iter().filter(|m| m.kind.is_castling()).count(), 5);
    }

    #[test]
    fn is_check_detects_attacks() {
        let rules = GameRules::default();
        let g = game("4k3/8/8/8/8/5n2/8/4K3 w - - 0 1");
        assert_eq!(rules.is_check(&g.board, Color::White), Ok(true));
        assert_eq!(rules.is_check(&g.board, Color::Black), Ok(false));
    }

    #[test]
    fn is_check_without_king_is_an_error() {
        let rules = GameRules::default();
        let board = Board::startpos().without_piece(Square::E1);
        assert_eq!(
            rules.is_check(&board, Color::White),
            Err(RulesError::BoardMissingKing {
                color: Color::White
            })
        );
    }

    #[test]
    fn checkmate_favors_the_opponent() {
        let rules = GameRules::default();
        // Fool's mate.
        let g = game("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
        assert_eq!(rules.game_result(&g), Ok(Some(GameResult::BlackWins)));

        // Back-rank mate against Black.
        let g = game("3R2k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
        assert_eq!(rules.game_result(&g), Ok(Some(GameResult::WhiteWins)));
    }

    #[test]
    fn stalemate() {
        let rules = GameRules::default();
        let g = game("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert_eq!(rules.legal_moves(&g), Ok(Vec::new()));
        assert_eq!(rules.game_result(&g), Ok(Some(GameResult::Stalemate)));
    }

    #[test]
    fn insufficient_material_results() {
        let rules = GameRules::default();
        for fen in [
            "4k3/8/8/8/8/8/8/4K3 w - - 0 1",
            "4k3/8/8/8/8/8/8/2B1K3 w - - 0 1",
            "4k3/8/8/8/8/8/8/1N2K3 w - - 0 1",
            "2b1k3/8/8/8/8/8/8/1N2K3 w - - 0 1",
        ] {
            assert_eq!(
                rules.game_result(&game(fen)),
                Ok(Some(GameResult::InsufficientMaterial)),
                "{}",
                fen
            );
        }
    }

    #[test]
    fn sufficient_material_is_ongoing() {
        let rules = GameRules::default();
        for fen in [
            Fen::STARTPOS,
            "4k3/8/8/8/8/8/8/R3K3 w - - 0 1",
            "4k3/8/8/8/8/8/4P3/4K3 w - - 0 1",
            "4k3/8/8/8/8/8/8/1NB1K3 w - - 0 1",
        ] {
            assert_eq!(rules.game_result(&game(fen)), Ok(None), "{}", fen);
        }
    }

    #[test]
    fn insufficient_material_piece_sets() {
        assert!(is_insufficient_material(pieces(&[PieceType::King])));
        assert!(is_insufficient_material(pieces(&[PieceType::King, PieceType::Knight])));
        assert!(is_insufficient_material(pieces(&[PieceType::Bishop, PieceType::King])));
        assert!(!is_insufficient_material(pieces(&[PieceType::King, PieceType::Rook])));
        assert!(!is_insufficient_material(pieces(&[PieceType::King, PieceType::Pawn])));
        assert!(!is_insufficient_material(pieces(&[
            PieceType::King,
            PieceType::Knight,
            PieceType::Knight
        ])));
    }

    #[test]
    fn game_over_helpers() {
        let rules = GameRules::default();
        let start = Game::startpos();
        assert_eq!(rules.is_game_over(&start), Ok(false));
        let e4 = Move::new(
            Square::from_algebraic("e2").unwrap(),
            Square::from_algebraic("e4").unwrap(),
            MoveType::DoublePawnPush,
        );
        assert_eq!(rules.is_legal(&start, e4), Ok(true));
        let wrong_kind = Move::ordinary(e4.start, e4.end);
        assert_eq!(rules.is_legal(&start, wrong_kind), Ok(false));
    }
}
