//! Perft (performance test) for move generator validation.
//!
//! Perft counts the number of leaf nodes at a given depth, which can be
//! compared against known-correct values to validate the move generator.

use crate::{Game, RuleSet, RulesError};

/// Counts the number of leaf nodes at the given depth.
pub fn perft<R: RuleSet + ?Sized>(rules: &R, game: &Game, depth: u32) -> Result<u64, RulesError> {
    if depth == 0 {
        return Ok(1);
    }

    let moves = rules.legal_moves(game)?;

    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    let mut nodes = 0u64;
    for m in moves {
        nodes += perft(rules, &game.play(m), depth - 1)?;
    }
    Ok(nodes)
}

/// Perft with divide - node count below each root move, sorted by move.
/// Useful for debugging to identify which moves have incorrect counts.
pub fn perft_divide<R: RuleSet + ?Sized>(
    rules: &R,
    game: &Game,
    depth: u32,
) -> Result<Vec<(String, u64)>, RulesError> {
    let moves = rules.legal_moves(game)?;
    let mut results = Vec::with_capacity(moves.len());

    for m in moves {
        let nodes = if depth > 1 {
            perft(rules, &game.play(m), depth - 1)?
        } else {
            1
        };
        results.push((m.to_uci(), nodes));
    }

    results.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(results)
}
