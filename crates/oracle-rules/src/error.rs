//! Errors produced by rules queries.

use oracle_core::Color;
use thiserror::Error;

/// Errors that can occur while evaluating a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RulesError {
    /// A king-safety query was made for a color with no king on the board.
    #[error("board has no {color} king")]
    BoardMissingKing { color: Color },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_the_color() {
        let err = RulesError::BoardMissingKing {
            color: Color::Black,
        };
        assert_eq!(err.to_string(), "board has no Black king");
    }
}
