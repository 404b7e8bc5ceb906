//! Rendering of query answers as plain text or JSON.
//!
//! Every command builds one report value; the chosen [`Format`] decides how it
//! is printed.

use clap::ValueEnum;
use oracle_core::{Color, Move, MoveType};
use oracle_rules::GameResult;
use serde::Serialize;
use std::fmt::Write;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// A single move in a report.
#[derive(Debug, Serialize)]
pub struct MoveEntry {
    pub uci: String,
    pub kind: MoveType,
}

impl From<Move> for MoveEntry {
    fn from(m: Move) -> Self {
        MoveEntry {
            uci: m.to_uci(),
            kind: m.kind,
        }
    }
}

/// Legal moves of a position.
#[derive(Debug, Serialize)]
pub struct MovesReport {
    pub fen: String,
    pub count: usize,
    pub moves: Vec<MoveEntry>,
}

/// Whether a king is in check.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub fen: String,
    pub color: Color,
    pub in_check: bool,
}

/// Game result of a position, `None` while the game goes on.
#[derive(Debug, Serialize)]
pub struct ResultReport {
    pub fen: String,
    pub result: Option<GameResult>,
}

/// Perft node count, optionally split by root move.
#[derive(Debug, Serialize)]
pub struct PerftReport {
    pub fen: String,
    pub depth: u32,
    pub nodes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub divide: Option<Vec<DivideEntry>>,
}

#[derive(Debug, Serialize)]
pub struct DivideEntry {
    pub uci: String,
    pub nodes: u64,
}

/// A report that can be printed in either format.
pub trait Report: Serialize {
    /// Human-readable rendering.
    fn to_text(&self) -> String;

    /// Renders the report in `format`.
    fn render(&self, format: Format) -> serde_json::Result<String> {
        match format {
            Format::Text => Ok(self.to_text()),
            Format::Json => serde_json::to_string_pretty(self),
        }
    }
}

impl Report for MovesReport {
    fn to_text(&self) -> String {
        let mut out = String::new();
        for entry in &self.moves {
            match entry.kind {
                MoveType::Ordinary => {
                    let _ = writeln!(out, "{}", entry.uci);
                }
                kind => {
                    let _ = writeln!(out, "{} ({:?})", entry.uci, kind);
                }
            }
        }
        let _ = write!(out, "{} legal moves", self.count);
        out
    }
}

impl Report for CheckReport {
    fn to_text(&self) -> String {
        if self.in_check {
            format!("{} is in check", self.color)
        } else {
            format!("{} is not in check", self.color)
        }
    }
}

impl Report for ResultReport {
    fn to_text(&self) -> String {
        match self.result {
            Some(result) => result.to_string(),
            None => "ongoing".to_string(),
        }
    }
}

impl Report for PerftReport {
    fn to_text(&self) -> String {
        let mut out = String::new();
        for entry in self.divide.iter().flatten() {
            let _ = writeln!(out, "{}: {}", entry.uci, entry.nodes);
        }
        let _ = write!(out, "perft({}) = {}", self.depth, self.nodes);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oracle_core::Square;

    #[test]
    fn moves_text_tags_special_moves() {
        let report = MovesReport {
            fen: String::new(),
            count: 2,
            moves: vec![
                Move::ordinary(Square::G1, Square::new(2, 5)).into(),
                Move::new(Square::E1, Square::G1, MoveType::ShortCastle).into(),
            ],
        };
        assert_eq!(
            report.to_text(),
            "g1f3\ne1g1 (ShortCastle)\n2 legal moves"
        );
    }

    #[test]
    fn result_json_uses_snake_case() {
        let report = ResultReport {
            fen: "f".to_string(),
            result: Some(GameResult::InsufficientMaterial),
        };
        let json: serde_json::Value =
            serde_json::from_str(&report.render(Format::Json).unwrap()).unwrap();
        assert_eq!(json["result"], "insufficient_material");
    }

    #[test]
    fn ongoing_result() {
        let report = ResultReport {
            fen: String::new(),
            result: None,
        };
        assert_eq!(report.render(Format::Text).unwrap(), "ongoing");
    }

    #[test]
    fn perft_json_omits_missing_divide() {
        let report = PerftReport {
            fen: String::new(),
            depth: 1,
            nodes: 20,
            divide: None,
        };
        let json: serde_json::Value =
            serde_json::from_str(&report.render(Format::Json).unwrap()).unwrap();
        assert_eq!(json["nodes"], 20);
        assert!(json.get("divide").is_none());
    }

    #[test]
    fn check_text() {
        let report = CheckReport {
            fen: String::new(),
            color: Color::Black,
            in_check: true,
        };
        assert_eq!(report.to_text(), "Black is in check");
    }
}
