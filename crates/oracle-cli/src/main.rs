//! `oracle` - answers chess rules queries for a FEN position.
//!
//! ```text
//! oracle moves "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1"
//! oracle check --color black
//! oracle result "7k/5Q2/6K1/8/8/8/8/8 b - - 0 1" --format json
//! oracle perft --depth 3 --divide
//! oracle moves --play e2e4 e7e5
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.

mod output;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand, ValueEnum};
use oracle_core::{Color, Fen, Move};
use oracle_rules::{perft, perft_divide, Game, GameRules, RuleSet, RulesConfig};
use output::{
    CheckReport, DivideEntry, Format, MoveEntry, MovesReport, PerftReport, Report, ResultReport,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "oracle")]
#[command(about = "Chess rules oracle: legal moves, check and game results")]
struct Cli {
    /// Output format
    #[arg(long, value_enum, global = true, default_value = "text")]
    format: Format,

    /// Rules configuration file (defaults to oracle.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the legal moves of the side to move
    Moves(Position),
    /// Report whether a king is in check
    Check {
        #[command(flatten)]
        position: Position,
        /// King to test (defaults to the side to move)
        #[arg(long, value_enum)]
        color: Option<Side>,
    },
    /// Report the game result, or that the game is ongoing
    #[command(name = "result")]
    Outcome(Position),
    /// Count leaf nodes of the legal move tree
    Perft {
        #[command(flatten)]
        position: Position,
        /// Search depth in plies
        #[arg(short, long, default_value = "3")]
        depth: u32,
        /// Also print the node count below each root move
        #[arg(long)]
        divide: bool,
    },
}

#[derive(Args)]
struct Position {
    /// Position in FEN (defaults to the starting position)
    #[arg(default_value = Fen::STARTPOS)]
    fen: String,

    /// Moves to play from the FEN before answering, in coordinate notation
    #[arg(long, value_name = "MOVE", num_args = 1..)]
    play: Vec<String>,
}

impl Position {
    fn game(&self, rules: &GameRules) -> anyhow::Result<Game> {
        let mut game =
            Game::from_fen(&self.fen).with_context(|| format!("invalid FEN: {}", self.fen))?;
        for text in &self.play {
            let (start, end) =
                Move::parse_squares(text).with_context(|| format!("invalid move: {}", text))?;
            let Some(m) = rules
                .legal_moves(&game)?
                .into_iter()
                .find(|m| m.start == start && m.end == end)
            else {
                bail!("illegal move {} in {}", text, game.to_fen());
            };
            tracing::debug!(%m, "playing move");
            game = game.play(m);
        }
        Ok(game)
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

fn load_rules(path: Option<PathBuf>) -> anyhow::Result<GameRules> {
    let path = path.unwrap_or_else(RulesConfig::config_path);
    let config = RulesConfig::load(&path)
        .with_context(|| format!("failed to load config from {}", path.display()))?;
    tracing::debug!(?config, "loaded rules configuration");
    Ok(GameRules::from_config(&config))
}

fn run(cli: Cli) -> anyhow::Result<String> {
    let rules = load_rules(cli.config)?;

    let rendered = match cli.command {
        Commands::Moves(position) => {
            let game = position.game(&rules)?;
            let moves = rules.legal_moves(&game)?;
            MovesReport {
                fen: game.to_fen(),
                count: moves.len(),
                moves: moves.into_iter().map(MoveEntry::from).collect(),
            }
            .render(cli.format)?
        }
        Commands::Check { position, color } => {
            let game = position.game(&rules)?;
            let color = color.map_or(game.turn, Color::from);
            CheckReport {
                fen: game.to_fen(),
                color,
                in_check: rules.is_check(&game.board, color)?,
            }
            .render(cli.format)?
        }
        Commands::Outcome(position) => {
            let game = position.game(&rules)?;
            ResultReport {
                fen: game.to_fen(),
                result: rules.game_result(&game)?,
            }
            .render(cli.format)?
        }
        Commands::Perft {
            position,
            depth,
            divide,
        } => {
            let game = position.game(&rules)?;
            tracing::info!(depth, fen = %position.fen, "running perft");
            let (nodes, divide) = if divide && depth > 0 {
                let entries = perft_divide(&rules, &game, depth)?;
                let nodes = entries.iter().map(|(_, n)| n).sum();
                let entries = entries
                    .into_iter()
                    .map(|(uci, nodes)| DivideEntry { uci, nodes })
                    .collect();
                (nodes, Some(entries))
            } else {
                (perft(&rules, &game, depth)?, None)
            };
            PerftReport {
                fen: game.to_fen(),
                depth,
                nodes,
                divide,
            }
            .render(cli.format)?
        }
    };
    Ok(rendered)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    println!("{}", run(cli)?);
    Ok(())
}
