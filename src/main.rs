use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;

use deep_carlsen::config::EngineConfig;
use deep_carlsen::engines::agent::Agent;
use deep_carlsen::engines::console::{run_console, EngineSide};
use deep_carlsen::engines::self_play::play_game;
use deep_carlsen::game_state::chess_types::Color;
use deep_carlsen::game_state::game_state::GameState;
use deep_carlsen::move_generation::perft::{perft, perft_divide};
use deep_carlsen::search::alpha_beta::Searcher;
use deep_carlsen::search::evaluator::MaterialEvaluator;

#[derive(Parser, Debug)]
#[command(author, version, about = "Chess rules engine with fixed-depth alpha-beta search", long_about = None)]
struct Args {
    /// JSON engine configuration; missing keys use defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Count leaf nodes of the legal move tree
    Perft {
        depth: u8,

        /// Starting FEN position
        #[arg(long)]
        fen: Option<String>,

        /// Print per-move counts
        #[arg(long)]
        divide: bool,
    },
    /// Search one position and print the best move
    Search {
        /// Starting FEN position
        #[arg(long)]
        fen: Option<String>,

        /// Overrides the configured depth
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..))]
        depth: Option<u8>,

        /// Walk the full minimax tree
        #[arg(long)]
        no_pruning: bool,
    },
    /// Play a game from stdin, one long algebraic move per line
    Play {
        /// Starting FEN position
        #[arg(long)]
        fen: Option<String>,

        /// Let the engine answer for this side
        #[arg(long, value_enum)]
        engine: Option<Side>,
    },
    /// Play games against itself and print the records as a JSON array
    Selfplay {
        #[arg(long, default_value_t = 1)]
        games: u32,

        /// Write records here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
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

fn load_position(fen: Option<&str>) -> Result<GameState> {
    match fen {
        Some(fen) => GameState::from_fen(fen).with_context(|| format!("invalid FEN: {fen}")),
        None => Ok(GameState::new_game()),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = EngineConfig::load_or_default(args.config.as_deref())
        .context("failed to load engine configuration")?;

    match args.command {
        Command::Perft { depth, fen, divide } => {
            let mut game = load_position(fen.as_deref())?;
            let started = Instant::now();
            let nodes = if divide {
                let mut total = 0;
                for (mv, count) in perft_divide(&mut game, depth) {
                    println!("{mv}: {count}");
                    total += count;
                }
                total
            } else {
                perft(&mut game, depth)
            };
            let elapsed = started.elapsed();
            println!("nodes {nodes}");
            info!("perft depth {depth} took {:.3}s", elapsed.as_secs_f64());
        }
        Command::Search {
            fen,
            depth,
            no_pruning,
        } => {
            let mut game = load_position(fen.as_deref())?;
            let mut config = config;
            if let Some(depth) = depth {
                config.depth = depth;
            }
            if no_pruning {
                config.pruning = false;
            }
            config.validate().context("invalid search options")?;

            let mut searcher = Searcher::with_feature_encoder(MaterialEvaluator::default(), config.search_config());
            let result = searcher.search(&mut game);
            match result.best_move {
                Some(mv) => println!("bestmove {mv} score {:.4} nodes {}", result.score, result.nodes),
                None => println!("bestmove (none) score {:.4}", result.score),
            }
        }
        Command::Play { fen, engine } => {
            let game = load_position(fen.as_deref())?;
            let engine = engine.map(|side| EngineSide {
                color: side.into(),
                searcher: Searcher::with_feature_encoder(MaterialEvaluator::default(), config.search_config()),
            });

            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            let status = run_console(stdin.lock(), &mut stdout, game, engine).context("console I/O failed")?;
            info!("play session ended: {status:?}");
        }
        Command::Selfplay { games, out } => {
            let mut agent = Agent::from_config(MaterialEvaluator::default(), &config);
            let start = GameState::new_game();

            let mut records = Vec::with_capacity(games as usize);
            for _ in 0..games {
                records.push(play_game(&mut agent, &start, config.max_plies));
            }

            let text = serde_json::to_string_pretty(&records).context("failed to serialise game records")?;
            match out {
                Some(path) => std::fs::write(&path, text + "\n")
                    .with_context(|| format!("failed to write {}", path.display()))?,
                None => println!("{text}"),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Args, Command, Side};

    #[test]
    fn search_depth_zero_is_rejected() {
        assert!(Args::try_parse_from(["deep_carlsen", "search", "--depth", "0"]).is_err());

        let args = Args::try_parse_from(["deep_carlsen", "search", "--depth", "2"]).expect("depth 2 is valid");
        assert!(matches!(args.command, Command::Search { depth: Some(2), .. }));
    }

    #[test]
    fn play_accepts_an_engine_side() {
        let args = Args::try_parse_from(["deep_carlsen", "play", "--engine", "black"]).expect("args should parse");
        assert!(matches!(
            args.command,
            Command::Play {
                engine: Some(Side::Black),
                fen: None
            }
        ));
    }
}
