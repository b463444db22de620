use anyhow::Context;
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::Verbosity;
use serde::Serialize;
use sweeper_core::{CellCount, Coord, Coord2, Game, GameConfig, GameError, Level, Phase};
use tracing_subscriber::filter::LevelFilter;

use crate::moves::Move;

mod moves;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum LevelArg {
    Easy,
    Normal,
    Hard,
    Custom,
}

/// Replays a scripted minesweeper session and prints the final board as JSON.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity,

    /// Board preset
    #[arg(short, long, value_enum, default_value_t = LevelArg::Easy)]
    level: LevelArg,

    /// Board width, implies the custom level
    #[arg(long)]
    width: Option<Coord>,

    /// Board height, implies the custom level
    #[arg(long)]
    height: Option<Coord>,

    /// Mine count, implies the custom level
    #[arg(short, long)]
    mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Moves to replay: L<x>,<y> (reveal), R<x>,<y> (cycle mark), reset, tick
    moves: Vec<Move>,
}

impl Args {
    fn level(&self) -> Level {
        let preset = match self.level {
            LevelArg::Easy | LevelArg::Custom => Level::Easy,
            LevelArg::Normal => Level::Normal,
            LevelArg::Hard => Level::Hard,
        };
        let customized = self.width.is_some() || self.height.is_some() || self.mines.is_some();
        if self.level != LevelArg::Custom && !customized {
            return preset;
        }

        let base = preset.config();
        Level::Custom(GameConfig::new(
            (
                self.width.unwrap_or(base.size.0),
                self.height.unwrap_or(base.size.1),
            ),
            self.mines.unwrap_or(base.mines),
        ))
    }
}

#[derive(Debug, Serialize)]
struct Report {
    level: &'static str,
    config: GameConfig,
    seed: u64,
    phase: Phase,
    flags_remaining: isize,
    elapsed_secs: u32,
    detonated_mine: Option<Coord2>,
    /// Row-major: `board[y][x]`.
    board: Vec<Vec<i8>>,
}

impl Report {
    fn new(level: Level, game: &Game) -> Self {
        let board = game.derived_board();
        Self {
            level: level.name(),
            config: game.config(),
            seed: game.seed(),
            phase: game.phase(),
            flags_remaining: game.flags_remaining(),
            elapsed_secs: game.elapsed_secs(),
            detonated_mine: game.detonated_mine(),
            board: board.t().rows().into_iter().map(|row| row.to_vec()).collect(),
        }
    }
}

fn init_logging(verbose: &Verbosity) {
    let Some(level) = verbose.log_level() else {
        return;
    };
    let filter = match level {
        log::Level::Error => LevelFilter::ERROR,
        log::Level::Warn => LevelFilter::WARN,
        log::Level::Info => LevelFilter::INFO,
        log::Level::Debug => LevelFilter::DEBUG,
        log::Level::Trace => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn replay(game: &mut Game, moves: &[Move]) -> anyhow::Result<()> {
    for &mv in moves {
        match game.apply(mv.action()) {
            Ok(changed) => log::debug!("{mv}: changed={changed}, phase={:?}", game.phase()),
            Err(GameError::AlreadyEnded) => log::warn!("{mv}: game already ended, skipped"),
            Err(err) => return Err(err).with_context(|| format!("move {mv} failed")),
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args.verbose);

    let level = args.level();
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("level: {}, config: {:?}, seed: {}", level.name(), level.config(), seed);

    let mut game = Game::new(level.config(), seed);
    replay(&mut game, &args.moves)?;

    let report = Report::new(level, &game);
    println!(
        "{}",
        serde_json::to_string_pretty(&report).context("Could not serialize report")?
    );
    Ok(())
}
