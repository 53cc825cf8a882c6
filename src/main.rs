//! Algle - CLI
//!
//! Daily Rubik's cube algorithm guessing game with TUI and CLI modes.

use algle::{
    catalog::{Catalog, loader::load_from_file},
    commands::{check_catalog, run_simple, score_guess, today_info},
    game::Session,
    output::{print_catalog_report, print_score_result, print_today},
    puzzle::{
        Clock, DEFAULT_EPOCH, FileStore, FixedClock, GameConfig, MemoryStore, PuzzleStore,
        Selection, SystemClock, select_solution,
    },
};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "algle",
    about = "Guess today's Rubik's cube algorithm in 8 tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Puzzle #1 date (YYYY-MM-DD)
    #[arg(long, global = true, default_value_t = DEFAULT_EPOCH)]
    epoch: NaiveDate,

    /// Play as if today were this date (YYYY-MM-DD)
    #[arg(long, global = true)]
    date: Option<NaiveDate>,

    /// JSON catalog of algorithms (default: built-in catalog)
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    /// File remembering each day's puzzle (default: user data dir)
    #[arg(long, global = true, conflicts_with = "no_store")]
    store: Option<PathBuf>,

    /// Do not remember puzzles between runs
    #[arg(long, global = true)]
    no_store: bool,

    /// Write logs to this file (the TUI otherwise runs without logging)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Show today's puzzle number without revealing it
    Today,

    /// Validate the algorithm catalog
    Check,

    /// Score a guess against any algorithm
    Score {
        /// The algorithm to guess, e.g. "R U R' U'"
        solution: String,

        /// The guess to score
        guess: String,
    },
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    init_logging(&cli, matches!(command, Commands::Play))?;

    match command {
        Commands::Play => run_play_command(&cli),
        Commands::Simple => run_simple_command(&cli),
        Commands::Today => run_today_command(&cli),
        Commands::Check => run_check_command(&cli),
        Commands::Score { solution, guess } => run_score_command(&solution, &guess),
    }
}

/// Install the tracing subscriber
///
/// The TUI owns the terminal, so it only logs when a log file is given.
fn init_logging(cli: &Cli, tui: bool) -> Result<()> {
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    if let Some(path) = &cli.log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to install logger: {e}"))?;
    } else if !tui {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to install logger: {e}"))?;
    }

    Ok(())
}

/// Load the catalog selected by `--catalog`
fn load_catalog(cli: &Cli) -> Result<Catalog> {
    match &cli.catalog {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to load catalog {}", path.display())),
        None => Ok(Catalog::embedded()),
    }
}

/// Build the store selected by `--store` / `--no-store`
fn open_store(cli: &Cli) -> Box<dyn PuzzleStore> {
    if cli.no_store {
        return Box::new(MemoryStore::new());
    }

    match cli.store.clone().or_else(FileStore::default_path) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "using puzzle store");
            Box::new(FileStore::new(path))
        }
        None => {
            tracing::warn!("no data directory available, puzzles will not be remembered");
            Box::new(MemoryStore::new())
        }
    }
}

fn today(cli: &Cli) -> NaiveDate {
    match cli.date {
        Some(date) => FixedClock(date).today(),
        None => SystemClock.today(),
    }
}

/// Select today's puzzle with the configured catalog and store
fn select_today(cli: &Cli) -> Result<(Selection, NaiveDate, GameConfig)> {
    let catalog = load_catalog(cli)?;
    let config = GameConfig::new(cli.epoch);
    let mut store = open_store(cli);
    let date = today(cli);

    let selection = select_solution(&catalog, date, &config, store.as_mut())?;
    Ok((selection, date, config))
}

fn run_play_command(cli: &Cli) -> Result<()> {
    use algle::interactive::{App, run_tui};

    let (selection, _, _) = select_today(cli)?;
    let app = App::new(Session::new(selection.day, selection.solution));
    run_tui(app)
}

fn run_simple_command(cli: &Cli) -> Result<()> {
    let (selection, _, _) = select_today(cli)?;
    let session = Session::new(selection.day, selection.solution);
    run_simple(session).map_err(|e| anyhow::anyhow!(e))
}

fn run_today_command(cli: &Cli) -> Result<()> {
    let (selection, date, config) = select_today(cli)?;
    print_today(&today_info(&selection, date, &config));
    Ok(())
}

fn run_check_command(cli: &Cli) -> Result<()> {
    let catalog = load_catalog(cli)?;
    let report = check_catalog(&catalog);
    print_catalog_report(&report);

    if report.total == 0 {
        anyhow::bail!("catalog is empty, no puzzle can be derived");
    }
    Ok(())
}

fn run_score_command(solution: &str, guess: &str) -> Result<()> {
    let result = score_guess(solution, guess).map_err(|e| anyhow::anyhow!(e))?;
    print_score_result(&result);
    Ok(())
}
