//! Periodic Recall CLI - play, simulate and replay periodic-table memory rounds.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use periodic_recall::GameConfig;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Periodic Recall - memorize the highlighted elements, then name them again
#[derive(Parser, Debug)]
#[command(name = "periodic-recall")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Game configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play a round in the terminal
    Play {
        /// Random seed (default: random)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Run many headless rounds with a simulated player
    Simulate {
        /// Number of rounds to run (default: 1000)
        #[arg(short, long, default_value = "1000")]
        rounds: u64,

        /// Starting seed (increments for each round)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Player strategy: perfect, random, or forgetful
        #[arg(long, default_value = "perfect")]
        strategy: cli::StrategyArg,

        /// Right-answer probability for the forgetful strategy (0.0-1.0)
        #[arg(short, long, default_value = "0.8")]
        accuracy: f64,

        /// Parallel threads (default: CPU count)
        #[arg(short = 'j', long)]
        threads: Option<usize>,

        /// Output format: text, json, or csv
        #[arg(short, long, default_value = "text")]
        format: cli::SimulateFormat,

        /// Show progress bar
        #[arg(short, long)]
        progress: bool,
    },

    /// Run a script of actions through a session
    Replay {
        /// Script file, one `ACTION [@ms]` per line
        #[arg(required = true)]
        script: PathBuf,

        /// Random seed (default: 0)
        #[arg(short, long, default_value = "0")]
        seed: u64,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::ReplayFormat,
    },

    /// List the periodic table
    Elements {
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::ElementsFormat,

        /// Only list the target pool
        #[arg(short, long)]
        targets: bool,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let interactive = matches!(args.command, Commands::Play { .. });
    if let Err(e) = init_logging(&config.log_level, args.log_file.as_deref(), interactive) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    config.warn_unusual();

    let result = match args.command {
        Commands::Play { seed } => cli::play::execute(&config, seed),

        Commands::Simulate {
            rounds,
            seed,
            strategy,
            accuracy,
            threads,
            format,
            progress,
        } => cli::simulate::execute(&config, rounds, seed, strategy, accuracy, threads, format, progress),

        Commands::Replay { script, seed, format } => cli::replay::execute(&config, &script, seed, format),

        Commands::Elements { format, targets } => cli::elements::execute(&config, format, targets),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<GameConfig, cli::CliError> {
    match path {
        Some(path) => Ok(GameConfig::from_file(path)?),
        None => Ok(GameConfig::default()),
    }
}

/// Install the tracing subscriber.
///
/// `RUST_LOG` wins over the configured level. The TUI draws on the terminal,
/// so without a log file an interactive session logs nothing.
fn init_logging(level: &str, log_file: Option<&Path>, interactive: bool) -> Result<(), cli::CliError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

    match log_file {
        Some(path) => {
            let file = File::create(path).map_err(|e| cli::CliError::file(path, e))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None if interactive => {}
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}
