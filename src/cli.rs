//! CLI command implementations for Periodic Recall.

pub(crate) mod elements;
pub(crate) mod play;
pub(crate) mod replay;
pub(crate) mod simulate;

mod output;

use clap::ValueEnum;
use periodic_recall::simulate::Strategy;
use periodic_recall::{ConfigError, ScriptError};
use indicatif::style::TemplateError;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Simulated player strategy for the `simulate` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum StrategyArg {
    /// Always answers correctly.
    Perfect,
    /// Answers uniformly at random.
    Random,
    /// Answers correctly with the given accuracy.
    Forgetful,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Perfect => Self::Perfect,
            StrategyArg::Random => Self::Random,
            StrategyArg::Forgetful => Self::Forgetful,
        }
    }
}

/// Output format for the `simulate` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum SimulateFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
    /// CSV format.
    Csv,
}

/// Output format for the `replay` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ReplayFormat {
    /// One line per transition plus the summary.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Output format for the `elements` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ElementsFormat {
    /// Aligned table.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// CLI error type.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// A file could not be read or created.
    #[error("failed to open {}: {source}", path.display())]
    File {
        /// Offending path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Terminal or stdout I/O failed.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The action script was rejected.
    #[error(transparent)]
    Script(#[from] ScriptError),

    /// JSON output failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// The progress bar template did not parse.
    #[error("invalid progress template: {0}")]
    Template(#[from] TemplateError),

    /// `--accuracy` outside 0.0-1.0.
    #[error("accuracy must be between 0 and 1, got {0}")]
    Accuracy(f64),

    /// A replayed script left the game in an inconsistent state.
    #[error("invariant violated after replay: {0}")]
    Invariant(String),
}

impl CliError {
    /// Wrap an I/O error with the path it happened on.
    pub(crate) fn file(path: &Path, source: io::Error) -> Self {
        Self::File {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Use `seed`, or draw a fresh one from the thread RNG.
pub(crate) fn seed_or_random(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(rand::random)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_seed_is_kept() {
        assert_eq!(seed_or_random(Some(7)), 7);
        assert_eq!(seed_or_random(Some(0)), 0);
    }

    #[test]
    fn test_library_errors_convert() {
        let err: CliError = ScriptError::UnknownAction {
            line: 3,
            name: "JUMP".to_string(),
        }
        .into();
        assert!(matches!(err, CliError::Script(_)));
        assert_eq!(err.to_string(), ScriptError::UnknownAction { line: 3, name: "JUMP".to_string() }.to_string());

        let err: CliError = ConfigError::EmptyPool.into();
        assert!(matches!(err, CliError::Config(ConfigError::EmptyPool)));
    }

    #[test]
    fn test_file_error_names_path() {
        let err = CliError::file(Path::new("missing.txt"), io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.to_string(), "failed to open missing.txt: gone");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_accuracy_message() {
        assert_eq!(CliError::Accuracy(1.5).to_string(), "accuracy must be between 0 and 1, got 1.5");
    }
}
