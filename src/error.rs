//! Error types.
//!
//! The reducer itself never fails; these only cover the edges where outside
//! input enters the crate (configuration files and action scripts).

use thiserror::Error;

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration is not valid TOML for [`crate::config::GameConfig`].
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A timer or limit was set to zero.
    #[error("{field} must be greater than zero")]
    Zero {
        /// Offending field name.
        field: &'static str,
    },

    /// The target pool is empty.
    #[error("target pool is empty")]
    EmptyPool,

    /// The target pool names an atomic number outside the table.
    #[error("target pool names unknown element {0}")]
    UnknownElement(u8),

    /// The target pool names the same element twice.
    #[error("target pool lists element {0} more than once")]
    DuplicateElement(u8),
}

/// Errors parsing an action script.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    /// Unrecognized action name.
    #[error("line {line}: unknown action `{name}`")]
    UnknownAction {
        /// 1-based line number.
        line: usize,
        /// The name as written.
        name: String,
    },

    /// The `@ms` timestamp is not a number.
    #[error("line {line}: invalid timestamp `{value}`")]
    BadTimestamp {
        /// 1-based line number.
        line: usize,
        /// The raw value.
        value: String,
    },

    /// Timestamps went backwards.
    #[error("line {line}: timestamp {value} is earlier than the previous one")]
    NonMonotonic {
        /// 1-based line number.
        line: usize,
        /// The offending timestamp.
        value: u64,
    },

    /// Something follows the timestamp.
    #[error("line {line}: unexpected `{value}` after the timestamp")]
    TrailingInput {
        /// 1-based line number.
        line: usize,
        /// The first extra token.
        value: String,
    },
}

/// Convenience alias for configuration results.
pub type ConfigResult<T> = Result<T, ConfigError>;
