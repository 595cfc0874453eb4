//! Game configuration, loadable from TOML.
//!
//! Every field has a default, so an empty file (or no file) gives the
//! standard game: 5 seconds to memorize, 30 to recall, 3 mistakes allowed.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::element::{self, Element, TARGET_POOL};
use crate::error::{ConfigError, ConfigResult};

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Log filter used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Round rules.
    pub rules: RulesConfig,
    /// Feedback throttling.
    pub feedback: FeedbackConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            rules: RulesConfig::default(),
            feedback: FeedbackConfig::default(),
        }
    }
}

impl GameConfig {
    /// Parse and validate configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and a validation
    /// error for out-of-range values.
    pub fn from_toml(toml_str: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Check all values.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> ConfigResult<()> {
        self.rules.validate()
    }

    /// Log settings that are valid but probably not intended.
    pub fn warn_unusual(&self) {
        if self.feedback.throttle_ms == 0 {
            tracing::warn!("feedback throttling disabled");
        }
        if self.rules.target_pool.len() == 1 {
            tracing::warn!("single-element target pool: every answer is correct");
        }
        let pool = u32::try_from(self.rules.target_pool.len()).unwrap_or(u32::MAX);
        if self.rules.recall_secs < pool {
            tracing::warn!(
                recall_secs = self.rules.recall_secs,
                targets = pool,
                "recall clock is shorter than one second per target"
            );
        }
        if self.rules.max_mistakes > pool && pool > 0 {
            tracing::warn!(
                max_mistakes = self.rules.max_mistakes,
                "mistake cap exceeds the number of targets"
            );
        }
    }
}

/// Round rules as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Seconds on the memorize clock.
    pub memorize_secs: u32,
    /// Seconds on the recall clock.
    pub recall_secs: u32,
    /// Mistakes that end the round.
    pub max_mistakes: u32,
    /// Milliseconds between timer ticks.
    pub tick_interval_ms: u64,
    /// Atomic numbers the targets are drawn from.
    pub target_pool: Vec<u8>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        let rules = Rules::default();
        Self {
            memorize_secs: rules.memorize_secs,
            recall_secs: rules.recall_secs,
            max_mistakes: rules.max_mistakes,
            tick_interval_ms: rules.tick_interval_ms,
            target_pool: TARGET_POOL.to_vec(),
        }
    }
}

impl RulesConfig {
    /// Check timers, the mistake cap, and the target pool.
    ///
    /// # Errors
    ///
    /// Returns the first invalid value found.
    pub fn validate(&self) -> ConfigResult<()> {
        for (field, value) in [
            ("memorize_secs", u64::from(self.memorize_secs)),
            ("recall_secs", u64::from(self.recall_secs)),
            ("max_mistakes", u64::from(self.max_mistakes)),
            ("tick_interval_ms", self.tick_interval_ms),
        ] {
            if value == 0 {
                return Err(ConfigError::Zero { field });
            }
        }
        self.resolve_pool().map(|_| ())
    }

    /// Resolve the target pool to elements, in periodic-table order.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty pool, unknown atomic numbers, or
    /// duplicates.
    pub fn resolve_pool(&self) -> ConfigResult<Vec<&'static Element>> {
        if self.target_pool.is_empty() {
            return Err(ConfigError::EmptyPool);
        }
        let mut seen = HashSet::new();
        let mut pool = Vec::with_capacity(self.target_pool.len());
        for &number in &self.target_pool {
            if !seen.insert(number) {
                return Err(ConfigError::DuplicateElement(number));
            }
            pool.push(element::lookup(number).ok_or(ConfigError::UnknownElement(number))?);
        }
        pool.sort_by_key(|e| e.atomic_number);
        Ok(pool)
    }

    /// The timer and mistake constants as [`Rules`].
    #[must_use]
    pub const fn rules(&self) -> Rules {
        Rules {
            memorize_secs: self.memorize_secs,
            recall_secs: self.recall_secs,
            max_mistakes: self.max_mistakes,
            tick_interval_ms: self.tick_interval_ms,
        }
    }
}

/// Feedback settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    /// Repeats of one effect closer than this are dropped.
    pub throttle_ms: u64,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self { throttle_ms: 150 }
    }
}

/// Timer and mistake constants carried inside the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Seconds on the memorize clock.
    pub memorize_secs: u32,
    /// Seconds on the recall clock.
    pub recall_secs: u32,
    /// Mistakes that end the round.
    pub max_mistakes: u32,
    /// Milliseconds between timer ticks.
    pub tick_interval_ms: u64,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            memorize_secs: 5,
            recall_secs: 30,
            max_mistakes: 3,
            tick_interval_ms: 1000,
        }
    }
}
