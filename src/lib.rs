// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Periodic Recall: a periodic-table memory game.
//!
//! The player memorizes a handful of highlighted cells on the periodic
//! table, then has to name each highlighted cell again, against the clock,
//! by cycling through a carousel of candidate elements.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Front end (TUI / simulator)       │
//! ├─────────────────────────────────────┤
//! │   Session: queue, ticker, cues      │
//! ├─────────────────────────────────────┤
//! │   Game: pure reducer over state     │
//! ├─────────────────────────────────────┤
//! │   Element table (static data)       │
//! └─────────────────────────────────────┘
//! ```
//!
//! The reducer never performs I/O. Randomness is injected, so a seeded RNG
//! reproduces a round exactly.

pub mod config;
pub mod element;
pub mod error;
pub mod feedback;
pub mod game;
pub mod layout;
pub mod script;
pub mod session;
pub mod simulate;

pub use config::{GameConfig, Rules};
pub use element::{lookup, Element, Position, PERIODIC_TABLE, TARGET_POOL};
pub use error::{ConfigError, ScriptError};
pub use game::{Action, GameState, Phase, RoundSummary};
pub use session::{Clock, ManualClock, Session, SystemClock, Transition};
