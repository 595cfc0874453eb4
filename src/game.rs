//! Game layer.
//!
//! Implements the round rules as a pure state machine:
//! - Phases (menu, how-to-play, memorize, recall, game end)
//! - Actions and the reducer that applies them
//! - End-of-round statistics
//! - Invariant checks used by tests and fuzzing

mod action;
mod invariants;
mod state;
mod stats;

pub use action::Action;
pub use invariants::{check_invariants, InvariantViolation};
pub use state::{GameState, Phase};
pub use stats::{Outcome, RoundSummary, TargetResult};
