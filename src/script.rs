//! Scripted action replays.
//!
//! A script is plain text, one action per line:
//!
//! ```text
//! # comments and blank lines are skipped
//! START_GAME
//! TICK_TIMER @1000
//! NEXT_CHOICE @5400
//! SELECT_CURRENT_CHOICE @6100
//! ```
//!
//! The optional `@ms` sets the session clock before the action is applied;
//! without it the action happens at the previous timestamp. Timers only move
//! through explicit tick actions, so with a fixed seed a script replays
//! identically every time.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Rules;
use crate::element::Element;
use crate::error::ScriptError;
use crate::feedback::RecordingSink;
use crate::game::{Action, GameState};
use crate::session::{ManualClock, Session, Transition};

/// One parsed script line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptStep {
    /// 1-based source line.
    pub line: usize,
    /// Action to apply.
    pub action: Action,
    /// Absolute timestamp, if given.
    pub at_ms: Option<u64>,
}

/// Parse a script.
///
/// # Errors
///
/// Returns the first unknown action, malformed timestamp, timestamp that
/// goes backwards, or token after the timestamp.
pub fn parse_script(text: &str) -> Result<Vec<ScriptStep>, ScriptError> {
    let mut steps = Vec::new();
    let mut last_ms = 0u64;

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let content = raw.split('#').next().unwrap_or_default().trim();
        if content.is_empty() {
            continue;
        }

        let mut parts = content.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let action = name.parse::<Action>().map_err(|name| ScriptError::UnknownAction { line, name })?;

        let at_ms = match parts.next() {
            None => None,
            Some(stamp) => {
                let value = stamp
                    .strip_prefix('@')
                    .and_then(|v| v.parse::<u64>().ok())
                    .ok_or_else(|| ScriptError::BadTimestamp {
                        line,
                        value: stamp.to_string(),
                    })?;
                if value < last_ms {
                    return Err(ScriptError::NonMonotonic { line, value });
                }
                last_ms = value;
                Some(value)
            }
        };
        if let Some(extra) = parts.next() {
            return Err(ScriptError::TrailingInput {
                line,
                value: extra.to_string(),
            });
        }

        steps.push(ScriptStep { line, action, at_ms });
    }

    Ok(steps)
}

/// Result of running a script.
#[derive(Debug, Clone)]
pub struct ScriptRun {
    /// Every applied action, in order.
    pub transitions: Vec<Transition>,
    /// State after the last step.
    pub final_state: GameState,
}

/// Run parsed steps through a fresh session seeded with `seed`.
#[must_use]
pub fn run_script(
    steps: &[ScriptStep],
    seed: u64,
    rules: Rules,
    target_pool: Vec<&'static Element>,
) -> ScriptRun {
    let clock = ManualClock::new(0);
    let mut session = Session::new(
        rules,
        target_pool,
        StdRng::seed_from_u64(seed),
        &clock,
        RecordingSink::default(),
    );
    let mut transitions = session.mark_ready();

    for step in steps {
        if let Some(at) = step.at_ms {
            clock.set(at);
        }
        tracing::trace!(line = step.line, action = %step.action, "script step");
        transitions.extend(session.send(step.action));
    }

    ScriptRun {
        transitions,
        final_state: session.state().clone(),
    }
}
