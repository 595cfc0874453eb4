//! Headless rounds with a simulated player.
//!
//! `(seed, player) -> RoundResult` is a pure function: the same seed and
//! player always play the same round, so rounds can be farmed out to a
//! thread pool and any single one re-run later.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::Rules;
use crate::element::Element;
use crate::feedback::NullSink;
use crate::game::{Action, GameState, Phase, RoundSummary};
use crate::session::{Clock, ManualClock, Session};

/// Salt separating the player's decisions from the game's shuffles.
const PLAYER_SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Hard stop in case a round never ends.
const MAX_STEPS: usize = 10_000;

/// How the simulated player picks answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Always picks the right element.
    Perfect,
    /// Picks uniformly among the offered choices.
    Random,
    /// Picks the right element with probability `accuracy`, otherwise a wrong one.
    Forgetful,
}

/// A simulated player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatedPlayer {
    /// Answer policy.
    pub strategy: Strategy,
    /// Chance of a right answer for [`Strategy::Forgetful`], 0.0-1.0.
    pub accuracy: f64,
    /// Shortest thinking time per answer (ms).
    pub min_think_ms: u64,
    /// Longest thinking time per answer (ms).
    pub max_think_ms: u64,
}

impl Default for SimulatedPlayer {
    fn default() -> Self {
        Self {
            strategy: Strategy::Perfect,
            accuracy: 0.8,
            min_think_ms: 800,
            max_think_ms: 3000,
        }
    }
}

/// Outcome of one simulated round.
#[derive(Debug, Clone)]
pub struct RoundResult {
    /// Seed the round was played with.
    pub seed: u64,
    /// End-of-round statistics.
    pub summary: RoundSummary,
    /// Session time when the round ended (ms).
    pub elapsed_ms: u64,
    /// Whether the recall clock ran out.
    pub timed_out: bool,
    /// Actions applied, ticks included.
    pub actions: usize,
}

/// Play one round from the menu to the end screen.
#[must_use]
pub fn run_round(
    seed: u64,
    player: &SimulatedPlayer,
    rules: Rules,
    target_pool: Vec<&'static Element>,
) -> RoundResult {
    let clock = ManualClock::new(0);
    let mut session = Session::new(rules, target_pool, StdRng::seed_from_u64(seed), &clock, NullSink);
    let mut decisions = StdRng::seed_from_u64(seed ^ PLAYER_SEED_SALT);

    let mut actions = session.mark_ready().len();
    actions += session.send(Action::StartGame).len();

    let interval = rules.tick_interval_ms.max(1);
    let mut steps = 0;
    while session.state().phase != Phase::GameEnd && steps < MAX_STEPS {
        steps += 1;
        if session.state().phase == Phase::Memorize {
            clock.advance(interval);
            actions += session.tick().len();
            continue;
        }

        let think = if player.max_think_ms > player.min_think_ms {
            decisions.gen_range(player.min_think_ms..=player.max_think_ms)
        } else {
            player.min_think_ms
        };
        clock.advance(think);
        actions += session.tick().len();
        if session.state().phase != Phase::Recall {
            break;
        }

        let Some(choice) = pick_choice(session.state(), player, &mut decisions) else {
            break;
        };
        for action in navigate(session.state().current_choice_index, choice, session.state().available_choices.len()) {
            actions += session.send(action).len();
        }
        actions += session.send(Action::SelectCurrentChoice).len();
    }

    let state = session.state();
    let summary = RoundSummary::from_state(state);
    tracing::debug!(seed, percentage = summary.percentage, mistakes = summary.mistakes, "round finished");

    RoundResult {
        seed,
        timed_out: state.recall_time_remaining == 0,
        summary,
        elapsed_ms: clock.now_ms(),
        actions,
    }
}

/// Index of the choice the player will submit.
fn pick_choice<R: Rng + ?Sized>(
    state: &GameState,
    player: &SimulatedPlayer,
    rng: &mut R,
) -> Option<usize> {
    let choices = &state.available_choices;
    if choices.is_empty() {
        return None;
    }
    let target = state.current_target()?.atomic_number;
    let right = choices.iter().position(|c| c.atomic_number == target)?;

    let answer_right = match player.strategy {
        Strategy::Perfect => true,
        Strategy::Random => return Some(rng.gen_range(0..choices.len())),
        Strategy::Forgetful => rng.gen_bool(player.accuracy.clamp(0.0, 1.0)),
    };
    if answer_right || choices.len() == 1 {
        return Some(right);
    }
    let wrong = rng.gen_range(0..choices.len() - 1);
    Some(if wrong >= right { wrong + 1 } else { wrong })
}

/// Shortest run of carousel moves from `from` to `to` in a ring of `len`.
fn navigate(from: usize, to: usize, len: usize) -> Vec<Action> {
    if len == 0 || from == to {
        return Vec::new();
    }
    let forward = (to + len - from % len) % len;
    let backward = len - forward;
    if forward <= backward {
        vec![Action::NextChoice; forward]
    } else {
        vec![Action::PreviousChoice; backward]
    }
}
