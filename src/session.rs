//! Hosting layer around the reducer.
//!
//! A [`Session`] owns everything the pure reducer must not touch:
//! - The random source and the clock
//! - A single FIFO action queue, so reductions never interleave
//! - The once-per-second ticker that feeds the phase timers
//! - The preload gate
//! - The feedback sink and the mapping from transitions to cues

use std::cell::Cell;
use std::collections::VecDeque;
use std::time::Instant;

use rand::Rng;

use crate::config::Rules;
use crate::element::Element;
use crate::feedback::{Cue, FeedbackSink, Haptic, Sfx};
use crate::game::{Action, GameState, Outcome, Phase, RoundSummary};

/// Millisecond time source.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin. Must not go backwards.
    fn now_ms(&self) -> u64;
}

/// Wall clock measured from construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Start a clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// Clock that only moves when told to. Used by tests, replays and simulations.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    /// Start at `now_ms`.
    #[must_use]
    pub fn new(now_ms: u64) -> Self {
        Self {
            now: Cell::new(now_ms),
        }
    }

    /// Jump to `now_ms` (ignored if it is in the past).
    pub fn set(&self, now_ms: u64) {
        self.now.set(self.now.get().max(now_ms));
    }

    /// Move forward by `delta_ms`.
    pub fn advance(&self, delta_ms: u64) {
        self.now.set(self.now.get().saturating_add(delta_ms));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}

/// One applied action and what it did.
#[derive(Debug, Clone)]
pub struct Transition {
    /// The action applied.
    pub action: Action,
    /// Phase before.
    pub from: Phase,
    /// Phase after.
    pub to: Phase,
    /// Session time the action was applied.
    pub at_ms: u64,
    /// Whether the state changed at all.
    pub changed: bool,
    /// Feedback emitted for it.
    pub cues: Vec<Cue>,
}

/// A running game session.
#[derive(Debug)]
pub struct Session<R, C, S> {
    state: GameState,
    rng: R,
    clock: C,
    sink: S,
    queue: VecDeque<Action>,
    ready: bool,
    last_tick_ms: u64,
}

impl<R: Rng, C: Clock, S: FeedbackSink> Session<R, C, S> {
    /// Create a session in the menu. It is not ready until [`Session::mark_ready`].
    pub fn new(rules: Rules, target_pool: Vec<&'static Element>, rng: R, clock: C, sink: S) -> Self {
        let last_tick_ms = clock.now_ms();
        Self {
            state: GameState::new(rules, target_pool),
            rng,
            clock,
            sink,
            queue: VecDeque::new(),
            ready: false,
            last_tick_ms,
        }
    }

    /// Current state snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The feedback sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the feedback sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Whether assets are loaded and actions are being applied.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Actions waiting to be applied.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Open the preload gate and apply anything queued while closed.
    pub fn mark_ready(&mut self) -> Vec<Transition> {
        if !self.ready {
            tracing::debug!(pending = self.queue.len(), "session ready");
            self.ready = true;
            self.last_tick_ms = self.clock.now_ms();
        }
        self.process()
    }

    /// Queue an action.
    pub fn dispatch(&mut self, action: Action) {
        self.queue.push_back(action);
    }

    /// Queue an action and apply the queue.
    pub fn send(&mut self, action: Action) -> Vec<Transition> {
        self.dispatch(action);
        self.process()
    }

    /// Apply queued actions one at a time, in order.
    ///
    /// Does nothing until the session is ready.
    pub fn process(&mut self) -> Vec<Transition> {
        let mut transitions = Vec::new();
        if !self.ready {
            return transitions;
        }
        while let Some(action) = self.queue.pop_front() {
            transitions.push(self.apply(action));
        }
        transitions
    }

    /// Advance the ticker. Queues a timer tick for the running phase once per
    /// tick interval and applies the queue.
    ///
    /// No tick is queued outside memorize/recall or while paused; the ticker
    /// restarts from `now` in that case so a resumed clock gets a full second.
    pub fn tick(&mut self) -> Vec<Transition> {
        let now = self.clock.now_ms();
        let interval = self.state.rules.tick_interval_ms.max(1);
        let mut transitions = self.process();

        // Each overdue tick is applied before the next is chosen, so a late
        // call that crosses from memorize into recall feeds the right clock.
        loop {
            let tick = match self.state.phase {
                Phase::Memorize => Some(Action::TickTimer),
                Phase::Recall => Some(Action::TickRecallTimer),
                _ => None,
            };
            match tick {
                Some(action) if self.ready && !self.state.is_paused => {
                    if now.saturating_sub(self.last_tick_ms) < interval {
                        break;
                    }
                    self.last_tick_ms += interval;
                    self.dispatch(action);
                    transitions.extend(self.process());
                }
                _ => {
                    self.last_tick_ms = now;
                    break;
                }
            }
        }
        transitions
    }

    fn apply(&mut self, action: Action) -> Transition {
        let now = self.clock.now_ms();
        let before = self.state.clone();
        let from = before.phase;

        self.state = std::mem::take(&mut self.state).reduce(action, &mut self.rng, now);

        let to = self.state.phase;
        let changed = self.state != before;
        if !changed {
            tracing::trace!(%action, phase = %from, "action ignored");
        } else if from == to {
            tracing::debug!(%action, phase = %to, "action applied");
        } else {
            tracing::info!(%action, %from, %to, "phase transition");
        }
        if from != Phase::Memorize && to == Phase::Memorize {
            // A fresh round restarts the ticker.
            self.last_tick_ms = now;
        }

        let cues = if changed {
            cues_for(action, &before, &self.state)
        } else {
            Vec::new()
        };
        for &cue in &cues {
            self.sink.cue(cue, now);
        }

        Transition {
            action,
            from,
            to,
            at_ms: now,
            changed,
            cues,
        }
    }
}

/// Feedback for a state change. Ticks are silent apart from the round ending.
fn cues_for(action: Action, before: &GameState, after: &GameState) -> Vec<Cue> {
    let mut cues = Vec::new();

    match action {
        Action::StartGame if after.phase == Phase::Memorize => cues.push(Cue::Sound(Sfx::Start)),
        Action::ShowHowToPlay => cues.push(Cue::Sound(Sfx::Info)),
        Action::ShowOriginPopup => cues.push(Cue::Sound(Sfx::Click)),
        Action::HideOriginPopup => cues.push(Cue::Sound(Sfx::ClickAlt)),
        Action::ResetGame => cues.push(Cue::Sound(Sfx::Press)),
        Action::NextChoice | Action::PreviousChoice
            if before.current_choice_index != after.current_choice_index =>
        {
            cues.push(Cue::Sound(Sfx::Swoosh));
        }
        Action::SelectCurrentChoice => {
            if after.correct_placements.len() > before.correct_placements.len() {
                cues.push(Cue::Sound(Sfx::Press));
            } else if after.mistakes > before.mistakes {
                cues.push(Cue::Sound(Sfx::PressBig));
                cues.push(Cue::Haptic(Haptic::Error));
            }
        }
        _ => {}
    }

    if before.phase != Phase::GameEnd && after.phase == Phase::GameEnd {
        let sfx = match RoundSummary::from_state(after).outcome {
            Outcome::MissionSucceeded => Sfx::Success,
            Outcome::MissionFailed => Sfx::Fail,
        };
        cues.push(Cue::Sound(sfx));
    }

    cues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element;
    use crate::feedback::RecordingSink;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    type TestSession<'a> = Session<StdRng, &'a ManualClock, RecordingSink>;

    fn session(clock: &ManualClock) -> TestSession<'_> {
        let mut session = Session::new(
            Rules::default(),
            element::target_pool(),
            StdRng::seed_from_u64(3),
            clock,
            RecordingSink::default(),
        );
        session.mark_ready();
        session
    }

    #[test]
    fn test_actions_wait_for_ready() {
        let clock = ManualClock::new(0);
        let mut session = Session::new(
            Rules::default(),
            element::target_pool(),
            StdRng::seed_from_u64(3),
            &clock,
            RecordingSink::default(),
        );
        assert!(session.send(Action::StartGame).is_empty());
        assert_eq!(session.state().phase, Phase::Menu);
        assert_eq!(session.pending(), 1);

        let transitions = session.mark_ready();
        assert_eq!(transitions.len(), 1);
        assert_eq!(session.state().phase, Phase::Memorize);
        assert_eq!(session.sink().cues, vec![Cue::Sound(Sfx::Start)]);
    }

    #[test]
    fn test_queue_is_fifo() {
        let clock = ManualClock::new(0);
        let mut session = session(&clock);
        session.dispatch(Action::ShowHowToPlay);
        session.dispatch(Action::StartGame);
        session.dispatch(Action::ShowOriginPopup);
        let transitions = session.process();
        let actions: Vec<Action> = transitions.iter().map(|t| t.action).collect();
        assert_eq!(
            actions,
            vec![Action::ShowHowToPlay, Action::StartGame, Action::ShowOriginPopup]
        );
        assert_eq!(transitions[1].from, Phase::HowToPlay);
        assert_eq!(transitions[1].to, Phase::Memorize);
    }

    #[test]
    fn test_ticker_runs_memorize_then_recall() {
        let clock = ManualClock::new(0);
        let mut session = session(&clock);
        session.send(Action::StartGame);

        clock.advance(999);
        assert!(session.tick().is_empty());
        clock.advance(1);
        assert_eq!(session.tick().len(), 1);
        assert_eq!(session.state().time_remaining, 4);

        clock.advance(4000);
        let transitions = session.tick();
        assert_eq!(transitions.len(), 4);
        assert_eq!(session.state().phase, Phase::Recall);

        clock.advance(2000);
        let transitions = session.tick();
        assert!(transitions.iter().all(|t| t.action == Action::TickRecallTimer));
        assert_eq!(session.state().recall_time_remaining, 28);
    }

    #[test]
    fn test_ticker_stops_while_paused() {
        let clock = ManualClock::new(0);
        let mut session = session(&clock);
        session.send(Action::StartGame);
        session.send(Action::ShowOriginPopup);

        clock.advance(10_000);
        assert!(session.tick().is_empty());
        assert_eq!(session.state().time_remaining, 5);

        session.send(Action::HideOriginPopup);
        clock.advance(1000);
        assert_eq!(session.tick().len(), 1);
        assert_eq!(session.state().time_remaining, 4);
    }

    #[test]
    fn test_no_ticks_outside_round() {
        let clock = ManualClock::new(0);
        let mut session = session(&clock);
        clock.advance(5000);
        assert!(session.tick().is_empty());
        assert_eq!(session.pending(), 0);
    }

    #[test]
    fn test_cues_for_answers() {
        let clock = ManualClock::new(0);
        let mut session = session(&clock);
        session.send(Action::StartGame);
        clock.advance(5000);
        session.tick();
        assert_eq!(session.state().phase, Phase::Recall);
        session.sink_mut().drain();

        let target = session.state().current_target().map(|e| e.atomic_number);
        while session.state().current_choice().map(|e| e.atomic_number) == target {
            session.send(Action::NextChoice);
        }
        session.sink_mut().drain();
        clock.advance(1200);
        let transition = session.send(Action::SelectCurrentChoice).remove(0);
        assert_eq!(
            transition.cues,
            vec![Cue::Sound(Sfx::PressBig), Cue::Haptic(Haptic::Error)]
        );
        assert_eq!(session.state().response_times, vec![1200]);

        while session.state().current_choice().map(|e| e.atomic_number) != target {
            session.send(Action::NextChoice);
        }
        let transition = session.send(Action::SelectCurrentChoice).remove(0);
        assert_eq!(transition.cues, vec![Cue::Sound(Sfx::Press)]);
    }

    fn cues_of(session: &mut TestSession<'_>, action: Action) -> Vec<Cue> {
        session.send(action).remove(0).cues
    }

    #[test]
    fn test_cue_for_each_action() {
        let clock = ManualClock::new(0);
        let mut session = session(&clock);

        assert_eq!(cues_of(&mut session, Action::ShowHowToPlay), vec![Cue::Sound(Sfx::Info)]);
        assert_eq!(cues_of(&mut session, Action::StartGame), vec![Cue::Sound(Sfx::Start)]);
        assert_eq!(cues_of(&mut session, Action::ShowOriginPopup), vec![Cue::Sound(Sfx::Click)]);
        assert!(cues_of(&mut session, Action::ShowOriginPopup).is_empty());
        assert_eq!(cues_of(&mut session, Action::HideOriginPopup), vec![Cue::Sound(Sfx::ClickAlt)]);
        assert!(cues_of(&mut session, Action::HideOriginPopup).is_empty());

        clock.advance(5000);
        session.tick();
        assert_eq!(session.state().phase, Phase::Recall);
        assert_eq!(cues_of(&mut session, Action::NextChoice), vec![Cue::Sound(Sfx::Swoosh)]);
        assert_eq!(cues_of(&mut session, Action::PreviousChoice), vec![Cue::Sound(Sfx::Swoosh)]);

        assert_eq!(cues_of(&mut session, Action::ResetGame), vec![Cue::Sound(Sfx::Press)]);
        assert_eq!(session.state().phase, Phase::Menu);
        assert!(cues_of(&mut session, Action::ResetGame).is_empty());
        assert_eq!(
            session.sink().cues,
            vec![
                Cue::Sound(Sfx::Info),
                Cue::Sound(Sfx::Start),
                Cue::Sound(Sfx::Click),
                Cue::Sound(Sfx::ClickAlt),
                Cue::Sound(Sfx::Swoosh),
                Cue::Sound(Sfx::Swoosh),
                Cue::Sound(Sfx::Press),
            ]
        );
    }

    #[test]
    fn test_no_swoosh_when_choice_stays() {
        let clock = ManualClock::new(0);
        let pool: Vec<&'static Element> = element::lookup(5).into_iter().collect();
        let mut session = Session::new(
            Rules::default(),
            pool,
            StdRng::seed_from_u64(3),
            &clock,
            RecordingSink::default(),
        );
        session.mark_ready();
        session.send(Action::StartGame);
        clock.advance(5000);
        session.tick();
        assert_eq!(session.state().available_choices.len(), 1);

        let transition = session.send(Action::NextChoice).remove(0);
        assert!(!transition.changed);
        assert!(transition.cues.is_empty());

        // Cycling still resumes a paused round, but without a swoosh.
        session.send(Action::ShowOriginPopup);
        let transition = session.send(Action::PreviousChoice).remove(0);
        assert!(transition.changed);
        assert!(!session.state().is_paused);
        assert!(transition.cues.is_empty());
    }

    #[test]
    fn test_game_end_cue() {
        let clock = ManualClock::new(0);
        let mut session = session(&clock);
        session.send(Action::StartGame);
        clock.advance(35_000);
        session.tick();
        assert_eq!(session.state().phase, Phase::GameEnd);
        assert_eq!(session.sink().cues.last(), Some(&Cue::Sound(Sfx::Fail)));
    }

    #[test]
    fn test_ignored_action_reports_unchanged() {
        let clock = ManualClock::new(0);
        let mut session = session(&clock);
        let transition = session.send(Action::SelectCurrentChoice).remove(0);
        assert!(!transition.changed);
        assert!(transition.cues.is_empty());
    }

    #[test]
    fn test_manual_clock_never_rewinds() {
        let clock = ManualClock::new(500);
        clock.set(100);
        assert_eq!(clock.now_ms(), 500);
        clock.set(900);
        assert_eq!(clock.now_ms(), 900);
    }
}
