//! Game state and the reducer.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::config::Rules;
use crate::element::{self, Element, Position};
use crate::game::Action;

/// Top-level phase of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    /// Start screen.
    Menu,
    /// Instructions screen.
    HowToPlay,
    /// Targets are shown; the memorize clock runs.
    Memorize,
    /// Targets are hidden; the player names each highlighted cell.
    Recall,
    /// Round over (all recalled, out of mistakes, or out of time).
    GameEnd,
}

impl Phase {
    /// Whether a round is in progress.
    #[must_use]
    pub const fn is_round_active(self) -> bool {
        matches!(self, Self::Memorize | Self::Recall)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Menu => "menu",
            Self::HowToPlay => "howToPlay",
            Self::Memorize => "memorize",
            Self::Recall => "recall",
            Self::GameEnd => "gameEnd",
        };
        f.write_str(name)
    }
}

/// Complete session state.
///
/// All fields are public for rendering; mutate only through [`GameState::reduce`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Current phase.
    pub phase: Phase,
    /// Targets for the round, in recall order.
    pub target_elements: Vec<&'static Element>,
    /// Index of the target currently being recalled.
    pub current_element_index: usize,
    /// Grid cell of the target currently being recalled.
    pub current_highlighted_position: Option<Position>,
    /// Atomic numbers recalled correctly, in order.
    pub correct_placements: Vec<u8>,
    /// Wrong answers so far.
    pub mistakes: u32,
    /// Wrong answers that end the round.
    pub max_mistakes: u32,
    /// Seconds left to memorize.
    pub time_remaining: u32,
    /// Seconds left to recall.
    pub recall_time_remaining: u32,
    /// Candidate answers still on offer.
    pub available_choices: Vec<&'static Element>,
    /// Index of the focused candidate.
    pub current_choice_index: usize,
    /// Milliseconds taken per answer, right or wrong.
    pub response_times: Vec<u64>,
    /// Timestamp (ms) the current attempt started.
    pub current_element_start_time: u64,
    /// Whether the origin overlay is open.
    pub show_origin_popup: bool,
    /// Timers are frozen while set.
    pub is_paused: bool,
    /// Timer and mistake constants.
    pub rules: Rules,
    /// Elements every round draws its targets from.
    pub target_pool: Vec<&'static Element>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Rules::default(), element::target_pool())
    }
}

impl GameState {
    /// Create the canonical menu state.
    #[must_use]
    pub fn new(rules: Rules, target_pool: Vec<&'static Element>) -> Self {
        Self {
            phase: Phase::Menu,
            target_elements: target_pool.clone(),
            current_element_index: 0,
            current_highlighted_position: None,
            correct_placements: Vec::new(),
            mistakes: 0,
            max_mistakes: rules.max_mistakes,
            time_remaining: rules.memorize_secs,
            recall_time_remaining: rules.recall_secs,
            available_choices: Vec::new(),
            current_choice_index: 0,
            response_times: Vec::new(),
            current_element_start_time: 0,
            show_origin_popup: false,
            is_paused: false,
            rules,
            target_pool,
        }
    }

    /// The target the player is asked to name, if any.
    #[must_use]
    pub fn current_target(&self) -> Option<&'static Element> {
        self.target_elements.get(self.current_element_index).copied()
    }

    /// The focused carousel choice, if any.
    #[must_use]
    pub fn current_choice(&self) -> Option<&'static Element> {
        self.available_choices.get(self.current_choice_index).copied()
    }

    /// Whether an element is one of this round's targets.
    #[must_use]
    pub fn is_target(&self, atomic_number: u8) -> bool {
        self.target_elements
            .iter()
            .any(|e| e.atomic_number == atomic_number)
    }

    /// Whether an element has been recalled correctly.
    #[must_use]
    pub fn is_recalled(&self, atomic_number: u8) -> bool {
        self.correct_placements.contains(&atomic_number)
    }

    /// Share of targets recalled, 0-100. An empty round counts as 0%.
    #[must_use]
    pub fn percent_complete(&self) -> u32 {
        let total = self.target_elements.len().max(1);
        let correct = self.correct_placements.len();
        #[allow(clippy::cast_possible_truncation)]
        let percent = ((correct * 200 + total) / (total * 2)) as u32;
        percent
    }

    /// Apply one action and return the next state.
    ///
    /// Pure apart from the injected random source: shuffles happen on
    /// `StartGame` and on entering recall. `now_ms` stamps response times.
    /// Actions that do not apply to the current phase return the state
    /// unchanged.
    #[must_use]
    pub fn reduce<R: Rng + ?Sized>(self, action: Action, rng: &mut R, now_ms: u64) -> Self {
        match action {
            Action::StartGame => self.start_game(rng),
            Action::ShowHowToPlay => Self {
                phase: Phase::HowToPlay,
                show_origin_popup: false,
                ..self
            },
            Action::BackToMenu | Action::ResetGame => self.reset(),
            Action::ShowOriginPopup => Self {
                show_origin_popup: true,
                is_paused: true,
                ..self
            },
            Action::HideOriginPopup => Self {
                show_origin_popup: false,
                is_paused: false,
                ..self
            },
            Action::TickTimer => self.tick_memorize(rng, now_ms),
            Action::TickRecallTimer => self.tick_recall(),
            Action::NextChoice => self.cycle_choice(true),
            Action::PreviousChoice => self.cycle_choice(false),
            Action::SelectCurrentChoice => self.select_current_choice(now_ms),
        }
    }

    fn reset(self) -> Self {
        Self::new(self.rules, self.target_pool)
    }

    fn start_game<R: Rng + ?Sized>(self, rng: &mut R) -> Self {
        if self.phase.is_round_active() {
            return self;
        }
        let mut targets = self.target_pool.clone();
        targets.shuffle(rng);
        Self {
            phase: Phase::Memorize,
            target_elements: targets,
            ..self.reset()
        }
    }

    fn tick_memorize<R: Rng + ?Sized>(mut self, rng: &mut R, now_ms: u64) -> Self {
        if self.is_paused || self.phase != Phase::Memorize {
            return self;
        }
        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining > 0 {
            return self;
        }

        let Some(first) = self.target_elements.first() else {
            self.phase = Phase::GameEnd;
            return self;
        };
        let highlighted = first.position;
        let mut choices = self.target_elements.clone();
        choices.shuffle(rng);

        Self {
            phase: Phase::Recall,
            current_element_index: 0,
            current_highlighted_position: Some(highlighted),
            available_choices: choices,
            current_choice_index: 0,
            recall_time_remaining: self.rules.recall_secs,
            current_element_start_time: now_ms,
            ..self
        }
    }

    fn tick_recall(mut self) -> Self {
        if self.is_paused || self.phase != Phase::Recall {
            return self;
        }
        self.recall_time_remaining = self.recall_time_remaining.saturating_sub(1);
        if self.recall_time_remaining == 0 {
            self.phase = Phase::GameEnd;
        }
        self
    }

    fn cycle_choice(mut self, forward: bool) -> Self {
        let len = self.available_choices.len();
        self.current_choice_index = match (len, forward) {
            (0, _) => 0,
            (_, true) => (self.current_choice_index + 1) % len,
            (_, false) => {
                if self.current_choice_index == 0 || self.current_choice_index > len {
                    len - 1
                } else {
                    self.current_choice_index - 1
                }
            }
        };
        self.is_paused = false;
        self
    }

    fn select_current_choice(mut self, now_ms: u64) -> Self {
        if self.phase != Phase::Recall {
            return self;
        }
        let (Some(selected), Some(target)) = (self.current_choice(), self.current_target()) else {
            return self;
        };

        let response_time = now_ms.saturating_sub(self.current_element_start_time);
        self.response_times.push(response_time);

        if selected.atomic_number != target.atomic_number {
            self.mistakes += 1;
            if self.mistakes >= self.max_mistakes {
                self.phase = Phase::GameEnd;
            } else {
                self.current_element_start_time = now_ms;
            }
            return self;
        }

        self.correct_placements.push(selected.atomic_number);
        self.available_choices
            .retain(|c| c.atomic_number != selected.atomic_number);
        self.current_element_index += 1;

        match self.current_target() {
            Some(next) => {
                self.current_highlighted_position = Some(next.position);
                if self.current_choice_index >= self.available_choices.len() {
                    self.current_choice_index = 0;
                }
                self.current_element_start_time = now_ms;
            }
            None => {
                self.phase = Phase::GameEnd;
                self.current_highlighted_position = None;
                self.current_choice_index = 0;
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    /// Start a round and run the memorize clock down.
    fn recall_state(rng: &mut StdRng) -> GameState {
        let mut state = GameState::default().reduce(Action::StartGame, rng, 0);
        for second in 1..=5 {
            state = state.reduce(Action::TickTimer, rng, second * 1000);
        }
        assert_eq!(state.phase, Phase::Recall);
        state
    }

    /// Focus the choice matching the current target.
    fn focus_answer(mut state: GameState, rng: &mut StdRng) -> GameState {
        let target = state.current_target().unwrap().atomic_number;
        while state.current_choice().unwrap().atomic_number != target {
            state = state.reduce(Action::NextChoice, rng, 0);
        }
        state
    }

    /// Focus any choice that is not the current target.
    fn focus_wrong(mut state: GameState, rng: &mut StdRng) -> GameState {
        let target = state.current_target().unwrap().atomic_number;
        while state.current_choice().unwrap().atomic_number == target {
            state = state.reduce(Action::NextChoice, rng, 0);
        }
        state
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::default();
        assert_eq!(state.phase, Phase::Menu);
        assert_eq!(state.time_remaining, 5);
        assert_eq!(state.recall_time_remaining, 30);
        assert_eq!(state.max_mistakes, 3);
        assert_eq!(state.target_elements.len(), 5);
        assert!(state.available_choices.is_empty());
        assert!(state.current_highlighted_position.is_none());
    }

    #[test]
    fn test_start_game_enters_memorize_with_same_targets() {
        let mut rng = rng();
        let state = GameState::default().reduce(Action::StartGame, &mut rng, 0);
        assert_eq!(state.phase, Phase::Memorize);
        let mut numbers: Vec<u8> = state.target_elements.iter().map(|e| e.atomic_number).collect();
        numbers.sort_unstable();
        assert_eq!(numbers, vec![5, 11, 12, 19, 20]);
    }

    #[test]
    fn test_start_game_ignored_mid_round() {
        let mut rng = rng();
        let state = GameState::default().reduce(Action::StartGame, &mut rng, 0);
        let ticked = state.reduce(Action::TickTimer, &mut rng, 1000);
        let again = ticked.clone().reduce(Action::StartGame, &mut rng, 1500);
        assert_eq!(again, ticked);
    }

    #[test]
    fn test_how_to_play_and_back() {
        let mut rng = rng();
        let state = GameState::default()
            .reduce(Action::ShowOriginPopup, &mut rng, 0)
            .reduce(Action::ShowHowToPlay, &mut rng, 0);
        assert_eq!(state.phase, Phase::HowToPlay);
        assert!(!state.show_origin_popup);

        let back = state.clone().reduce(Action::BackToMenu, &mut rng, 0);
        assert_eq!(back, GameState::default());

        let started = state.reduce(Action::StartGame, &mut rng, 0);
        assert_eq!(started.phase, Phase::Memorize);
    }

    #[test]
    fn test_last_memorize_tick_enters_recall() {
        let mut rng = rng();
        let mut state = GameState::default().reduce(Action::StartGame, &mut rng, 0);
        state.time_remaining = 1;
        let state = state.reduce(Action::TickTimer, &mut rng, 4200);

        assert_eq!(state.phase, Phase::Recall);
        assert_eq!(state.time_remaining, 0);
        assert_eq!(state.recall_time_remaining, 30);
        assert_eq!(state.current_element_start_time, 4200);
        assert_eq!(
            state.current_highlighted_position,
            Some(state.target_elements[0].position)
        );

        let mut choices: Vec<u8> = state.available_choices.iter().map(|e| e.atomic_number).collect();
        let mut targets: Vec<u8> = state.target_elements.iter().map(|e| e.atomic_number).collect();
        choices.sort_unstable();
        targets.sort_unstable();
        assert_eq!(choices, targets);
    }

    #[test]
    fn test_memorize_tick_counts_down() {
        let mut rng = rng();
        let state = GameState::default()
            .reduce(Action::StartGame, &mut rng, 0)
            .reduce(Action::TickTimer, &mut rng, 1000);
        assert_eq!(state.phase, Phase::Memorize);
        assert_eq!(state.time_remaining, 4);
    }

    #[test]
    fn test_ticks_ignored_while_paused() {
        let mut rng = rng();
        let state = GameState::default()
            .reduce(Action::StartGame, &mut rng, 0)
            .reduce(Action::ShowOriginPopup, &mut rng, 0);
        let ticked = state.clone().reduce(Action::TickTimer, &mut rng, 1000);
        assert_eq!(ticked, state);

        let resumed = ticked
            .reduce(Action::HideOriginPopup, &mut rng, 0)
            .reduce(Action::TickTimer, &mut rng, 1000);
        assert_eq!(resumed.time_remaining, 4);
    }

    #[test]
    fn test_stale_ticks_are_noops() {
        let mut rng = rng();
        let menu = GameState::default();
        assert_eq!(menu.clone().reduce(Action::TickTimer, &mut rng, 0), menu);
        assert_eq!(menu.clone().reduce(Action::TickRecallTimer, &mut rng, 0), menu);

        let recall = recall_state(&mut rng);
        assert_eq!(recall.clone().reduce(Action::TickTimer, &mut rng, 9000), recall);
    }

    #[test]
    fn test_correct_answer_advances() {
        let mut rng = rng();
        let state = focus_answer(recall_state(&mut rng), &mut rng);
        let target = state.current_target().unwrap();
        let state = state.reduce(Action::SelectCurrentChoice, &mut rng, 6500);

        assert_eq!(state.phase, Phase::Recall);
        assert_eq!(state.correct_placements, vec![target.atomic_number]);
        assert_eq!(state.current_element_index, 1);
        assert_eq!(state.response_times, vec![1500]);
        assert_eq!(state.available_choices.len(), 4);
        assert!(state
            .available_choices
            .iter()
            .all(|c| c.atomic_number != target.atomic_number));
        assert_eq!(
            state.current_highlighted_position,
            Some(state.target_elements[1].position)
        );
        assert!(state.current_choice_index < state.available_choices.len());
    }

    #[test]
    fn test_all_correct_ends_game() {
        let mut rng = rng();
        let mut state = recall_state(&mut rng);
        for _ in 0..5 {
            assert_eq!(state.phase, Phase::Recall);
            state = focus_answer(state, &mut rng).reduce(Action::SelectCurrentChoice, &mut rng, 8000);
        }
        assert_eq!(state.phase, Phase::GameEnd);
        assert_eq!(state.correct_placements.len(), 5);
        assert_eq!(state.mistakes, 0);
        assert_eq!(state.current_element_index, 5);
        assert!(state.available_choices.is_empty());
        assert_eq!(state.percent_complete(), 100);
    }

    #[test]
    fn test_wrong_answer_keeps_target() {
        let mut rng = rng();
        let state = focus_wrong(recall_state(&mut rng), &mut rng);
        let highlighted = state.current_highlighted_position;
        let state = state.reduce(Action::SelectCurrentChoice, &mut rng, 7000);

        assert_eq!(state.phase, Phase::Recall);
        assert_eq!(state.mistakes, 1);
        assert_eq!(state.current_element_index, 0);
        assert_eq!(state.current_highlighted_position, highlighted);
        assert_eq!(state.available_choices.len(), 5);
        assert_eq!(state.current_element_start_time, 7000);
        assert_eq!(state.response_times, vec![2000]);
    }

    #[test]
    fn test_three_mistakes_end_game() {
        let mut rng = rng();
        let mut state = recall_state(&mut rng);
        for expected in 1..=3 {
            state = focus_wrong(state, &mut rng).reduce(Action::SelectCurrentChoice, &mut rng, 9000);
            assert_eq!(state.mistakes, expected);
        }
        assert_eq!(state.phase, Phase::GameEnd);

        let after = state.clone().reduce(Action::SelectCurrentChoice, &mut rng, 9500);
        assert_eq!(after, state);
    }

    #[test]
    fn test_recall_clock_runs_out() {
        let mut rng = rng();
        let mut state = recall_state(&mut rng);
        for _ in 0..29 {
            state = state.reduce(Action::TickRecallTimer, &mut rng, 0);
        }
        assert_eq!(state.phase, Phase::Recall);
        assert_eq!(state.recall_time_remaining, 1);
        let state = state.reduce(Action::TickRecallTimer, &mut rng, 0);
        assert_eq!(state.phase, Phase::GameEnd);
        assert_eq!(state.recall_time_remaining, 0);
    }

    #[test]
    fn test_choice_cycling_wraps() {
        let mut rng = rng();
        let mut state = recall_state(&mut rng);
        let len = state.available_choices.len();
        let start = state.current_choice_index;
        for _ in 0..len {
            state = state.reduce(Action::NextChoice, &mut rng, 0);
        }
        assert_eq!(state.current_choice_index, start);

        let state = state.reduce(Action::PreviousChoice, &mut rng, 0);
        assert_eq!(state.current_choice_index, len - 1);
    }

    #[test]
    fn test_choice_cycling_clears_pause() {
        let mut rng = rng();
        let state = recall_state(&mut rng)
            .reduce(Action::ShowOriginPopup, &mut rng, 0)
            .reduce(Action::NextChoice, &mut rng, 0);
        assert!(!state.is_paused);
        assert!(state.show_origin_popup);
    }

    #[test]
    fn test_choice_cycling_with_empty_pool() {
        let mut rng = rng();
        let state = GameState::default()
            .reduce(Action::NextChoice, &mut rng, 0)
            .reduce(Action::PreviousChoice, &mut rng, 0);
        assert_eq!(state.current_choice_index, 0);
    }

    #[test]
    fn test_reset_from_any_phase() {
        let mut rng = rng();
        let recall = focus_wrong(recall_state(&mut rng), &mut rng)
            .reduce(Action::SelectCurrentChoice, &mut rng, 0);
        for state in [GameState::default(), recall] {
            let reset = state.reduce(Action::ResetGame, &mut rng, 0);
            assert_eq!(reset, GameState::default());
            assert!(reset.correct_placements.is_empty());
            assert_eq!(reset.mistakes, 0);
            assert_eq!(reset.time_remaining, 5);
        }
    }

    #[test]
    fn test_empty_pool_goes_straight_to_end() {
        let mut rng = rng();
        let mut state = GameState::new(Rules::default(), Vec::new()).reduce(Action::StartGame, &mut rng, 0);
        for _ in 0..5 {
            state = state.reduce(Action::TickTimer, &mut rng, 0);
        }
        assert_eq!(state.phase, Phase::GameEnd);
        assert_eq!(state.percent_complete(), 0);
        let same = state.clone().reduce(Action::SelectCurrentChoice, &mut rng, 0);
        assert_eq!(same, state);
    }

    #[test]
    fn test_percent_complete_rounds() {
        let mut state = GameState::new(Rules::default(), element::target_pool());
        state.correct_placements = vec![5, 11];
        assert_eq!(state.percent_complete(), 40);

        let mut three = GameState::new(
            Rules::default(),
            vec![element::lookup(1).unwrap(), element::lookup(2).unwrap(), element::lookup(3).unwrap()],
        );
        three.correct_placements = vec![1];
        assert_eq!(three.percent_complete(), 33);
        three.correct_placements = vec![1, 2];
        assert_eq!(three.percent_complete(), 67);
    }
}
