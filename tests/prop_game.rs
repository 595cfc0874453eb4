//! Property-based tests for the game reducer.
//!
//! These run arbitrary action sequences from the menu and check that the
//! reducer always leaves a consistent state.
//! Run with: cargo test --release prop_game

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use periodic_recall::element::target_pool;
use periodic_recall::game::check_invariants;
use periodic_recall::simulate::{run_round, SimulatedPlayer, Strategy as PlayerStrategy};
use periodic_recall::{Action, GameState, Phase, Rules};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn any_action() -> impl Strategy<Value = Action> {
    prop::sample::select(Action::ALL.to_vec())
}

/// Actions a player can take, weighted toward the recall loop.
fn play_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => Just(Action::NextChoice),
        1 => Just(Action::PreviousChoice),
        3 => Just(Action::SelectCurrentChoice),
        4 => Just(Action::TickTimer),
        1 => Just(Action::TickRecallTimer),
        1 => Just(Action::ShowOriginPopup),
        1 => Just(Action::HideOriginPopup),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    /// Invariants hold after every action of any sequence.
    #[test]
    fn prop_invariants_hold(
        seed in any::<u64>(),
        actions in prop::collection::vec(any_action(), 0..200)
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = GameState::default();
        for (i, action) in actions.into_iter().enumerate() {
            state = state.reduce(action, &mut rng, i as u64 * 250);
            let violations = check_invariants(&state);
            prop_assert!(violations.is_empty(), "after {action}: {violations:?}");
        }
    }

    /// A started round with play actions only never exceeds its caps, and
    /// ends once targets or mistakes run out.
    #[test]
    fn prop_round_bounded(
        seed in any::<u64>(),
        actions in prop::collection::vec(play_action(), 0..300)
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = GameState::default().reduce(Action::StartGame, &mut rng, 0);
        for (i, action) in actions.into_iter().enumerate() {
            state = state.reduce(action, &mut rng, i as u64 * 100);
            prop_assert!(state.correct_placements.len() <= state.target_elements.len());
            prop_assert!(state.mistakes <= state.max_mistakes);
            if state.correct_placements.len() == state.target_elements.len()
                || state.mistakes == state.max_mistakes
            {
                prop_assert_eq!(state.phase, Phase::GameEnd);
            }
        }
    }

    /// RESET_GAME from anywhere yields the canonical menu state.
    #[test]
    fn prop_reset_is_canonical(
        seed in any::<u64>(),
        actions in prop::collection::vec(any_action(), 0..100)
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = GameState::default();
        for action in actions {
            state = state.reduce(action, &mut rng, 0);
        }
        let reset = state.reduce(Action::ResetGame, &mut rng, 0);
        prop_assert_eq!(&reset, &GameState::default());
        let again = reset.clone().reduce(Action::ResetGame, &mut rng, 0);
        prop_assert_eq!(again, reset);
    }

    /// Cycling a full lap in either direction returns to the same choice.
    #[test]
    fn prop_choice_cycle_wraps(seed in any::<u64>(), offset in 0usize..10, forward in any::<bool>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = GameState::default().reduce(Action::StartGame, &mut rng, 0);
        while state.phase == Phase::Memorize {
            state = state.reduce(Action::TickTimer, &mut rng, 0);
        }
        for _ in 0..offset {
            state = state.reduce(Action::NextChoice, &mut rng, 0);
        }
        let start = state.current_choice_index;
        let step = if forward { Action::NextChoice } else { Action::PreviousChoice };
        for _ in 0..state.available_choices.len() {
            state = state.reduce(step, &mut rng, 0);
        }
        prop_assert_eq!(state.current_choice_index, start);
    }

    /// Same seed, same targets: shuffles depend only on the injected RNG.
    #[test]
    fn prop_seeded_shuffle_is_deterministic(seed in any::<u64>()) {
        let a = GameState::default().reduce(Action::StartGame, &mut StdRng::seed_from_u64(seed), 0);
        let b = GameState::default().reduce(Action::StartGame, &mut StdRng::seed_from_u64(seed), 0);
        prop_assert_eq!(a.target_elements, b.target_elements);
    }

    /// Simulated rounds always reach the end screen within the caps.
    #[test]
    fn prop_simulated_rounds_terminate(seed in any::<u64>(), accuracy in 0.0f64..=1.0) {
        let player = SimulatedPlayer {
            strategy: PlayerStrategy::Forgetful,
            accuracy,
            ..SimulatedPlayer::default()
        };
        let result = run_round(seed, &player, Rules::default(), target_pool());
        prop_assert!(result.summary.correct <= 5);
        prop_assert!(result.summary.mistakes <= 3);
        prop_assert!(result.summary.percentage <= 100);
    }
}
