#![no_main]

//! Reducer fuzzer.
//!
//! Feeds arbitrary action sequences, with arbitrary timestamps and rule
//! sets, through the reducer and checks the game invariants after every
//! step. Any panic or violation is a bug.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use periodic_recall::game::check_invariants;
use periodic_recall::{Action, GameState, Rules, PERIODIC_TABLE};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Structured input for reducer fuzzing.
#[derive(Arbitrary, Debug)]
struct ReducerInput {
    /// RNG seed for shuffles.
    rng_seed: u64,
    /// Memorize seconds (0 is mapped to 1).
    memorize_secs: u8,
    /// Recall seconds (0 is mapped to 1).
    recall_secs: u8,
    /// Mistake cap (0 is mapped to 1).
    max_mistakes: u8,
    /// Target pool as indices into the table.
    pool: Vec<u8>,
    /// Action indices and time steps.
    steps: Vec<(u8, u16)>,
}

fuzz_target!(|input: ReducerInput| {
    let rules = Rules {
        memorize_secs: u32::from(input.memorize_secs.max(1)),
        recall_secs: u32::from(input.recall_secs.max(1)),
        max_mistakes: u32::from(input.max_mistakes.max(1)),
        tick_interval_ms: 1000,
    };

    let mut pool = Vec::new();
    for index in input.pool.iter().take(16) {
        let element = &PERIODIC_TABLE[usize::from(*index) % PERIODIC_TABLE.len()];
        if !pool.iter().any(|e: &&periodic_recall::Element| e.atomic_number == element.atomic_number) {
            pool.push(element);
        }
    }

    let mut rng = StdRng::seed_from_u64(input.rng_seed);
    let mut state = GameState::new(rules, pool);
    let mut now = 0u64;

    for (action, delta) in input.steps.into_iter().take(512) {
        let action = Action::ALL[usize::from(action) % Action::ALL.len()];
        now += u64::from(delta);
        state = state.reduce(action, &mut rng, now);

        let violations = check_invariants(&state);
        assert!(violations.is_empty(), "after {action}: {violations:?}");
    }
});
