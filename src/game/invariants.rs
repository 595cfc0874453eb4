//! Game invariants - sanity checks that detect reducer bugs.
//!
//! These should never trigger for a state produced by [`GameState::reduce`]
//! from the canonical menu state. Tests and the fuzzer run them after every
//! action.

use std::collections::HashSet;

use crate::game::{GameState, Phase};

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all game invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(state: &GameState) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let mut fail = |message: String| violations.push(InvariantViolation { message });

    let total = state.target_elements.len();

    if state.current_element_index > total {
        fail(format!(
            "current_element_index {} exceeds {total} targets",
            state.current_element_index
        ));
    }
    if total > 0 && state.current_element_index == total && state.phase.is_round_active() {
        fail(format!("all targets solved but phase is {}", state.phase));
    }

    if state.mistakes > state.max_mistakes {
        fail(format!(
            "mistakes {} exceed cap {}",
            state.mistakes, state.max_mistakes
        ));
    }
    if state.mistakes >= state.max_mistakes && state.phase == Phase::Recall {
        fail(format!("{} mistakes but still recalling", state.mistakes));
    }

    if state.correct_placements.len() != state.current_element_index {
        fail(format!(
            "{} correct placements but current_element_index is {}",
            state.correct_placements.len(),
            state.current_element_index
        ));
    }
    let unique: HashSet<u8> = state.correct_placements.iter().copied().collect();
    if unique.len() != state.correct_placements.len() {
        fail("correct_placements contains duplicates".to_string());
    }
    for (i, &number) in state.correct_placements.iter().enumerate() {
        let expected = state.target_elements.get(i).map(|e| e.atomic_number);
        if expected != Some(number) {
            fail(format!(
                "placement {i} is element {number}, expected {expected:?}"
            ));
        }
    }

    if state.time_remaining > state.rules.memorize_secs {
        fail(format!(
            "time_remaining {} exceeds {}",
            state.time_remaining, state.rules.memorize_secs
        ));
    }
    if state.recall_time_remaining > state.rules.recall_secs {
        fail(format!(
            "recall_time_remaining {} exceeds {}",
            state.recall_time_remaining, state.rules.recall_secs
        ));
    }

    if state.phase == Phase::Recall {
        let mut expected: Vec<u8> = state.target_elements[state.current_element_index.min(total)..]
            .iter()
            .map(|e| e.atomic_number)
            .collect();
        let mut offered: Vec<u8> = state.available_choices.iter().map(|e| e.atomic_number).collect();
        expected.sort_unstable();
        offered.sort_unstable();
        if expected != offered {
            fail(format!(
                "choices {offered:?} do not match unsolved targets {expected:?}"
            ));
        }

        if state.current_choice_index >= state.available_choices.len() {
            fail(format!(
                "current_choice_index {} out of {} choices",
                state.current_choice_index,
                state.available_choices.len()
            ));
        }

        let target_position = state.current_target().map(|e| e.position);
        if state.current_highlighted_position != target_position {
            fail(format!(
                "highlight {:?} does not match current target {target_position:?}",
                state.current_highlighted_position
            ));
        }
    }

    violations
}
