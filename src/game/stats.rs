//! End-of-round statistics.

use serde::Serialize;

use crate::element::Element;
use crate::game::GameState;

/// How the round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Every target was recalled.
    MissionSucceeded,
    /// Out of mistakes or out of time.
    MissionFailed,
}

impl Outcome {
    /// Banner text for the end screen.
    #[must_use]
    pub const fn banner(self) -> &'static str {
        match self {
            Self::MissionSucceeded => "MISSION SUCCEEDED",
            Self::MissionFailed => "MISSION FAILED",
        }
    }
}

/// Whether one target was recalled.
#[derive(Debug, Clone, Serialize)]
pub struct TargetResult {
    /// The target element.
    pub element: &'static Element,
    /// Whether it was recalled correctly.
    pub recalled: bool,
}

/// Summary shown when a round ends.
#[derive(Debug, Clone, Serialize)]
pub struct RoundSummary {
    /// Targets recalled.
    pub correct: usize,
    /// Targets in the round.
    pub total: usize,
    /// Rounded share recalled, 0-100.
    pub percentage: u32,
    /// Mean answer time in seconds (0 when no answers were given).
    pub average_response_secs: f64,
    /// Wrong answers given.
    pub mistakes: u32,
    /// Success or failure.
    pub outcome: Outcome,
    /// Per-target results in recall order.
    pub targets: Vec<TargetResult>,
}

impl RoundSummary {
    /// Summarize a state. Meaningful once the phase is `GameEnd`, but safe
    /// to call at any point.
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        let percentage = state.percent_complete();
        let average_response_secs = if state.response_times.is_empty() {
            0.0
        } else {
            let total_ms: u64 = state.response_times.iter().sum();
            #[allow(clippy::cast_precision_loss)]
            let mean = total_ms as f64 / state.response_times.len() as f64;
            mean / 1000.0
        };
        let outcome = if percentage == 100 {
            Outcome::MissionSucceeded
        } else {
            Outcome::MissionFailed
        };

        Self {
            correct: state.correct_placements.len(),
            total: state.target_elements.len(),
            percentage,
            average_response_secs,
            mistakes: state.mistakes,
            outcome,
            targets: state
                .target_elements
                .iter()
                .map(|&element| TargetResult {
                    element,
                    recalled: state.is_recalled(element.atomic_number),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state_summary() {
        let summary = RoundSummary::from_state(&GameState::default());
        assert_eq!(summary.correct, 0);
        assert_eq!(summary.total, 5);
        assert_eq!(summary.percentage, 0);
        assert!(summary.average_response_secs.abs() < f64::EPSILON);
        assert_eq!(summary.outcome, Outcome::MissionFailed);
        assert!(summary.targets.iter().all(|t| !t.recalled));
    }

    #[test]
    fn test_partial_summary() {
        let mut state = GameState::default();
        state.correct_placements = vec![11, 12];
        state.response_times = vec![1000, 2000, 4000];
        state.mistakes = 1;

        let summary = RoundSummary::from_state(&state);
        assert_eq!(summary.percentage, 40);
        assert!((summary.average_response_secs - 7.0 / 3.0).abs() < 1e-9);
        assert_eq!(summary.mistakes, 1);
        let recalled: Vec<&str> = summary
            .targets
            .iter()
            .filter(|t| t.recalled)
            .map(|t| t.element.symbol)
            .collect();
        assert_eq!(recalled, vec!["Na", "Mg"]);
    }

    #[test]
    fn test_full_recall_succeeds() {
        let mut state = GameState::default();
        state.correct_placements = state.target_elements.iter().map(|e| e.atomic_number).collect();
        let summary = RoundSummary::from_state(&state);
        assert_eq!(summary.outcome, Outcome::MissionSucceeded);
        assert_eq!(summary.outcome.banner(), "MISSION SUCCEEDED");
    }

    #[test]
    fn test_empty_round_does_not_divide_by_zero() {
        let state = GameState::new(crate::config::Rules::default(), Vec::new());
        let summary = RoundSummary::from_state(&state);
        assert_eq!(summary.percentage, 0);
        assert_eq!(summary.total, 0);
    }
}
