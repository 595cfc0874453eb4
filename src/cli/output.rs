//! Output formatting utilities for CLI.

use periodic_recall::game::{Outcome, RoundSummary};
use periodic_recall::simulate::RoundResult;
use periodic_recall::Transition;
use serde::Serialize;
use std::fmt::Write as _;

/// Simulation statistics aggregated over many rounds.
#[derive(Debug, Default, Clone)]
pub(super) struct SimStats {
    /// Total rounds played.
    pub(super) rounds_played: u64,
    /// Rounds where every target was recalled.
    pub(super) wins: u64,
    /// Rounds lost to the mistake cap.
    pub(super) out_of_mistakes: u64,
    /// Rounds lost to the recall clock.
    pub(super) timeouts: u64,
    /// Histogram of targets recalled, indexed by count.
    pub(super) correct_histogram: Vec<u64>,
    /// Sum of completion percentages.
    total_percentage: u64,
    /// Sum of mistakes.
    total_mistakes: u64,
    /// Sum of mean response times, seconds.
    total_response_secs: f64,
    /// Sum of round durations, ms.
    total_elapsed_ms: u64,
}

impl SimStats {
    /// Fold in one round.
    pub(super) fn add_result(&mut self, result: &RoundResult) {
        let summary = &result.summary;
        self.rounds_played += 1;
        match summary.outcome {
            Outcome::MissionSucceeded => self.wins += 1,
            Outcome::MissionFailed if result.timed_out => self.timeouts += 1,
            Outcome::MissionFailed => self.out_of_mistakes += 1,
        }
        if self.correct_histogram.len() <= summary.correct {
            self.correct_histogram.resize(summary.correct + 1, 0);
        }
        self.correct_histogram[summary.correct] += 1;
        self.total_percentage += u64::from(summary.percentage);
        self.total_mistakes += u64::from(summary.mistakes);
        self.total_response_secs += summary.average_response_secs;
        self.total_elapsed_ms += result.elapsed_ms;
    }

    /// Merge another thread's stats into this one.
    pub(super) fn merge(&mut self, other: &Self) {
        self.rounds_played += other.rounds_played;
        self.wins += other.wins;
        self.out_of_mistakes += other.out_of_mistakes;
        self.timeouts += other.timeouts;
        if self.correct_histogram.len() < other.correct_histogram.len() {
            self.correct_histogram.resize(other.correct_histogram.len(), 0);
        }
        for (slot, count) in self.correct_histogram.iter_mut().zip(&other.correct_histogram) {
            *slot += count;
        }
        self.total_percentage += other.total_percentage;
        self.total_mistakes += other.total_mistakes;
        self.total_response_secs += other.total_response_secs;
        self.total_elapsed_ms += other.total_elapsed_ms;
    }

    #[allow(clippy::cast_precision_loss)]
    fn mean(&self, total: f64) -> f64 {
        if self.rounds_played == 0 {
            0.0
        } else {
            total / self.rounds_played as f64
        }
    }

    /// Share of rounds won, 0-100.
    #[allow(clippy::cast_precision_loss)]
    pub(super) fn win_rate(&self) -> f64 {
        self.mean(self.wins as f64 * 100.0)
    }

    /// Mean completion percentage.
    #[allow(clippy::cast_precision_loss)]
    pub(super) fn mean_percentage(&self) -> f64 {
        self.mean(self.total_percentage as f64)
    }

    /// Mean mistakes per round.
    #[allow(clippy::cast_precision_loss)]
    pub(super) fn mean_mistakes(&self) -> f64 {
        self.mean(self.total_mistakes as f64)
    }

    /// Mean of per-round mean response times, seconds.
    pub(super) fn mean_response_secs(&self) -> f64 {
        self.mean(self.total_response_secs)
    }

    /// Mean round duration, seconds.
    #[allow(clippy::cast_precision_loss)]
    pub(super) fn mean_round_secs(&self) -> f64 {
        self.mean(self.total_elapsed_ms as f64 / 1000.0)
    }
}

/// Format simulation stats as human-readable text.
pub(super) fn format_simulation_text(stats: &SimStats, strategy: &str) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "Simulation Results ({} rounds, {strategy} player)", stats.rounds_played);
    let _ = writeln!(output, "  Won:               {:>8} ({:.1}%)", stats.wins, stats.win_rate());
    let _ = writeln!(output, "  Out of mistakes:   {:>8}", stats.out_of_mistakes);
    let _ = writeln!(output, "  Out of time:       {:>8}", stats.timeouts);
    let _ = writeln!(output, "  Mean completion:   {:>7.1}%", stats.mean_percentage());
    let _ = writeln!(output, "  Mean mistakes:     {:>8.2}", stats.mean_mistakes());
    let _ = writeln!(output, "  Mean answer time:  {:>7.2}s", stats.mean_response_secs());
    let _ = writeln!(output, "  Mean round length: {:>7.1}s", stats.mean_round_secs());
    output.push('\n');
    output.push_str("  Targets recalled:\n");
    for (correct, count) in stats.correct_histogram.iter().enumerate() {
        let _ = writeln!(output, "    {correct}: {count}");
    }

    output
}

/// Format simulation stats as CSV.
pub(super) fn format_simulation_csv(stats: &SimStats) -> String {
    let mut output = String::from(
        "rounds,wins,out_of_mistakes,timeouts,win_rate,mean_percentage,mean_mistakes,mean_response_secs\n",
    );
    let _ = writeln!(
        output,
        "{},{},{},{},{:.2},{:.2},{:.3},{:.3}",
        stats.rounds_played,
        stats.wins,
        stats.out_of_mistakes,
        stats.timeouts,
        stats.win_rate(),
        stats.mean_percentage(),
        stats.mean_mistakes(),
        stats.mean_response_secs()
    );
    output
}

/// JSON-serializable simulation result.
#[derive(Debug, Serialize)]
pub(super) struct JsonSimulationResult {
    /// Rounds played.
    pub(super) rounds: u64,
    /// Player strategy.
    pub(super) strategy: String,
    /// Rounds won.
    pub(super) wins: u64,
    /// Rounds lost to the mistake cap.
    pub(super) out_of_mistakes: u64,
    /// Rounds lost to the clock.
    pub(super) timeouts: u64,
    /// Win rate, 0-100.
    pub(super) win_rate: f64,
    /// Mean completion percentage.
    pub(super) mean_percentage: f64,
    /// Mean mistakes per round.
    pub(super) mean_mistakes: f64,
    /// Mean answer time, seconds.
    pub(super) mean_response_secs: f64,
    /// Rounds by number of targets recalled.
    pub(super) correct_histogram: Vec<u64>,
    /// Wall-clock duration of the run, seconds.
    pub(super) duration_secs: f64,
}

impl JsonSimulationResult {
    /// Create from aggregated stats.
    pub(super) fn from_stats(stats: &SimStats, strategy: &str, duration_secs: f64) -> Self {
        Self {
            rounds: stats.rounds_played,
            strategy: strategy.to_string(),
            wins: stats.wins,
            out_of_mistakes: stats.out_of_mistakes,
            timeouts: stats.timeouts,
            win_rate: stats.win_rate(),
            mean_percentage: stats.mean_percentage(),
            mean_mistakes: stats.mean_mistakes(),
            mean_response_secs: stats.mean_response_secs(),
            correct_histogram: stats.correct_histogram.clone(),
            duration_secs,
        }
    }
}

/// Format a round summary as human-readable text.
pub(super) fn format_summary(summary: &RoundSummary) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "{}", summary.outcome.banner());
    let _ = writeln!(
        output,
        "  Recalled: {}/{} ({}%)",
        summary.correct, summary.total, summary.percentage
    );
    let _ = writeln!(output, "  Mistakes: {}", summary.mistakes);
    let _ = writeln!(output, "  Average response: {:.1}s", summary.average_response_secs);
    for target in &summary.targets {
        let mark = if target.recalled { "+" } else { "-" };
        let _ = writeln!(output, "    [{mark}] {}", target.element);
    }

    output
}

/// Format one transition as a single line.
pub(super) fn format_transition(transition: &Transition) -> String {
    let mut line = format!("{:>8}ms  {:<22}", transition.at_ms, transition.action.name());
    if !transition.changed {
        line.push_str("(ignored)");
    } else if transition.from == transition.to {
        let _ = write!(line, "{}", transition.to);
    } else {
        let _ = write!(line, "{} -> {}", transition.from, transition.to);
    }
    if !transition.cues.is_empty() {
        let cues: Vec<String> = transition.cues.iter().map(ToString::to_string).collect();
        let _ = write!(line, "  [{}]", cues.join(", "));
    }
    line
}

/// JSON-serializable transition.
#[derive(Debug, Serialize)]
pub(super) struct JsonTransition {
    /// Action name.
    pub(super) action: &'static str,
    /// Phase before.
    pub(super) from: String,
    /// Phase after.
    pub(super) to: String,
    /// Session time, ms.
    pub(super) at_ms: u64,
    /// Whether the state changed.
    pub(super) changed: bool,
    /// Feedback emitted.
    pub(super) cues: Vec<String>,
}

impl JsonTransition {
    /// Create from a session transition.
    pub(super) fn from_transition(transition: &Transition) -> Self {
        Self {
            action: transition.action.name(),
            from: transition.from.to_string(),
            to: transition.to.to_string(),
            at_ms: transition.at_ms,
            changed: transition.changed,
            cues: transition.cues.iter().map(ToString::to_string).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use periodic_recall::element::target_pool;
    use periodic_recall::simulate::{run_round, SimulatedPlayer};
    use periodic_recall::Rules;

    #[test]
    fn test_merge_matches_sequential() {
        let player = SimulatedPlayer::default();
        let results: Vec<RoundResult> =
            (0..6).map(|seed| run_round(seed, &player, Rules::default(), target_pool())).collect();

        let mut all = SimStats::default();
        for r in &results {
            all.add_result(r);
        }

        let mut left = SimStats::default();
        let mut right = SimStats::default();
        for r in &results[..2] {
            left.add_result(r);
        }
        for r in &results[2..] {
            right.add_result(r);
        }
        left.merge(&right);

        assert_eq!(left.rounds_played, all.rounds_played);
        assert_eq!(left.wins, all.wins);
        assert_eq!(left.correct_histogram, all.correct_histogram);
        assert!((left.mean_percentage() - all.mean_percentage()).abs() < 1e-9);
    }

    #[test]
    fn test_empty_stats_format() {
        let stats = SimStats::default();
        let text = format_simulation_text(&stats, "perfect");
        assert!(text.contains("0 rounds"));
        assert!(format_simulation_csv(&stats).lines().count() == 2);
    }
}
