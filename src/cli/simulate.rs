//! Simulate command implementation.

use super::output::{format_simulation_csv, format_simulation_text, JsonSimulationResult, SimStats};
use super::{seed_or_random, CliError, SimulateFormat, StrategyArg};
use indicatif::{ProgressBar, ProgressStyle};
use periodic_recall::simulate::{run_round, SimulatedPlayer};
use periodic_recall::GameConfig;
use rayon::prelude::*;
use std::time::Instant;

/// Execute the simulate command.
///
/// # Errors
///
/// Returns an error if the configured target pool is invalid or the output
/// cannot be serialized.
#[allow(clippy::too_many_arguments)]
pub(crate) fn execute(
    config: &GameConfig,
    rounds: u64,
    seed: Option<u64>,
    strategy: StrategyArg,
    accuracy: f64,
    threads: Option<usize>,
    format: SimulateFormat,
    progress: bool,
) -> Result<(), CliError> {
    if !(0.0..=1.0).contains(&accuracy) {
        return Err(CliError::Accuracy(accuracy));
    }

    let rules = config.rules.rules();
    let pool = config.rules.resolve_pool()?;
    let player = SimulatedPlayer {
        strategy: strategy.into(),
        accuracy,
        ..SimulatedPlayer::default()
    };
    let strategy_name = format!("{strategy:?}").to_lowercase();

    // Set thread pool size if specified
    if let Some(num_threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .ok(); // Ignore error if already initialized
    }

    let base_seed = seed_or_random(seed);
    tracing::info!(rounds, base_seed, strategy = %strategy_name, "starting simulation");

    // Progress bar
    let pb = if progress {
        let pb = ProgressBar::new(rounds);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} rounds ({per_sec})")?
            .progress_chars("=>-");
        pb.set_style(style);
        Some(pb)
    } else {
        None
    };

    let start = Instant::now();

    // Each thread folds into its own stats; merged once at the end
    let stats = (0..rounds)
        .into_par_iter()
        .fold(SimStats::default, |mut local, i| {
            let result = run_round(base_seed.wrapping_add(i), &player, rules, pool.clone());
            local.add_result(&result);
            local
        })
        .reduce(SimStats::default, |mut a, b| {
            a.merge(&b);
            a
        });

    if let Some(pb) = pb {
        pb.set_position(stats.rounds_played);
        pb.finish_with_message("done");
    }

    let duration = start.elapsed();
    #[allow(clippy::cast_precision_loss)]
    let rounds_per_sec = if duration.as_secs_f64() > 0.0 {
        stats.rounds_played as f64 / duration.as_secs_f64()
    } else {
        0.0
    };

    match format {
        SimulateFormat::Text => {
            println!();
            print!("{}", format_simulation_text(&stats, &strategy_name));
            println!();
            println!("Duration: {:.2}s ({rounds_per_sec:.0} rounds/sec)", duration.as_secs_f64());
        }
        SimulateFormat::Json => {
            let json_result = JsonSimulationResult::from_stats(&stats, &strategy_name, duration.as_secs_f64());
            println!("{}", serde_json::to_string_pretty(&json_result)?);
        }
        SimulateFormat::Csv => {
            print!("{}", format_simulation_csv(&stats));
        }
    }

    Ok(())
}
