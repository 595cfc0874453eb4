//! Replay command implementation.

use super::output::{format_summary, format_transition, JsonTransition};
use super::{CliError, ReplayFormat};
use periodic_recall::game::{check_invariants, RoundSummary};
use periodic_recall::script::{parse_script, run_script};
use periodic_recall::GameConfig;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// JSON-serializable replay output.
#[derive(Debug, Serialize)]
struct JsonReplay {
    seed: u64,
    transitions: Vec<JsonTransition>,
    final_phase: String,
    summary: RoundSummary,
}

/// Execute the replay command.
///
/// # Errors
///
/// Returns an error if the script cannot be read or parsed, or the final
/// state breaks a game invariant.
pub(crate) fn execute(config: &GameConfig, script: &Path, seed: u64, format: ReplayFormat) -> Result<(), CliError> {
    let text = fs::read_to_string(script).map_err(|e| CliError::file(script, e))?;
    let steps = parse_script(&text)?;
    let pool = config.rules.resolve_pool()?;

    tracing::info!(steps = steps.len(), seed, "replaying script");
    let run = run_script(&steps, seed, config.rules.rules(), pool);

    let violations = check_invariants(&run.final_state);
    if let Some(first) = violations.first() {
        return Err(CliError::Invariant(first.message.clone()));
    }

    let summary = RoundSummary::from_state(&run.final_state);
    match format {
        ReplayFormat::Text => {
            for transition in &run.transitions {
                println!("{}", format_transition(transition));
            }
            println!();
            println!("Final phase: {}", run.final_state.phase);
            print!("{}", format_summary(&summary));
        }
        ReplayFormat::Json => {
            let replay = JsonReplay {
                seed,
                transitions: run.transitions.iter().map(JsonTransition::from_transition).collect(),
                final_phase: run.final_state.phase.to_string(),
                summary,
            };
            println!("{}", serde_json::to_string_pretty(&replay)?);
        }
    }

    Ok(())
}
