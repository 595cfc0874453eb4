#![no_main]

//! Script parser fuzzer.
//!
//! Arbitrary text must either parse into steps or fail with a
//! `ScriptError`; parsed scripts must run without panicking.

use libfuzzer_sys::fuzz_target;
use periodic_recall::element::target_pool;
use periodic_recall::game::check_invariants;
use periodic_recall::script::{parse_script, run_script};
use periodic_recall::Rules;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(steps) = parse_script(text) else {
        return;
    };

    let run = run_script(&steps, 0, Rules::default(), target_pool());
    assert_eq!(run.transitions.len(), steps.len());
    assert!(check_invariants(&run.final_state).is_empty());
});
