/*!
 * End-to-end analysis workflow tests: full scripts in, alert messages out.
 */

use scriptpulse::errors::{ScriptError, ValidationError};
use scriptpulse::run_pipeline;

use crate::common::{script_lines, small_valid_script, strained_script};

#[test]
fn test_run_pipeline_withCalmScript_shouldProduceNoMessages() {
    let messages = run_pipeline(&small_valid_script()).unwrap();
    assert!(messages.is_empty());
}

#[test]
fn test_run_pipeline_withStrainedScript_shouldFlagLateScenes() {
    // Ten identical dense scenes after a light opener: the long window first
    // fits at index 8, and pressure never recovers afterwards
    let messages = run_pipeline(&strained_script()).unwrap();
    assert_eq!(
        messages,
        vec![
            "Structural strain detected in scene 8.",
            "Structural strain detected in scene 9.",
            "Structural strain detected in scene 10.",
        ]
    );
}

#[test]
fn test_run_pipeline_withStrainedScript_shouldEmitParseableMessages() {
    // The message template is a stable contract: consumers recover the index
    // by splitting on the literal prefix and parsing the trailing integer
    let messages = run_pipeline(&strained_script()).unwrap();
    let mut indices = Vec::new();
    for message in &messages {
        let rest = message
            .strip_prefix("Structural strain detected in scene ")
            .and_then(|r| r.strip_suffix('.'))
            .expect("message must match the fixed template");
        indices.push(rest.parse::<usize>().unwrap());
    }
    assert!(indices.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_run_pipeline_withInvalidScript_shouldSurfaceValidationError() {
    let lines = script_lines("BOB\nINT. KITCHEN - DAY");
    let err = run_pipeline(&lines).unwrap_err();
    assert_eq!(err, ScriptError::Validation(ValidationError::SpeakerBeforeHeader));
}

#[test]
fn test_run_pipeline_withMessyWhitespace_shouldMatchCleanScript() {
    // Preprocessing folds tabs and runs of spaces, so a sloppily formatted
    // copy of the script analyzes identically. Headers stay untouched: the
    // validator sees raw lines, and its header test anchors at line start
    let clean = strained_script();
    let messy: Vec<String> = clean
        .iter()
        .map(|line| {
            if line.starts_with("INT.") || line.starts_with("EXT.") {
                line.clone()
            } else {
                format!("\t{} ", line.replace(' ', "  "))
            }
        })
        .collect();
    assert_eq!(run_pipeline(&messy).unwrap(), run_pipeline(&clean).unwrap());
}
