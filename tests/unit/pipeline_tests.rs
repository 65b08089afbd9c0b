/*!
 * Pipeline invariant tests: length agreement, decay bounds, alert necessity,
 * and configuration substitution.
 */

use scriptpulse::engine_config::EngineConfig;
use scriptpulse::pipeline::analyze_script;
use scriptpulse::preprocess::preprocess_lines;
use scriptpulse::temporal::WindowSample;

use crate::common::{small_valid_script, strained_script};

#[test]
fn test_preprocess_lines_withPipelineInput_shouldBeIdempotent() {
    let lines = strained_script();
    let once = preprocess_lines(&lines);
    assert_eq!(preprocess_lines(&once), once);
}

#[test]
fn test_analyze_script_withValidScript_shouldAlignAllSequenceLengths() {
    let config = EngineConfig::default();
    let analysis = analyze_script(&strained_script(), &config).unwrap();

    let n = analysis.scene_count;
    assert_eq!(analysis.scene_headers.len(), n);
    assert_eq!(analysis.features.len(), n);
    assert_eq!(analysis.normalized.len(), n);
    assert_eq!(analysis.effort.len(), n);
    assert_eq!(analysis.signals.decayed.len(), n);
    assert_eq!(analysis.signals.window_short.len(), n);
    assert_eq!(analysis.signals.window_medium.len(), n);
    assert_eq!(analysis.signals.window_long.len(), n);
    assert_eq!(analysis.probabilities.len(), n);
    assert_eq!(analysis.alerts.len(), n);
}

#[test]
fn test_analyze_script_withValidScript_shouldBoundDecayedBelowByEffortMinusRho() {
    let config = EngineConfig::default();
    let analysis = analyze_script(&strained_script(), &config).unwrap();
    for (i, &effort) in analysis.effort.iter().enumerate() {
        assert!(analysis.signals.decayed[i] >= effort - config.decay.rho);
    }
}

#[test]
fn test_analyze_script_withAnyAlert_shouldSatisfyNecessaryConditions() {
    let config = EngineConfig::default();
    let analysis = analyze_script(&strained_script(), &config).unwrap();

    let above = |sample: &WindowSample, threshold: f64| {
        matches!(sample, WindowSample::Observed(v) if *v > threshold)
    };

    for (i, &alerted) in analysis.alerts.iter().enumerate() {
        if alerted {
            assert!(analysis.probabilities[i] > config.decision.probability);
            assert!(above(&analysis.signals.window_short[i], config.decision.window_short));
            assert!(above(&analysis.signals.window_medium[i], config.decision.window_medium));
            assert!(above(&analysis.signals.window_long[i], config.decision.window_long));
        }
    }
}

#[test]
fn test_analyze_script_withShortScript_shouldLeaveEarlyWindowsAbsent() {
    let config = EngineConfig::default();
    let analysis = analyze_script(&small_valid_script(), &config).unwrap();

    // Two scenes: every window is wider than the script, so nothing can alert
    assert_eq!(analysis.scene_count, 2);
    assert!(analysis.signals.window_short.iter().all(|s| *s == WindowSample::Absent));
    assert!(analysis.alerts.iter().all(|&a| !a));
    assert!(analysis.messages.is_empty());
}

#[test]
fn test_analyze_script_withUnreachableThresholds_shouldSuppressAllAlerts() {
    let mut config = EngineConfig::default();
    config.decision.probability = 1.1;
    let analysis = analyze_script(&strained_script(), &config).unwrap();
    assert!(analysis.messages.is_empty());
}

#[test]
fn test_analyze_script_withZeroedCalibration_shouldHalveAllProbabilities() {
    let mut config = EngineConfig::default();
    config.calibration.weight = 0.0;
    let analysis = analyze_script(&strained_script(), &config).unwrap();
    for &p in &analysis.probabilities {
        assert!((p - 0.5).abs() < 1e-12);
    }
}

#[test]
fn test_analyze_script_withValidScript_shouldRoundTripThroughJson() {
    let config = EngineConfig::default();
    let analysis = analyze_script(&strained_script(), &config).unwrap();
    let json = serde_json::to_string(&analysis).unwrap();
    let back: scriptpulse::ScriptAnalysis = serde_json::from_str(&json).unwrap();
    assert_eq!(back, analysis);
}
