/*!
 * Tests for feature normalization and effort scoring
 */

use scriptpulse::engine_config::EngineConfig;
use scriptpulse::features::extract_scene_features;
use scriptpulse::scoring::{NormFeature, compute_effort, normalize_features};
use scriptpulse::segmenter::segment_scenes;

use crate::common::{script_lines, strained_script};

#[test]
fn test_normalize_features_withRealScript_shouldStayWithinBounds() {
    let scenes = segment_scenes(&strained_script()).unwrap();
    let normalized = normalize_features(&extract_scene_features(&scenes));

    for &key in &NormFeature::ALL {
        let values: Vec<f64> = normalized.iter().map(|scene| scene[&key]).collect();
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(min, 0.0, "minimum for {key:?} must be exactly 0.0");
        assert!(max <= 1.0, "maximum for {key:?} must not exceed 1.0");
    }
}

#[test]
fn test_normalize_features_withDistinctScenes_shouldApproachOneAtMax() {
    let lines = script_lines(
        "INT. VOID - DAY\n\
         INT. WAR ROOM - NIGHT\n\
         BOB\n\
         We cannot hold the line any longer and you know it.",
    );
    let scenes = segment_scenes(&lines).unwrap();
    let normalized = normalize_features(&extract_scene_features(&scenes));

    // With min != max, the epsilon keeps the top just below 1.0
    let top = normalized[1][&NormFeature::AuditoryLoad];
    assert!(top > 0.999 && top <= 1.0);
    assert_eq!(normalized[0][&NormFeature::AuditoryLoad], 0.0);
}

#[test]
fn test_compute_effort_withRealScript_shouldMatchManualSum() {
    let config = EngineConfig::default();
    let scenes = segment_scenes(&strained_script()).unwrap();
    let normalized = normalize_features(&extract_scene_features(&scenes));
    let effort = compute_effort(&normalized, &config).unwrap();

    assert_eq!(effort.len(), normalized.len());
    for (scene, &score) in normalized.iter().zip(effort.iter()) {
        let manual: f64 = NormFeature::ALL.iter().map(|k| scene[k]).sum();
        assert!((score - manual).abs() < 1e-12);
    }
}

#[test]
fn test_compute_effort_withHeavyScenes_shouldScoreLightSceneLowest() {
    let config = EngineConfig::default();
    let scenes = segment_scenes(&strained_script()).unwrap();
    let normalized = normalize_features(&extract_scene_features(&scenes));
    let effort = compute_effort(&normalized, &config).unwrap();

    // Scene 0 is the header-only scene; it holds every per-key minimum
    assert_eq!(effort[0], 0.0);
    for &score in &effort[1..] {
        assert!(score > 3.0);
    }
}
