/*!
 * Derived scoring inputs and per-script min-max normalization.
 *
 * Six derived values feed the effort score. Each is min-max scaled per key
 * across all scenes of the script, with a small epsilon in the denominator
 * so a constant-valued key collapses to 0.0 instead of dividing by zero.
 */

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::features::SceneFeatures;

/// Denominator epsilon of the min-max transform
pub const NORM_EPSILON: f64 = 1e-8;

/// The six normalized inputs to the effort score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NormFeature {
    /// Scene-wide words over sentence count
    AvgSentenceLength,
    /// Action lines over total lines
    ActionDensity,
    /// Number of dialogue blocks
    DialogueTurnCount,
    /// Reserved; always 0.0, never computed from content
    RepetitionScore,
    /// MaxContinuousLines minus WhitespaceRatio
    VisualDensityPenalty,
    /// Dialogue turns times average sentence length
    AuditoryLoad,
}

impl NormFeature {
    /// All six keys, in canonical order
    pub const ALL: [NormFeature; 6] = [
        NormFeature::AvgSentenceLength,
        NormFeature::ActionDensity,
        NormFeature::DialogueTurnCount,
        NormFeature::RepetitionScore,
        NormFeature::VisualDensityPenalty,
        NormFeature::AuditoryLoad,
    ];
}

/// One scene's normalized feature vector
pub type NormalizedFeatures = BTreeMap<NormFeature, f64>;

// The raw derived value for one key of one scene
fn derive(features: &SceneFeatures, key: NormFeature) -> f64 {
    match key {
        NormFeature::AvgSentenceLength => features.avg_sentence_length,
        NormFeature::ActionDensity => {
            if features.lines > 0 {
                features.action_lines as f64 / features.lines as f64
            } else {
                0.0
            }
        }
        NormFeature::DialogueTurnCount => features.dialogue_turns as f64,
        NormFeature::RepetitionScore => 0.0,
        // A line count minus a 0-1 ratio. The mixed units are part of the
        // frozen model; downstream scores depend on this exact value
        NormFeature::VisualDensityPenalty => {
            features.max_continuous_lines as f64 - features.whitespace_ratio
        }
        NormFeature::AuditoryLoad => features.auditory_load,
    }
}

/// Min-max normalizes the six derived inputs across all scenes.
///
/// For each key independently: `(value - min) / (max - min + 1e-8)`. When a
/// key is constant across the script, every scene maps to 0.0 for that key.
pub fn normalize_features(features: &[SceneFeatures]) -> Vec<NormalizedFeatures> {
    let raw: Vec<NormalizedFeatures> = features
        .iter()
        .map(|f| {
            NormFeature::ALL
                .iter()
                .map(|&key| (key, derive(f, key)))
                .collect()
        })
        .collect();

    let mut bounds: BTreeMap<NormFeature, (f64, f64)> = BTreeMap::new();
    for &key in &NormFeature::ALL {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for scene in &raw {
            let value = scene[&key];
            min = min.min(value);
            max = max.max(value);
        }
        bounds.insert(key, (min, max));
    }

    let normalized: Vec<NormalizedFeatures> = raw
        .iter()
        .map(|scene| {
            scene
                .iter()
                .map(|(&key, &value)| {
                    let (min, max) = bounds[&key];
                    (key, (value - min) / (max - min + NORM_EPSILON))
                })
                .collect()
        })
        .collect();

    debug!("Normalized {} feature key(s) over {} scene(s)", NormFeature::ALL.len(), normalized.len());
    normalized
}
