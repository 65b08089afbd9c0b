/*!
 * Pipeline orchestration.
 *
 * Runs the stages in their fixed order: validate, preprocess, segment,
 * extract features, normalize, score effort, build temporal graph, align,
 * calibrate, decide, format. Data flows strictly forward; every intermediate
 * artifact is kept in the returned [`ScriptAnalysis`] so presentation layers
 * can render mid-pipeline signals without re-running stages themselves.
 */

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::calibration::calibrate_strain;
use crate::decision::decide_alerts;
use crate::engine_config::EngineConfig;
use crate::errors::ScriptError;
use crate::features::{SceneFeatures, extract_scene_features};
use crate::output::format_alerts;
use crate::preprocess::preprocess_lines;
use crate::scoring::{NormalizedFeatures, compute_effort, normalize_features};
use crate::segmenter::segment_scenes;
use crate::temporal::{AlignedSignals, align_signals, build_temporal_graph};
use crate::validator::validate_script;

/// Every artifact of one pipeline run, from scene headers to alert messages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptAnalysis {
    /// Number of scenes detected
    pub scene_count: usize,
    /// Header line of each scene, in scene order
    pub scene_headers: Vec<String>,
    /// Raw structural metrics per scene
    pub features: Vec<SceneFeatures>,
    /// Min-max normalized scoring inputs per scene
    pub normalized: Vec<NormalizedFeatures>,
    /// Effort score per scene
    pub effort: Vec<f64>,
    /// Aligned decayed and window signals
    pub signals: AlignedSignals,
    /// Calibrated strain probability per scene
    pub probabilities: Vec<f64>,
    /// Alert flag per scene
    pub alerts: Vec<bool>,
    /// Formatted alert messages, ascending by scene index
    pub messages: Vec<String>,
}

/// Runs the full pipeline and returns every intermediate artifact.
pub fn analyze_script(
    lines: &[String],
    config: &EngineConfig,
) -> Result<ScriptAnalysis, ScriptError> {
    validate_script(lines)?;

    let clean_lines = preprocess_lines(lines);
    let scenes = segment_scenes(&clean_lines)?;
    debug!("Segmented {} scene(s)", scenes.len());

    let features = extract_scene_features(&scenes);
    let normalized = normalize_features(&features);
    let effort = compute_effort(&normalized, config).map_err(ScriptError::Pipeline)?;

    let temporal = build_temporal_graph(&effort, config);
    let signals = align_signals(&temporal).map_err(ScriptError::Pipeline)?;

    let probabilities = calibrate_strain(&signals.decayed, config);
    let alerts = decide_alerts(&probabilities, &signals, config).map_err(ScriptError::Pipeline)?;
    let messages = format_alerts(&alerts);

    info!(
        "Analyzed {} scene(s): {} alert(s)",
        scenes.len(),
        messages.len()
    );

    Ok(ScriptAnalysis {
        scene_count: scenes.len(),
        scene_headers: scenes.iter().map(|s| s.header.clone()).collect(),
        features,
        normalized,
        effort,
        signals,
        probabilities,
        alerts,
        messages,
    })
}

/// Runs the full pipeline with the frozen default configuration and returns
/// the alert messages only. This is the stable entry contract: an ordered
/// sequence of newline-free lines in, an ordered sequence of messages out.
pub fn run_pipeline(lines: &[String]) -> Result<Vec<String>, ScriptError> {
    run_pipeline_with_config(lines, &EngineConfig::default())
}

/// Like [`run_pipeline`], with an explicit configuration.
pub fn run_pipeline_with_config(
    lines: &[String],
    config: &EngineConfig,
) -> Result<Vec<String>, ScriptError> {
    Ok(analyze_script(lines, config)?.messages)
}
