/*!
 * Final alert decision.
 *
 * A scene alerts only when its calibrated probability clears the threshold
 * AND all three window signals are observed and exceed their own thresholds.
 * An absent window can never contribute to agreement.
 */

use log::debug;

use crate::engine_config::EngineConfig;
use crate::errors::PipelineError;
use crate::temporal::align::{AlignedSignals, WindowSample};

/// Combines the probability threshold with multi-scale window agreement
/// into one boolean per scene index.
pub fn decide_alerts(
    probabilities: &[f64],
    signals: &AlignedSignals,
    config: &EngineConfig,
) -> Result<Vec<bool>, PipelineError> {
    if probabilities.len() != signals.len() {
        return Err(PipelineError::LengthMismatch {
            probabilities: probabilities.len(),
            signals: signals.len(),
        });
    }

    let thresholds = &config.decision;
    let exceeds = |sample: &WindowSample, threshold: f64| -> bool {
        matches!(sample, WindowSample::Observed(v) if *v > threshold)
    };

    let alerts: Vec<bool> = probabilities
        .iter()
        .enumerate()
        .map(|(i, &p)| {
            let prob_pass = p > thresholds.probability;
            let agreement = exceeds(&signals.window_short[i], thresholds.window_short)
                && exceeds(&signals.window_medium[i], thresholds.window_medium)
                && exceeds(&signals.window_long[i], thresholds.window_long);
            prob_pass && agreement
        })
        .collect();

    debug!(
        "Decision over {} scene(s): {} alert(s)",
        alerts.len(),
        alerts.iter().filter(|&&a| a).count()
    );
    Ok(alerts)
}
