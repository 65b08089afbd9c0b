/*!
 * Frozen probability calibration.
 *
 * Maps each decayed-accumulation value to a strain probability through a
 * fixed logistic transform. The coefficients are frozen in the engine
 * configuration; no fitting ever occurs.
 */

use crate::engine_config::EngineConfig;

/// Applies `p = 1 / (1 + exp(-(W·x + B)))` to every accumulated value.
/// Empty input yields empty output.
pub fn calibrate_strain(accumulated: &[f64], config: &EngineConfig) -> Vec<f64> {
    let calibration = &config.calibration;
    accumulated
        .iter()
        .map(|&x| 1.0 / (1.0 + (-(calibration.weight * x + calibration.bias)).exp()))
        .collect()
}
