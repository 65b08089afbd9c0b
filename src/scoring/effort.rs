/*!
 * Per-scene effort computation.
 *
 * The effort score is a fixed linear combination of the six normalized
 * inputs. Each weight is separately addressable in the configuration even
 * though the frozen values are all 1.0. A missing key is an upstream
 * contract violation and aborts the run; it is never defaulted.
 */

use log::debug;

use crate::engine_config::EngineConfig;
use crate::errors::PipelineError;
use crate::scoring::normalize::{NormFeature, NormalizedFeatures};

/// Computes one effort value per scene from its normalized feature vector.
pub fn compute_effort(
    features_norm: &[NormalizedFeatures],
    config: &EngineConfig,
) -> Result<Vec<f64>, PipelineError> {
    let weights = &config.weights;
    let mut effort_values = Vec::with_capacity(features_norm.len());

    for scene in features_norm {
        let term = |key: NormFeature| -> Result<f64, PipelineError> {
            scene
                .get(&key)
                .copied()
                .ok_or(PipelineError::MissingFeature(key))
        };

        let effort = weights.avg_sentence_length * term(NormFeature::AvgSentenceLength)?
            + weights.action_density * term(NormFeature::ActionDensity)?
            + weights.dialogue_turn_count * term(NormFeature::DialogueTurnCount)?
            + weights.repetition_score * term(NormFeature::RepetitionScore)?
            + weights.visual_density_penalty * term(NormFeature::VisualDensityPenalty)?
            + weights.auditory_load * term(NormFeature::AuditoryLoad)?;

        effort_values.push(effort);
    }

    debug!("Computed effort for {} scene(s)", effort_values.len());
    Ok(effort_values)
}
