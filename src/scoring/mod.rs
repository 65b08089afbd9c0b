/*!
 * Scoring module: feature normalization and effort computation.
 *
 * - `normalize`: derives the six scoring inputs per scene and min-max scales
 *   each across the whole script
 * - `effort`: collapses the normalized inputs into one scalar per scene with
 *   fixed weights
 */

pub mod normalize;
pub mod effort;

// Re-export main types
pub use normalize::{NormFeature, NormalizedFeatures, normalize_features};
pub use effort::compute_effort;
