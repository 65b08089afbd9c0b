/*!
 * Frozen engine configuration.
 *
 * All numeric parameters of the pipeline — effort weights, decay constants,
 * window widths, calibration coefficients, decision thresholds — live in one
 * immutable `EngineConfig` value that is threaded explicitly into each stage.
 * The engine performs inference-only arithmetic: nothing here is ever fitted
 * from data. `Default` carries the frozen production values; tests may
 * substitute alternates to probe stage behavior.
 */

use serde::{Deserialize, Serialize};

/// Frozen weight applied to each of the six normalized effort terms
pub const DEFAULT_EFFORT_WEIGHT: f64 = 1.0;

/// Exponential forgetting factor of the decay recurrence
pub const DEFAULT_DECAY_LAMBDA: f64 = 0.9;

/// Effort drop that counts as meaningful recovery
pub const DEFAULT_RECOVERY_TAU: f64 = 0.15;

/// Relief subtracted from the accumulation when recovery triggers
pub const DEFAULT_RECOVERY_RHO: f64 = 0.1;

/// Sliding-window widths, in scenes
pub const DEFAULT_WINDOW_SHORT: usize = 3;
pub const DEFAULT_WINDOW_MEDIUM: usize = 5;
pub const DEFAULT_WINDOW_LONG: usize = 9;

/// Frozen logistic calibration coefficients
pub const DEFAULT_CALIBRATION_WEIGHT: f64 = 1.0;
pub const DEFAULT_CALIBRATION_BIAS: f64 = 0.0;

/// Decision thresholds
pub const DEFAULT_PROB_THRESHOLD: f64 = 0.7;
pub const DEFAULT_THRESHOLD_SHORT: f64 = 3.0;
pub const DEFAULT_THRESHOLD_MEDIUM: f64 = 5.0;
pub const DEFAULT_THRESHOLD_LONG: f64 = 9.0;

/// Per-term weights of the effort formula. Each term stays separately
/// addressable even though the current configuration weighs them equally.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EffortWeights {
    /// Weight on normalized AvgSentenceLength
    pub avg_sentence_length: f64,
    /// Weight on normalized ActionDensity
    pub action_density: f64,
    /// Weight on normalized DialogueTurnCount
    pub dialogue_turn_count: f64,
    /// Weight on normalized RepetitionScore
    pub repetition_score: f64,
    /// Weight on normalized VisualDensityPenalty
    pub visual_density_penalty: f64,
    /// Weight on normalized AuditoryLoad
    pub auditory_load: f64,
}

impl Default for EffortWeights {
    fn default() -> Self {
        Self {
            avg_sentence_length: DEFAULT_EFFORT_WEIGHT,
            action_density: DEFAULT_EFFORT_WEIGHT,
            dialogue_turn_count: DEFAULT_EFFORT_WEIGHT,
            repetition_score: DEFAULT_EFFORT_WEIGHT,
            visual_density_penalty: DEFAULT_EFFORT_WEIGHT,
            auditory_load: DEFAULT_EFFORT_WEIGHT,
        }
    }
}

/// Parameters of the decay-accumulation recurrence
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DecayParams {
    /// Forgetting factor applied to the previous accumulation
    pub lambda: f64,
    /// Minimum effort drop that counts as recovery
    pub tau: f64,
    /// Relief subtracted when recovery triggers
    pub rho: f64,
}

impl Default for DecayParams {
    fn default() -> Self {
        Self {
            lambda: DEFAULT_DECAY_LAMBDA,
            tau: DEFAULT_RECOVERY_TAU,
            rho: DEFAULT_RECOVERY_RHO,
        }
    }
}

/// Sliding-window widths for the three accumulation scales
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WindowWidths {
    /// Short-range window, in scenes
    pub short: usize,
    /// Medium-range window, in scenes
    pub medium: usize,
    /// Long-range window, in scenes
    pub long: usize,
}

impl Default for WindowWidths {
    fn default() -> Self {
        Self {
            short: DEFAULT_WINDOW_SHORT,
            medium: DEFAULT_WINDOW_MEDIUM,
            long: DEFAULT_WINDOW_LONG,
        }
    }
}

/// Frozen coefficients of the logistic calibration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CalibrationParams {
    /// Multiplicative coefficient on the accumulated effort
    pub weight: f64,
    /// Additive intercept
    pub bias: f64,
}

impl Default for CalibrationParams {
    fn default() -> Self {
        Self {
            weight: DEFAULT_CALIBRATION_WEIGHT,
            bias: DEFAULT_CALIBRATION_BIAS,
        }
    }
}

/// Thresholds applied by the decision engine
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DecisionThresholds {
    /// Minimum calibrated probability (exclusive)
    pub probability: f64,
    /// Minimum short-window sum (exclusive)
    pub window_short: f64,
    /// Minimum medium-window sum (exclusive)
    pub window_medium: f64,
    /// Minimum long-window sum (exclusive)
    pub window_long: f64,
}

impl Default for DecisionThresholds {
    fn default() -> Self {
        Self {
            probability: DEFAULT_PROB_THRESHOLD,
            window_short: DEFAULT_THRESHOLD_SHORT,
            window_medium: DEFAULT_THRESHOLD_MEDIUM,
            window_long: DEFAULT_THRESHOLD_LONG,
        }
    }
}

/// Complete frozen configuration for one pipeline run
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct EngineConfig {
    /// Effort-formula weights
    #[serde(default)]
    pub weights: EffortWeights,

    /// Decay-recurrence parameters
    #[serde(default)]
    pub decay: DecayParams,

    /// Sliding-window widths
    #[serde(default)]
    pub windows: WindowWidths,

    /// Logistic calibration coefficients
    #[serde(default)]
    pub calibration: CalibrationParams,

    /// Decision thresholds
    #[serde(default)]
    pub decision: DecisionThresholds,
}
