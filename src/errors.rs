/*!
 * Error types for the scriptpulse engine.
 *
 * This module contains custom error types for the analysis pipeline,
 * using the thiserror crate for ergonomic error definitions.
 *
 * Two error families describe bad input (`ValidationError`, `StructureError`);
 * the third (`PipelineError`) marks internal contract violations between
 * stages. Internal violations are never coerced into defaults — a missing
 * feature key or a misaligned signal is a defect in the pipeline, not a
 * recoverable runtime condition.
 */

use thiserror::Error;

use crate::scoring::normalize::NormFeature;

/// Errors raised by script validation, before any processing begins
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Every line of the script is blank
    #[error("Empty script")]
    EmptyScript,

    /// No line matches the scene-header pattern
    #[error("No scene headers found")]
    NoSceneHeaders,

    /// A speaker candidate appears before the first scene header
    #[error("Dialogue before first scene header")]
    SpeakerBeforeHeader,

    /// A speaker line is empty, too long, or ends in forbidden punctuation
    #[error("Invalid speaker line: {line:?}")]
    InvalidSpeakerLine {
        /// The offending line
        line: String,
    },

    /// A parenthetical is unterminated or does not follow a speaker line
    #[error("Invalid parenthetical placement: {line:?}")]
    InvalidParenthetical {
        /// The offending line
        line: String,
    },
}

/// Errors raised during scene segmentation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StructureError {
    /// A non-blank line precedes the first scene header
    #[error("Content before first scene header: {line:?}")]
    ContentBeforeFirstHeader {
        /// The offending line
        line: String,
    },

    /// Segmentation produced zero scenes
    #[error("No scenes detected")]
    NoScenesDetected,
}

/// Internal contract violations between pipeline stages
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
    /// A required normalized feature key is absent from a scene's vector
    #[error("Missing required feature key: {0:?}")]
    MissingFeature(NormFeature),

    /// A window signal is longer than the decayed sequence
    #[error("Window signal longer than decayed signal: {window_len} > {sequence_len}")]
    WindowOverrun {
        /// Length of the offending window sequence
        window_len: usize,
        /// Length of the decayed sequence
        sequence_len: usize,
    },

    /// The probability and signal sequences disagree in length
    #[error("Length mismatch between probabilities and signals: {probabilities} != {signals}")]
    LengthMismatch {
        /// Length of the probability sequence
        probabilities: usize,
        /// Length of the aligned signal sequences
        signals: usize,
    },
}

/// Main engine error type that wraps all other errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScriptError {
    /// The script failed validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The script failed segmentation
    #[error("Structure error: {0}")]
    Structure(#[from] StructureError),

    /// A pipeline stage violated an internal contract
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),
}
