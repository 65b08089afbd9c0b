/*!
 * # ScriptPulse - Structural strain analysis for screenplays
 *
 * A Rust library that flags screenplay scenes imposing sustained,
 * unrelieved structural pressure, using only deterministic rule-based
 * signals — no semantic or quality judgment, no learned parameters.
 *
 * ## Pipeline
 *
 * The analysis runs as a fixed forward-only pipeline:
 *
 * 1. Validation of the raw line sequence
 * 2. Whitespace preprocessing
 * 3. Scene/block segmentation (line-classification state machine)
 * 4. Per-scene structural feature extraction
 * 5. Per-script min-max normalization of six derived features
 * 6. Fixed-weight effort scoring
 * 7. Decay accumulation and sliding-window sums
 * 8. Signal alignment onto one scene index space
 * 9. Frozen logistic calibration
 * 10. Multi-scale threshold decision
 * 11. Fixed-template alert formatting
 *
 * Every stage is independently callable so consumers can re-derive
 * intermediate artifacts for visualization; `pipeline::run_pipeline` composes
 * them all.
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `line_rules`: Classification primitives shared by validator and segmenter
 * - `validator`: Structural validation of raw scripts
 * - `preprocess`: Deterministic whitespace normalization
 * - `segmenter`: Scene and block segmentation
 * - `features`: Per-scene structural metrics
 * - `scoring`: Feature normalization and effort computation
 * - `temporal`: Decay/window accumulation and signal alignment
 * - `calibration`: Frozen logistic probability transform
 * - `decision`: Probability/agreement alert decision
 * - `output`: Fixed-template alert messages
 * - `pipeline`: Stage orchestration
 * - `engine_config`: Frozen numeric configuration
 * - `errors`: Custom error types for the engine
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod engine_config;
pub mod errors;
pub mod line_rules;
pub mod validator;
pub mod preprocess;
pub mod segmenter;
pub mod features;
pub mod scoring;
pub mod temporal;
pub mod calibration;
pub mod decision;
pub mod output;
pub mod pipeline;

// Re-export main types for easier usage
pub use engine_config::EngineConfig;
pub use errors::{PipelineError, ScriptError, StructureError, ValidationError};
pub use features::SceneFeatures;
pub use pipeline::{ScriptAnalysis, analyze_script, run_pipeline, run_pipeline_with_config};
pub use segmenter::{Block, BlockKind, Scene};
pub use temporal::{AlignedSignals, WindowSample};
