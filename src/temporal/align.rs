/*!
 * Signal alignment.
 *
 * Window sums only exist from the first full window onward, so the raw
 * window sequences are shorter than the decayed sequence. Alignment
 * left-pads them with an explicit absence marker until index i of every
 * signal refers to scene i. Absence is a distinct variant, not a zero, so
 * the decision engine can never confuse a missing window with a quiet one.
 */

use serde::{Deserialize, Serialize};

use crate::errors::PipelineError;
use crate::temporal::graph::TemporalGraph;

/// One aligned window value: observed, or absent before the first full window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum WindowSample {
    /// A full window ended at this scene
    Observed(f64),
    /// The window does not yet fit at this scene
    Absent,
}

impl WindowSample {
    /// The observed value, if any
    pub fn value(&self) -> Option<f64> {
        match self {
            WindowSample::Observed(v) => Some(*v),
            WindowSample::Absent => None,
        }
    }
}

/// All temporal signals on one index space, 0..N-1 matching the scenes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedSignals {
    /// Decay-accumulated effort
    pub decayed: Vec<f64>,
    /// Short-window sums, left-padded
    pub window_short: Vec<WindowSample>,
    /// Medium-window sums, left-padded
    pub window_medium: Vec<WindowSample>,
    /// Long-window sums, left-padded
    pub window_long: Vec<WindowSample>,
}

impl AlignedSignals {
    /// Number of scenes covered by the signals
    pub fn len(&self) -> usize {
        self.decayed.len()
    }

    /// Whether the signals cover zero scenes
    pub fn is_empty(&self) -> bool {
        self.decayed.is_empty()
    }
}

/// Left-pads every window sequence to the decayed sequence's length.
///
/// A window sequence longer than the decayed sequence is an upstream defect
/// and fails with [`PipelineError::WindowOverrun`].
pub fn align_signals(temporal: &TemporalGraph) -> Result<AlignedSignals, PipelineError> {
    let target_len = temporal.decayed.len();

    let align = |window: &[f64]| -> Result<Vec<WindowSample>, PipelineError> {
        if window.len() > target_len {
            return Err(PipelineError::WindowOverrun {
                window_len: window.len(),
                sequence_len: target_len,
            });
        }
        let pad = target_len - window.len();
        let mut aligned = vec![WindowSample::Absent; pad];
        aligned.extend(window.iter().map(|&v| WindowSample::Observed(v)));
        Ok(aligned)
    };

    Ok(AlignedSignals {
        decayed: temporal.decayed.clone(),
        window_short: align(&temporal.window_short)?,
        window_medium: align(&temporal.window_medium)?,
        window_long: align(&temporal.window_long)?,
    })
}
