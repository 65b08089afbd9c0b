/*!
 * Decayed and windowed accumulation over the effort sequence.
 *
 * The decay recurrence models cumulative pressure with exponential
 * forgetting plus a relief term when effort drops sharply. The window sums
 * are raw local totals over the last w scenes for three fixed widths.
 */

use log::debug;
use serde::{Deserialize, Serialize};

use crate::engine_config::EngineConfig;

/// Raw temporal signals before alignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemporalGraph {
    /// Decay-accumulated effort, one value per scene
    pub decayed: Vec<f64>,
    /// Short-window sums; empty when the window exceeds the scene count
    pub window_short: Vec<f64>,
    /// Medium-window sums
    pub window_medium: Vec<f64>,
    /// Long-window sums
    pub window_long: Vec<f64>,
}

/// Builds the decayed sequence and the three window-sum sequences.
pub fn build_temporal_graph(effort: &[f64], config: &EngineConfig) -> TemporalGraph {
    if effort.is_empty() {
        return TemporalGraph {
            decayed: Vec::new(),
            window_short: Vec::new(),
            window_medium: Vec::new(),
            window_long: Vec::new(),
        };
    }

    let decay = &config.decay;
    let mut decayed = Vec::with_capacity(effort.len());
    decayed.push(effort[0]);
    for i in 1..effort.len() {
        let mut accumulated = effort[i] + decay.lambda * decayed[i - 1];
        // Recovery: pressure dropped meaningfully since the previous scene
        if effort[i] < effort[i - 1] - decay.tau {
            accumulated -= decay.rho;
        }
        decayed.push(accumulated);
    }

    let graph = TemporalGraph {
        decayed,
        window_short: windowed_sums(effort, config.windows.short),
        window_medium: windowed_sums(effort, config.windows.medium),
        window_long: windowed_sums(effort, config.windows.long),
    };
    debug!(
        "Temporal graph over {} scene(s): windows of {}/{}/{} value(s)",
        effort.len(),
        graph.window_short.len(),
        graph.window_medium.len(),
        graph.window_long.len()
    );
    graph
}

// Sum of effort[i-w+1 ..= i] for every end index i from w-1; empty when w
// exceeds the sequence length
fn windowed_sums(effort: &[f64], width: usize) -> Vec<f64> {
    if width == 0 || width > effort.len() {
        return Vec::new();
    }
    effort
        .windows(width)
        .map(|window| window.iter().sum())
        .collect()
}
