/*!
 * Temporal module: decay accumulation and signal alignment.
 *
 * - `graph`: decay-accumulation recurrence and the three fixed-width
 *   sliding-window sums over the effort sequence
 * - `align`: left-pads the window sequences so every signal shares one index
 *   space with the decayed sequence
 */

pub mod graph;
pub mod align;

// Re-export main types
pub use graph::{TemporalGraph, build_temporal_graph};
pub use align::{AlignedSignals, WindowSample, align_signals};
