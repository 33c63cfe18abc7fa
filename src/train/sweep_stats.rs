use serde::{Serialize, Deserialize};

/// Statistics for one completed sweep of the coordinate search.
///
/// When a `progress_tx` channel is configured in `SearchConfig`, the trainer
/// sends one `SweepStats` value after every sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepStats {
    /// 1-based sweep number.
    pub sweep: usize,
    /// Aggregate L1 score after the sweep.
    pub score: f64,
    /// Perturbations kept during this sweep.
    pub accepted: usize,
    /// Perturbations reverted during this sweep.
    pub rejected: usize,
    /// Wall-clock duration of this sweep in milliseconds.
    pub elapsed_ms: u64,
}
