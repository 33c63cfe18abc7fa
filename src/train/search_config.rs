use std::sync::mpsc;
use std::sync::{Arc, atomic::AtomicBool};

use crate::train::sweep_stats::SweepStats;

/// Seed used when none is given.
pub const DEFAULT_SEED: u64 = 17;

/// Configuration for a `CoordinateSearch` run.
///
/// # Fields
/// - `seed`: seeds the perturbation RNG; equal seeds give equal
///   weight trajectories
/// - `max_sweeps`: optional cap on the number of sweeps. `None` keeps
///   sweeping until the acceptable score is reached, which
///   may never happen.
/// - `progress_tx`: optional channel sender; one `SweepStats` is sent per
///   completed sweep.  If the receiver is dropped training
///   stops.
/// - `stop_flag`: optional atomic flag; when set to `true` from another
///   thread training stops after the current sweep.
#[derive(Debug)]
pub struct SearchConfig {
    pub seed: u64,
    pub max_sweeps: Option<usize>,
    pub progress_tx: Option<mpsc::Sender<SweepStats>>,
    pub stop_flag: Option<Arc<AtomicBool>>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig::new(DEFAULT_SEED)
    }
}

impl SearchConfig {
    /// Unbounded search with the given seed, no channel, no stop flag.
    pub fn new(seed: u64) -> Self {
        SearchConfig {
            seed,
            max_sweeps: None,
            progress_tx: None,
            stop_flag: None,
        }
    }

    pub fn with_max_sweeps(mut self, max_sweeps: usize) -> Self {
        self.max_sweeps = Some(max_sweeps);
        self
    }

    pub fn with_progress(mut self, tx: mpsc::Sender<SweepStats>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    pub fn with_stop_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.stop_flag = Some(flag);
        self
    }
}
