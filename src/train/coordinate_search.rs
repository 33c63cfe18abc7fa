use std::sync::atomic::Ordering;
use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use crate::error::{GraphError, Result};
use crate::loss::l1::L1Loss;
use crate::network::network::{EdgeRef, Network};
use crate::train::sample::{validate_samples, Sample};
use crate::train::search_config::SearchConfig;
use crate::train::sweep_stats::SweepStats;

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Aggregate L1 error of `network` over every sample.
///
/// Fails with `SampleShape` if any sample's inputs or targets do not match
/// the network's declared sizes.
pub fn score(network: &mut Network, samples: &[Sample]) -> Result<f64> {
    validate_samples(network, samples)?;

    let mut total = 0.0;
    for sample in samples {
        let output = network.evaluate(&sample.inputs)?;
        total += L1Loss::loss(&output, &sample.targets);
    }
    Ok(total)
}

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// Result of one perturb/score/decide step on a single edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// `candidate < baseline`; the new weight was kept.
    Accepted { baseline: f64, candidate: f64 },
    /// The weight was restored to its exact previous value.
    Rejected { baseline: f64, candidate: f64 },
}

impl Step {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Step::Accepted { .. })
    }
}

/// How a `train` call ended. `Converged` is the only exit of an
/// unconfigured search; the others require `max_sweeps`, `stop_flag` or
/// `progress_tx`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrainOutcome {
    Converged { sweeps: usize, score: f64 },
    SweepLimitReached { sweeps: usize, score: f64 },
    Stopped { sweeps: usize, score: f64 },
}

impl TrainOutcome {
    pub fn is_converged(&self) -> bool {
        matches!(self, TrainOutcome::Converged { .. })
    }

    pub fn sweeps(&self) -> usize {
        match *self {
            TrainOutcome::Converged { sweeps, .. }
            | TrainOutcome::SweepLimitReached { sweeps, .. }
            | TrainOutcome::Stopped { sweeps, .. } => sweeps,
        }
    }

    pub fn score(&self) -> f64 {
        match *self {
            TrainOutcome::Converged { score, .. }
            | TrainOutcome::SweepLimitReached { score, .. }
            | TrainOutcome::Stopped { score, .. } => score,
        }
    }
}

// ---------------------------------------------------------------------------
// Coordinate search
// ---------------------------------------------------------------------------

/// Greedy per-weight hill climbing.
///
/// Each sweep visits every edge in layer/node/insertion order, nudges its
/// weight by a uniform amount in (-1, 1) and keeps the change only if the
/// aggregate score strictly improves. Sweeps repeat until the score drops
/// below the acceptable threshold.
pub struct CoordinateSearch {
    rng: ChaCha8Rng,
    config: SearchConfig,
}

impl CoordinateSearch {
    pub fn new(config: SearchConfig) -> CoordinateSearch {
        CoordinateSearch {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
        }
    }

    /// One coin flip, then one magnitude draw in [0, 1).
    fn perturbation(&mut self) -> f64 {
        if self.rng.gen::<f64>() < 0.5 {
            -self.rng.gen::<f64>()
        } else {
            self.rng.gen::<f64>()
        }
    }

    /// Perturbs a single edge weight and keeps it only if the score improves.
    ///
    /// If scoring the candidate diverges, the weight is restored before the
    /// error is returned.
    pub fn step_edge(&mut self, network: &mut Network, samples: &[Sample], edge: EdgeRef) -> Result<Step> {
        let baseline = score(network, samples)?;
        let original = network.weight(edge).ok_or(GraphError::UnknownEdge {
            node: edge.node,
            edge: edge.edge,
        })?;

        let delta = self.perturbation();
        network.set_weight(edge, original + delta);

        let candidate = match score(network, samples) {
            Ok(candidate) => candidate,
            Err(e) => {
                network.set_weight(edge, original);
                return Err(e);
            }
        };

        if candidate < baseline {
            debug!(
                layer = edge.layer,
                node = %edge.node,
                edge = edge.edge,
                baseline,
                candidate,
                "improved edge"
            );
            Ok(Step::Accepted { baseline, candidate })
        } else {
            network.set_weight(edge, original);
            Ok(Step::Rejected { baseline, candidate })
        }
    }

    /// One full pass over every edge, followed by a fresh score.
    pub fn sweep(&mut self, network: &mut Network, samples: &[Sample], sweep: usize) -> Result<SweepStats> {
        let t_start = Instant::now();
        let mut accepted = 0;
        let mut rejected = 0;

        for edge in network.edges() {
            if self.step_edge(network, samples, edge)?.is_accepted() {
                accepted += 1;
            } else {
                rejected += 1;
            }
        }

        let score = score(network, samples)?;
        Ok(SweepStats {
            sweep,
            score,
            accepted,
            rejected,
            elapsed_ms: t_start.elapsed().as_millis() as u64,
        })
    }

    /// Sweeps until the score falls below `acceptable_score`.
    ///
    /// Samples are checked against the network shape before any weight is
    /// touched. With the default configuration this loops until convergence
    /// and never returns anything but `Converged` (or an error).
    pub fn train(
        &mut self,
        network: &mut Network,
        samples: &[Sample],
        acceptable_score: f64,
    ) -> Result<TrainOutcome> {
        validate_samples(network, samples)?;

        let mut sweeps = 0;
        loop {
            if self.stop_requested() {
                let score = score(network, samples)?;
                warn!(sweeps, score, "training stopped before convergence");
                return Ok(TrainOutcome::Stopped { sweeps, score });
            }

            let stats = self.sweep(network, samples, sweeps + 1)?;
            sweeps = stats.sweep;
            let score = stats.score;
            info!(sweep = sweeps, score, accepted = stats.accepted, "sweep complete");

            // A dropped receiver ends training, unless this sweep converged.
            let receiver_gone = match self.config.progress_tx {
                Some(ref tx) => tx.send(stats).is_err(),
                None => false,
            };

            if score < acceptable_score {
                info!(sweeps, score, "training passed");
                return Ok(TrainOutcome::Converged { sweeps, score });
            }

            if receiver_gone {
                warn!(sweeps, score, "progress receiver dropped; stopping");
                return Ok(TrainOutcome::Stopped { sweeps, score });
            }

            if let Some(max) = self.config.max_sweeps {
                if sweeps >= max {
                    warn!(sweeps, score, acceptable_score, "sweep limit reached before convergence");
                    return Ok(TrainOutcome::SweepLimitReached { sweeps, score });
                }
            }
        }
    }

    fn stop_requested(&self) -> bool {
        self.config
            .stop_flag
            .as_ref()
            .map(|flag| flag.load(Ordering::Relaxed))
            .unwrap_or(false)
    }
}

/// Trains with the default configuration (seed 17, no sweep cap).
pub fn train_network(network: &mut Network, samples: &[Sample], acceptable_score: f64) -> Result<TrainOutcome> {
    CoordinateSearch::new(SearchConfig::default()).train(network, samples, acceptable_score)
}
