// Trains the default (2, 1, 2) graph network on the OR-like demo set and
// prints each sample's output next to its target.
//
//   cargo run
//   cargo run -- samples.json        # JSON array of {"inputs": [..], "targets": [..]}
//   FERRITE_LOG=debug cargo run      # log every accepted perturbation
use ferrite_graph::train::{load_samples_json, xor_like_samples};
use ferrite_graph::{NetworkSpec, Result, train_network};
use tracing::{info, Level};

const HIDDEN_DEPTH: i64 = 2;
const ACCEPTABLE_SCORE: f64 = 0.05;

fn main() -> Result<()> {
    let level = std::env::var("FERRITE_LOG")
        .ok()
        .and_then(|v| v.parse::<Level>().ok())
        .unwrap_or(Level::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();

    info!("loading training data");
    let samples = match std::env::args().nth(1) {
        Some(path) => load_samples_json(&path)?,
        None => xor_like_samples(),
    };

    let (input_size, output_size) = samples
        .first()
        .map(|s| (s.inputs.len() as i64, s.targets.len() as i64))
        .unwrap_or((2, 1));

    info!(input_size, output_size, hidden_depth = HIDDEN_DEPTH, "generating network");
    let mut network = NetworkSpec::new(input_size, output_size, HIDDEN_DEPTH).build()?;
    let outcome = train_network(&mut network, &samples, ACCEPTABLE_SCORE)?;
    info!(sweeps = outcome.sweeps(), score = outcome.score(), "training finished");

    for sample in &samples {
        let outputs = network.evaluate(&sample.inputs)?;
        println!("Input: {:?} -> Output: {:.4?}  (expected {:?})", sample.inputs, outputs, sample.targets);
    }
    Ok(())
}
