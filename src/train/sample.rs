use serde::{Serialize, Deserialize};

use crate::error::{GraphError, Result};
use crate::network::network::Network;

/// One supervised example. `inputs` excludes the two bias constants; the
/// network appends those itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub inputs: Vec<f64>,
    pub targets: Vec<f64>,
}

impl Sample {
    pub fn new(inputs: Vec<f64>, targets: Vec<f64>) -> Sample {
        Sample { inputs, targets }
    }
}

/// The four-sample OR-like set the demo trains on.
pub fn xor_like_samples() -> Vec<Sample> {
    vec![
        Sample::new(vec![0.0, 0.0], vec![0.0]),
        Sample::new(vec![0.0, 1.0], vec![1.0]),
        Sample::new(vec![1.0, 0.0], vec![1.0]),
        Sample::new(vec![0.0, 0.0], vec![0.0]),
    ]
}

/// Reads a JSON array of `{ "inputs": [..], "targets": [..] }` objects.
pub fn load_samples_json(path: &str) -> Result<Vec<Sample>> {
    let file = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}

/// Checks every sample against the network's declared sizes.
pub fn validate_samples(network: &Network, samples: &[Sample]) -> Result<()> {
    for (index, sample) in samples.iter().enumerate() {
        if sample.inputs.len() != network.input_size() {
            return Err(GraphError::SampleShape {
                index,
                field: "inputs",
                expected: network.input_size(),
                actual: sample.inputs.len(),
            });
        }
        if sample.targets.len() != network.output_size() {
            return Err(GraphError::SampleShape {
                index,
                field: "targets",
                expected: network.output_size(),
                actual: sample.targets.len(),
            });
        }
    }
    Ok(())
}
