use serde::{Serialize, Deserialize};

use crate::activation::activation::Activation;
use crate::error::{GraphError, Result};
use crate::network::network::{Network, HIDDEN_WIDTH, INITIAL_WEIGHT};

/// A serializable description of a network's topology.
///
/// Sizes are signed so that a negative value read from JSON surfaces as
/// `GraphError::NegativeSize` from `build()` rather than as a parse error.
/// Only the architecture is stored; weights are never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Declared input size, not counting the two bias inputs.
    pub input_size: i64,
    pub output_size: i64,
    /// Number of hidden layers.
    pub hidden_depth: i64,
    #[serde(default = "default_hidden_width")]
    pub hidden_width: i64,
    #[serde(default = "default_initial_weight")]
    pub initial_weight: f64,
    #[serde(default)]
    pub activation: Activation,
}

fn default_hidden_width() -> i64 {
    HIDDEN_WIDTH as i64
}

fn default_initial_weight() -> f64 {
    INITIAL_WEIGHT
}

impl NetworkSpec {
    /// Defaults: hidden width 3, initial weight 0.00001, scaled sigmoid.
    pub fn new(input_size: i64, output_size: i64, hidden_depth: i64) -> NetworkSpec {
        NetworkSpec {
            input_size,
            output_size,
            hidden_depth,
            hidden_width: default_hidden_width(),
            initial_weight: INITIAL_WEIGHT,
            activation: Activation::default(),
        }
    }

    /// Validates every size, then builds and links the network.
    pub fn build(&self) -> Result<Network> {
        let input_size = non_negative("input_size", self.input_size)?;
        let output_size = non_negative("output_size", self.output_size)?;
        let hidden_depth = non_negative("hidden_depth", self.hidden_depth)?;
        let hidden_width = non_negative("hidden_width", self.hidden_width)?;

        Ok(Network::with_topology(
            input_size,
            output_size,
            &vec![hidden_width; hidden_depth],
            self.initial_weight,
            self.activation,
        ))
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a `NetworkSpec` from a JSON file.
    pub fn load_json(path: &str) -> Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

fn non_negative(field: &'static str, value: i64) -> Result<usize> {
    usize::try_from(value).map_err(|_| GraphError::NegativeSize { field, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_sizes_are_rejected() {
        for spec in [
            NetworkSpec::new(-1, 1, 1),
            NetworkSpec::new(1, -1, 1),
            NetworkSpec::new(1, 1, -2),
        ] {
            let err = spec.build().unwrap_err();
            assert!(err.is_config(), "{err}");
        }

        let err = NetworkSpec::new(2, 1, -3).build().unwrap_err();
        assert!(matches!(err, GraphError::NegativeSize { field: "hidden_depth", value: -3 }));
    }

    #[test]
    fn missing_optional_fields_take_defaults() {
        let spec: NetworkSpec =
            serde_json::from_str(r#"{ "input_size": 2, "output_size": 1, "hidden_depth": 2 }"#).unwrap();
        assert_eq!(spec, NetworkSpec::new(2, 1, 2));
    }

    #[test]
    fn negative_size_in_json_fails_at_build() {
        let spec: NetworkSpec =
            serde_json::from_str(r#"{ "input_size": 2, "output_size": -1, "hidden_depth": 0 }"#).unwrap();
        assert!(matches!(spec.build(), Err(GraphError::NegativeSize { field: "output_size", .. })));
    }

    #[test]
    fn custom_hidden_width() {
        let mut spec = NetworkSpec::new(1, 1, 2);
        spec.hidden_width = 5;
        let net = spec.build().unwrap();
        let widths: Vec<usize> = net.layers().iter().map(|l| l.width()).collect();
        assert_eq!(widths, vec![3, 5, 5, 1]);
    }

    #[test]
    fn json_file_round_trip() {
        let path = std::env::temp_dir().join("ferrite_graph_spec_round_trip.json");
        let path = path.to_str().unwrap();
        let mut spec = NetworkSpec::new(4, 2, 1);
        spec.activation = Activation::Tanh;
        spec.save_json(path).unwrap();
        assert_eq!(NetworkSpec::load_json(path).unwrap(), spec);
        let _ = std::fs::remove_file(path);
    }
}
