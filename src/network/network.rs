use crate::activation::activation::Activation;
use crate::error::{GraphError, Result};
use crate::graph::layer::Layer;
use crate::graph::node::{Node, NodeId};

/// Constant inputs appended to every input vector.
pub const BIAS_INPUTS: [f64; 2] = [-1.0, 1.0];
/// Width of every hidden layer in the default topology.
pub const HIDDEN_WIDTH: usize = 3;
/// Weight given to each edge when layers are linked.
pub const INITIAL_WEIGHT: f64 = 0.00001;

/// Address of one edge weight: the owning (downstream) node and the edge's
/// position in that node's input list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeRef {
    pub layer: usize,
    pub node: NodeId,
    pub edge: usize,
}

/// A fully connected feed-forward graph: input layer, hidden layers, output
/// layer. Nodes live in one arena; layers hold their ids.
#[derive(Debug, Clone)]
pub struct Network {
    nodes: Vec<Node>,
    layers: Vec<Layer>,
    input_size: usize,
    output_size: usize,
    activation: Activation,
}

impl Network {
    /// Builds the default topology: `input_size + 2` inputs, `hidden_depth`
    /// layers of width 3, `output_size` outputs, scaled-sigmoid activation.
    pub fn new(input_size: usize, output_size: usize, hidden_depth: usize) -> Network {
        Network::with_topology(
            input_size,
            output_size,
            &vec![HIDDEN_WIDTH; hidden_depth],
            INITIAL_WEIGHT,
            Activation::default(),
        )
    }

    /// Builds and links every layer once, in order.
    pub fn with_topology(
        input_size: usize,
        output_size: usize,
        hidden_widths: &[usize],
        initial_weight: f64,
        activation: Activation,
    ) -> Network {
        let mut nodes = Vec::new();
        let mut layers = Vec::with_capacity(hidden_widths.len() + 2);

        layers.push(Layer::new(input_size + BIAS_INPUTS.len(), &mut nodes));
        for &width in hidden_widths {
            layers.push(Layer::new(width, &mut nodes));
        }
        layers.push(Layer::new(output_size, &mut nodes));

        for pair in layers.windows(2) {
            pair[0].link_to(&pair[1], &mut nodes, initial_weight);
        }

        Network { nodes, layers, input_size, output_size, activation }
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn output_size(&self) -> usize {
        self.output_size
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Runs one forward pass and returns the output layer's results.
    ///
    /// Every node's result is reset to 0 before returning, on success and on
    /// error alike, so the network carries no state between calls.
    pub fn evaluate(&mut self, inputs: &[f64]) -> Result<Vec<f64>> {
        if inputs.len() != self.input_size {
            return Err(GraphError::InputSize { expected: self.input_size, actual: inputs.len() });
        }

        let outcome = self.forward(inputs);
        for node in &mut self.nodes {
            node.result = 0.0;
        }
        outcome
    }

    fn forward(&mut self, inputs: &[f64]) -> Result<Vec<f64>> {
        let bias = BIAS_INPUTS;
        let local = inputs.iter().chain(bias.iter());
        for (id, &value) in self.layers[0].nodes().iter().zip(local) {
            self.nodes[id.0].result = value;
        }

        for layer in &self.layers {
            layer.evaluate_all(&mut self.nodes, &self.activation)?;
        }

        let output = self.layers.last().map(|layer| {
            layer.nodes().iter().map(|id| self.nodes[id.0].result).collect()
        });
        Ok(output.unwrap_or_default())
    }

    /// Every edge in sweep order: layer, then node, then insertion order.
    pub fn edges(&self) -> Vec<EdgeRef> {
        let mut refs = Vec::new();
        for (layer_idx, layer) in self.layers.iter().enumerate() {
            for &id in layer.nodes() {
                for edge in 0..self.nodes[id.0].inputs().len() {
                    refs.push(EdgeRef { layer: layer_idx, node: id, edge });
                }
            }
        }
        refs
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.inputs().len()).sum()
    }

    pub fn weight(&self, edge: EdgeRef) -> Option<f64> {
        self.nodes.get(edge.node.0)?.inputs().get(edge.edge).map(|e| e.weight)
    }

    /// Overwrites one weight. Returns the previous value, or `None` if the
    /// edge does not exist.
    pub fn set_weight(&mut self, edge: EdgeRef, weight: f64) -> Option<f64> {
        let slot = self.nodes.get_mut(edge.node.0)?.inputs_mut().get_mut(edge.edge)?;
        Some(std::mem::replace(&mut slot.weight, weight))
    }

    /// Sets every edge weight in the network to `weight`.
    pub fn fill_weights(&mut self, weight: f64) {
        for node in &mut self.nodes {
            for edge in node.inputs_mut() {
                edge.weight = weight;
            }
        }
    }

    /// Snapshot of all weights in sweep order.
    pub fn weights(&self) -> Vec<f64> {
        self.edges().into_iter().filter_map(|e| self.weight(e)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_topology_shape() {
        let net = Network::new(2, 1, 2);
        let widths: Vec<usize> = net.layers().iter().map(|l| l.width()).collect();
        assert_eq!(widths, vec![4, 3, 3, 1]);
        assert_eq!(net.edge_count(), 4 * 3 + 3 * 3 + 3);
        assert!(net.weights().iter().all(|&w| w == INITIAL_WEIGHT));
    }

    #[test]
    fn zero_depth_links_input_straight_to_output() {
        let net = Network::new(3, 2, 0);
        assert_eq!(net.layers().len(), 2);
        for &id in net.layers()[1].nodes() {
            assert_eq!(net.node(id).unwrap().inputs().len(), 5);
        }
    }

    #[test]
    fn evaluate_rejects_wrong_input_length() {
        let mut net = Network::new(2, 1, 1);
        let err = net.evaluate(&[1.0]).unwrap_err();
        assert!(matches!(err, GraphError::InputSize { expected: 2, actual: 1 }));
        assert!(err.is_config());
    }

    #[test]
    fn evaluate_resets_every_result() {
        let mut net = Network::new(2, 1, 2);
        net.fill_weights(0.7);
        net.evaluate(&[0.3, 0.9]).unwrap();
        for layer in net.layers() {
            for &id in layer.nodes() {
                assert_eq!(net.node(id).unwrap().result, 0.0);
            }
        }
    }

    #[test]
    fn hand_computed_single_path() {
        // 1 input + 2 bias -> 1 output, identity activation, weight 1:
        // output = (x + -1 + 1) / 3
        let mut net = Network::with_topology(1, 1, &[], 1.0, Activation::Identity);
        let out = net.evaluate(&[0.6]).unwrap();
        assert!((out[0] - 0.2).abs() < 1e-12);
    }

    #[test]
    fn set_weight_returns_previous_value() {
        let mut net = Network::new(1, 1, 0);
        let edge = net.edges()[1];
        assert_eq!(net.set_weight(edge, 2.5), Some(INITIAL_WEIGHT));
        assert_eq!(net.weight(edge), Some(2.5));

        let missing = EdgeRef { layer: 1, node: edge.node, edge: 99 };
        assert_eq!(net.set_weight(missing, 1.0), None);
    }

    #[test]
    fn divergence_resets_state_too() {
        let mut net = Network::with_topology(1, 1, &[2], f64::MAX, Activation::Identity);
        let err = net.evaluate(&[f64::MAX]).unwrap_err();
        assert!(err.is_divergence());
        assert!(net.layers().iter().flat_map(|l| l.nodes()).all(|&id| net.node(id).unwrap().result == 0.0));
    }
}
