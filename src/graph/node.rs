use std::fmt;

use crate::activation::activation::Activation;
use crate::error::{GraphError, Result};

/// Stable index of a node in the network's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Weighted edge owned by the downstream node.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub from: NodeId,
    pub weight: f64,
}

#[derive(Debug, Clone)]
pub struct Node {
    pub id: NodeId,
    /// Running value; reset to 0 after every forward pass.
    pub result: f64,
    inputs: Vec<Edge>,
}

impl Node {
    pub fn new(id: NodeId) -> Node {
        Node { id, result: 0.0, inputs: Vec::new() }
    }

    pub fn inputs(&self) -> &[Edge] {
        &self.inputs
    }

    pub fn inputs_mut(&mut self) -> &mut [Edge] {
        &mut self.inputs
    }

    /// Appends one edge. Calling this twice for the same upstream node
    /// creates two edges; they are never merged.
    pub fn add_input(&mut self, from: NodeId, weight: f64) {
        self.inputs.push(Edge { from, weight });
    }

    /// Accumulates `activation(weight * upstream.result)` over every edge in
    /// insertion order, then divides by the edge count.
    ///
    /// `upstream` is the slice of the arena that precedes this node; every
    /// edge must point into it. A node with no edges keeps whatever result
    /// was assigned to it.
    pub fn evaluate(&mut self, upstream: &[Node], activation: &Activation) -> Result<()> {
        if self.inputs.is_empty() {
            return Ok(());
        }

        for edge in &self.inputs {
            let source = upstream.get(edge.from.0).ok_or(GraphError::DanglingEdge {
                node: self.id,
                from: edge.from,
            })?;
            self.result += activation.function(edge.weight * source.result);

            if !self.result.is_finite() {
                return Err(GraphError::NumericDivergence { node: self.id, value: self.result });
            }
        }

        self.result /= self.inputs.len().max(1) as f64;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(id: usize, result: f64) -> Node {
        let mut n = Node::new(NodeId(id));
        n.result = result;
        n
    }

    #[test]
    fn averages_activated_inputs() {
        let upstream = vec![source(0, 1.0), source(1, 3.0)];
        let mut node = Node::new(NodeId(2));
        node.add_input(NodeId(0), 2.0);
        node.add_input(NodeId(1), 1.0);

        node.evaluate(&upstream, &Activation::Identity).unwrap();
        assert_eq!(node.result, (2.0 + 3.0) / 2.0);
    }

    #[test]
    fn node_without_inputs_keeps_assigned_result() {
        let mut node = Node::new(NodeId(0));
        node.result = 0.75;
        node.evaluate(&[], &Activation::ScaledSigmoid).unwrap();
        assert_eq!(node.result, 0.75);
    }

    #[test]
    fn duplicate_edges_are_kept_separate() {
        let upstream = vec![source(0, 1.0)];
        let mut node = Node::new(NodeId(1));
        node.add_input(NodeId(0), 1.0);
        node.add_input(NodeId(0), 3.0);
        assert_eq!(node.inputs().len(), 2);

        node.evaluate(&upstream, &Activation::Identity).unwrap();
        assert_eq!(node.result, 2.0);
    }

    #[test]
    fn overflow_is_reported_as_divergence() {
        let upstream = vec![source(0, f64::MAX), source(1, f64::MAX)];
        let mut node = Node::new(NodeId(2));
        node.add_input(NodeId(0), 1.0);
        node.add_input(NodeId(1), 1.0);

        let err = node.evaluate(&upstream, &Activation::Identity).unwrap_err();
        assert!(err.is_divergence());
    }

    #[test]
    fn nan_is_reported_as_divergence() {
        let upstream = vec![source(0, 0.0)];
        let mut node = Node::new(NodeId(1));
        node.add_input(NodeId(0), f64::INFINITY);

        let err = node.evaluate(&upstream, &Activation::ScaledSigmoid).unwrap_err();
        assert!(matches!(err, GraphError::NumericDivergence { node: NodeId(1), value } if value.is_nan()));
    }

    #[test]
    fn edge_outside_upstream_is_rejected() {
        let mut node = Node::new(NodeId(0));
        node.add_input(NodeId(5), 1.0);
        let err = node.evaluate(&[], &Activation::Identity).unwrap_err();
        assert!(matches!(err, GraphError::DanglingEdge { .. }));
    }
}
