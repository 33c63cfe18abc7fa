use crate::activation::activation::Activation;
use crate::error::Result;
use crate::graph::node::{Node, NodeId};

/// An ordered, fixed-width group of nodes in the network arena.
///
/// Position within `nodes` is the position in the input vector (input layer)
/// or output vector (output layer).
#[derive(Debug, Clone)]
pub struct Layer {
    nodes: Vec<NodeId>,
}

impl Layer {
    /// Pushes `width` fresh nodes (result 0, no edges) onto `arena`.
    pub(crate) fn new(width: usize, arena: &mut Vec<Node>) -> Layer {
        let nodes = (0..width)
            .map(|_| {
                let id = NodeId(arena.len());
                arena.push(Node::new(id));
                id
            })
            .collect();
        Layer { nodes }
    }

    pub fn width(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Evaluates every node in positional order.
    pub(crate) fn evaluate_all(&self, arena: &mut [Node], activation: &Activation) -> Result<()> {
        for id in &self.nodes {
            // Everything before `id` is upstream; the node itself heads `rest`.
            let (upstream, rest) = arena.split_at_mut(id.0);
            rest[0].evaluate(upstream, activation)?;
        }
        Ok(())
    }

    /// Full bipartite link: every node of `next` gets one edge from every
    /// node of `self`, in this layer's order.
    pub(crate) fn link_to(&self, next: &Layer, arena: &mut [Node], initial_weight: f64) {
        for to in &next.nodes {
            for from in &self.nodes {
                arena[to.0].add_input(*from, initial_weight);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_layer_allocates_contiguous_nodes() {
        let mut arena = Vec::new();
        let a = Layer::new(2, &mut arena);
        let b = Layer::new(3, &mut arena);
        assert_eq!(a.nodes(), &[NodeId(0), NodeId(1)]);
        assert_eq!(b.nodes(), &[NodeId(2), NodeId(3), NodeId(4)]);
        assert!(arena.iter().all(|n| n.result == 0.0 && n.inputs().is_empty()));
    }

    #[test]
    fn link_connects_every_pair_once() {
        let mut arena = Vec::new();
        let a = Layer::new(4, &mut arena);
        let b = Layer::new(3, &mut arena);
        a.link_to(&b, &mut arena, 0.5);

        for id in b.nodes() {
            let froms: Vec<NodeId> = arena[id.0].inputs().iter().map(|e| e.from).collect();
            assert_eq!(froms, a.nodes());
            assert!(arena[id.0].inputs().iter().all(|e| e.weight == 0.5));
        }
        for id in a.nodes() {
            assert!(arena[id.0].inputs().is_empty());
        }
    }

    #[test]
    fn evaluate_all_reads_previous_layer() {
        let mut arena = Vec::new();
        let a = Layer::new(2, &mut arena);
        let b = Layer::new(1, &mut arena);
        a.link_to(&b, &mut arena, 1.0);
        arena[0].result = 2.0;
        arena[1].result = 4.0;

        a.evaluate_all(&mut arena, &Activation::Identity).unwrap();
        b.evaluate_all(&mut arena, &Activation::Identity).unwrap();
        assert_eq!(arena[2].result, 3.0);
    }
}
