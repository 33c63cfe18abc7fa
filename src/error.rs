use crate::graph::node::NodeId;

/// Everything that can go wrong while building, evaluating or training a
/// network.
///
/// Two kinds matter to callers: numeric divergence (fatal, aborts the whole
/// evaluation or training run) and configuration errors (raised before any
/// mutation). Use `is_divergence()` / `is_config()` to tell them apart.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// A node's accumulated result became NaN or infinite.
    #[error("numeric divergence at node {node}: result became {value}")]
    NumericDivergence { node: NodeId, value: f64 },

    #[error("input vector has length {actual}, network expects {expected}")]
    InputSize { expected: usize, actual: usize },

    #[error("`{field}` must not be negative (got {value})")]
    NegativeSize { field: &'static str, value: i64 },

    #[error("sample {index}: {field} has length {actual}, expected {expected}")]
    SampleShape {
        index: usize,
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// An edge points at a node that does not come before its owner in the arena.
    #[error("node {node} has an edge from {from}, which is not upstream of it")]
    DanglingEdge { node: NodeId, from: NodeId },

    #[error("node {node} has no edge at position {edge}")]
    UnknownEdge { node: NodeId, edge: usize },

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    pub fn is_divergence(&self) -> bool {
        matches!(self, GraphError::NumericDivergence { .. })
    }

    /// Input-size, negative-size and sample-shape errors.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            GraphError::InputSize { .. }
                | GraphError::NegativeSize { .. }
                | GraphError::SampleShape { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
