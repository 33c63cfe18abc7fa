pub mod node;
pub mod layer;

pub use node::{Edge, Node, NodeId};
pub use layer::Layer;
