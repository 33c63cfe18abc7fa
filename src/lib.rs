pub mod error;
pub mod activation;
pub mod graph;
pub mod network;
pub mod loss;
pub mod train;

// Convenience re-exports
pub use error::{GraphError, Result};
pub use activation::activation::Activation;
pub use graph::{Layer, Node, NodeId};
pub use network::network::{EdgeRef, Network};
pub use network::spec::NetworkSpec;
pub use loss::l1::L1Loss;
pub use train::coordinate_search::{score, train_network, CoordinateSearch, Step, TrainOutcome};
pub use train::sample::Sample;
pub use train::search_config::SearchConfig;
pub use train::sweep_stats::SweepStats;
