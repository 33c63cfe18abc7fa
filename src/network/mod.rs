pub mod network;
pub mod spec;

pub use network::{EdgeRef, Network};
pub use spec::NetworkSpec;
