pub mod coordinate_search;
pub mod sample;
pub mod search_config;
pub mod sweep_stats;

pub use coordinate_search::{score, train_network, CoordinateSearch, Step, TrainOutcome};
pub use sample::{load_samples_json, validate_samples, xor_like_samples, Sample};
pub use search_config::SearchConfig;
pub use sweep_stats::SweepStats;
