pub mod l1;

pub use l1::L1Loss;
