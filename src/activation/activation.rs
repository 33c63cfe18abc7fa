use serde::{Serialize, Deserialize};
use std::f64::consts::E;

/// Scalar transform applied to every weighted edge during evaluation.
///
/// One value is owned by the `Network` and handed to each node by reference;
/// nodes never carry their own copy.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activation {
    /// `10 / (1 + e^-x) - 5`, bounded to (-5, 5). Odd, so `f(0) == 0`.
    #[default]
    ScaledSigmoid,
    Tanh,
    /// Unbounded; lets large weights overflow to infinity.
    Identity,
}

impl Activation {
    pub fn function(&self, x: f64) -> f64 {
        match self {
            Activation::ScaledSigmoid => 10.0 / (1.0 + E.powf(-x)) - 5.0,
            Activation::Tanh => x.tanh(),
            Activation::Identity => x,
        }
    }
}
