pub struct L1Loss;

impl L1Loss {
    /// Scalar L1: sum(|expected - predicted|), not averaged.
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        predicted.iter().zip(expected.iter())
            .map(|(p, y)| (y - p).abs())
            .sum()
    }
}
