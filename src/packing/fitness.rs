//! Packing fitness functions.

use super::solution::PackingSolution;

/// Exponent rewarding fuller boxes. Falkenauer's experiments use 2.
const FALKENAUER_EXPONENT: f64 = 2.0;

/// Scoring function for a decoded packing. Lower is better.
///
/// # References
///
/// Falkenauer & Delchambre (1992), "A genetic algorithm for bin packing
/// and line balancing"
#[derive(Debug, Clone, Copy, Default)]
pub enum FitnessFunction {
    /// `boxes_used - (Σ fill_i^k) / boxes_used` with k = 2.
    ///
    /// The fill term lies in (0, 1], so any packing with fewer boxes
    /// scores strictly below any packing with more; among packings
    /// with the same box count, fuller boxes win.
    #[default]
    Falkenauer,
}

impl FitnessFunction {
    /// Scores a completed packing. Pure; safe to call concurrently.
    pub fn score(&self, solution: &PackingSolution) -> f64 {
        match self {
            FitnessFunction::Falkenauer => {
                let boxes = solution.boxes_used();
                if boxes == 0 {
                    return 0.0;
                }
                let fill_sum: f64 = (0..boxes)
                    .map(|b| solution.fill_fraction(b).powf(FALKENAUER_EXPONENT))
                    .sum();
                boxes as f64 - fill_sum / boxes as f64
            }
        }
    }
}
