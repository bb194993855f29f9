//! Core types for the BRKGA engine.

/// Decoder trait for BRKGA.
///
/// This is the **only** trait a problem must implement to be optimized.
/// It maps a random-key chromosome (a slice of `f64` in `[0, 1)`) to a
/// fitness value. Lower fitness is better (minimization).
///
/// Decoding must be pure and deterministic: the same keys always produce
/// the same fitness. The engine decodes chromosomes concurrently across
/// islands and threads, so implementations must not rely on shared
/// mutable state.
///
/// # References
///
/// Bean (1994), Goncalves & Resende (2011)
pub trait Decoder: Send + Sync {
    /// Decodes a random-key chromosome and returns its fitness.
    ///
    /// # Arguments
    /// * `keys` - A slice of `f64` values in `[0.0, 1.0)`.
    ///   Length equals [`super::BrkgaConfig::chromosome_length`].
    fn decode(&self, keys: &[f64]) -> f64;
}

/// Fitness sentinel for a chromosome that has not been decoded yet.
pub(crate) const NOT_EVALUATED: f64 = f64::INFINITY;

/// A random-key chromosome paired with its decoded fitness.
///
/// Individuals carrying the not-yet-decoded sentinel are never ranked;
/// the population evaluates them before every sort.
#[derive(Debug, Clone)]
pub struct Individual {
    pub(crate) keys: Vec<f64>,
    pub(crate) fitness: f64,
}

impl Individual {
    pub(crate) fn new(keys: Vec<f64>) -> Self {
        Self {
            keys,
            fitness: NOT_EVALUATED,
        }
    }

    /// The chromosome's random keys.
    pub fn keys(&self) -> &[f64] {
        &self.keys
    }

    /// Decoded fitness. Lower is better.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    pub(crate) fn is_evaluated(&self) -> bool {
        self.fitness < NOT_EVALUATED
    }
}
