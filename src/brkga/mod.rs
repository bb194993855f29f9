//! Biased Random-Key Genetic Algorithm (BRKGA).
//!
//! BRKGA separates the evolutionary engine from the problem by using a
//! random-key representation: chromosomes are vectors of `f64` in `[0, 1)`,
//! and a problem-provided **decoder** maps keys to a solution fitness.
//!
//! The engine handles population management (elite copy, mutant injection,
//! biased crossover) and evolves `K` independent populations in parallel,
//! exchanging their best individuals at a fixed interval. The problem side
//! implements only [`Decoder`].
//!
//! # References
//!
//! - Bean (1994), "Genetic algorithms and random keys for sequencing and optimization"
//! - Goncalves & Resende (2011), "Biased random-key genetic algorithms for
//!   combinatorial optimization", *J. Heuristics* 17(5), 487–525

mod config;
mod engine;
mod population;
mod types;

pub use config::{BrkgaConfig, ConfigError};
pub use engine::BrkgaEngine;
pub use types::{Decoder, Individual};
