//! Biased random-key genetic algorithm for one-dimensional bin packing.
//!
//! Two layers:
//!
//! - **[`brkga`]**: the generic evolutionary engine. Chromosomes are
//!   vectors of `f64` in `[0, 1)`; `K` independent populations evolve in
//!   parallel with elite preservation, mutant injection, biased uniform
//!   crossover, and periodic elite migration between islands. The engine
//!   knows nothing about bin packing.
//! - **[`packing`]**: the problem side. An [`packing::Instance`] holds
//!   object weights and the box capacity; the
//!   [`packing::BinPackingDecoder`] interprets a `2N`-key chromosome as a
//!   packing order plus per-object placement rules and scores the
//!   resulting plan with Falkenauer's fitness.
//!
//! The `binpack` binary drives both: it reads an OR-Library instance,
//! evolves for a fixed number of generations, and reports the box count
//! of the best packing found.
//!
//! # Example
//!
//! ```
//! use binpack_brkga::brkga::{BrkgaConfig, BrkgaEngine};
//! use binpack_brkga::packing::{BinPackingDecoder, FitnessFunction, Instance};
//!
//! let instance = Instance::new(vec![4.0, 8.0, 1.0, 4.0], 10.0)?;
//! let decoder = BinPackingDecoder::new(instance, FitnessFunction::Falkenauer);
//!
//! let config = BrkgaConfig::new(decoder.chromosome_length())
//!     .with_population_size(50)
//!     .with_seed(42);
//! let mut engine = BrkgaEngine::new(decoder, config)?;
//!
//! for _ in 0..20 {
//!     engine.evolve();
//! }
//! assert!(engine.best_fitness() < 3.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod brkga;
pub mod packing;
