//! Multi-island BRKGA engine.

use super::config::{BrkgaConfig, ConfigError};
use super::population::Population;
use super::types::{Decoder, Individual};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use rayon::ThreadPool;
use tracing::debug;

// Decorrelates per-island RNG streams derived from one master seed.
const SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// One independent population together with its own RNG stream.
///
/// Owning the stream per island keeps runs reproducible under a fixed
/// seed regardless of how the pool schedules the islands.
struct Island {
    population: Population,
    rng: StdRng,
}

/// The BRKGA engine: `K` islands evolved one generation per
/// [`evolve`](BrkgaEngine::evolve) call, with periodic elite migration
/// between them.
///
/// The engine is driven externally; it has no stopping rule of its own.
/// The caller decides how many generations to run and then reads the
/// best chromosome found across all islands.
///
/// # Usage
///
/// ```ignore
/// let mut engine = BrkgaEngine::new(decoder, config)?;
/// for _ in 0..generations {
///     engine.evolve();
/// }
/// println!("{}", engine.best_fitness());
/// ```
pub struct BrkgaEngine<D: Decoder> {
    decoder: D,
    config: BrkgaConfig,
    islands: Vec<Island>,
    pool: ThreadPool,
    generation: usize,
}

impl<D: Decoder> BrkgaEngine<D> {
    /// Builds the engine: validates the configuration, spins up the
    /// worker pool, samples every island's initial population, and
    /// evaluates and sorts each one.
    pub fn new(decoder: D, config: BrkgaConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.num_threads)
            .build()
            .map_err(|e| ConfigError::ThreadPool(e.to_string()))?;

        let master_seed = config.seed.unwrap_or_else(rand::random);
        let mut islands: Vec<Island> = (0..config.num_islands)
            .map(|i| {
                let mut rng = StdRng::seed_from_u64(
                    master_seed.wrapping_add((i as u64).wrapping_mul(SEED_STRIDE)),
                );
                let population =
                    Population::random(config.population_size, config.chromosome_length, &mut rng);
                Island { population, rng }
            })
            .collect();

        let decoder_ref = &decoder;
        pool.install(|| {
            islands.par_iter_mut().for_each(|island| {
                island.population.evaluate(decoder_ref);
                island.population.sort();
            });
        });

        Ok(Self {
            decoder,
            config,
            islands,
            pool,
            generation: 0,
        })
    }

    /// Advances every island by one generation.
    ///
    /// Islands step independently in parallel (reproduce, evaluate the
    /// new chromosomes, sort); the call blocks until all of them have
    /// finished. On migration-interval generations with more than one
    /// island, the synchronized elite exchange runs after every island
    /// has completed its step.
    pub fn evolve(&mut self) {
        let decoder = &self.decoder;
        let config = &self.config;
        let islands = &mut self.islands;

        self.pool.install(|| {
            islands.par_iter_mut().for_each(|island| {
                island.population.reproduce(config, &mut island.rng);
                island.population.evaluate(decoder);
                island.population.sort();
            });
        });

        self.generation += 1;

        if self.config.num_islands > 1 && self.generation % self.config.migration_interval == 0 {
            self.migrate();
        }

        debug!(
            generation = self.generation,
            best = self.best_fitness(),
            "generation complete"
        );
    }

    /// Elite exchange: every island receives a copy of the best
    /// `migration_count` individuals of every other island, replacing
    /// its worst. Individuals are copied, never shared.
    fn migrate(&mut self) {
        let count = self.config.migration_count;
        if count == 0 {
            return;
        }

        let tops: Vec<Vec<Individual>> = self
            .islands
            .iter()
            .map(|island| island.population.top(count))
            .collect();

        for (i, island) in self.islands.iter_mut().enumerate() {
            let incoming: Vec<Individual> = tops
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .flat_map(|(_, top)| top.iter().cloned())
                .collect();
            island.population.replace_worst(incoming);
        }

        debug!(
            generation = self.generation,
            migrants = count,
            "elite migration"
        );
    }

    /// Best individual across all islands.
    fn best_individual(&self) -> &Individual {
        let mut best = self.islands[0].population.best();
        for island in &self.islands[1..] {
            let candidate = island.population.best();
            if candidate.fitness() < best.fitness() {
                best = candidate;
            }
        }
        best
    }

    /// Random keys of the best individual across all islands.
    pub fn best_chromosome(&self) -> &[f64] {
        self.best_individual().keys()
    }

    /// Fitness of the best individual across all islands.
    pub fn best_fitness(&self) -> f64 {
        self.best_individual().fitness()
    }

    /// Generations evolved so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// The decoder the engine was built with.
    pub fn decoder(&self) -> &D {
        &self.decoder
    }
}
