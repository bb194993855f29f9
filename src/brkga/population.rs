//! Population bookkeeping for one island.

use super::config::BrkgaConfig;
use super::types::{Decoder, Individual};
use rand::Rng;
use rayon::prelude::*;

/// One island's population: a fixed-size vector of individuals, kept
/// sorted ascending by fitness after every evaluation.
///
/// The elite slice is the first [`BrkgaConfig::elite_count`] entries of
/// the sorted vector; everything after it is non-elite.
#[derive(Debug, Clone)]
pub(crate) struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    /// Samples a fresh population of `size` chromosomes with `keys`
    /// uniform genes each. Nothing is evaluated yet.
    pub(crate) fn random<R: Rng>(size: usize, keys: usize, rng: &mut R) -> Self {
        let individuals = (0..size)
            .map(|_| Individual::new(random_keys(keys, rng)))
            .collect();
        Self { individuals }
    }

    pub(crate) fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Best individual. Valid only after [`sort`](Self::sort).
    pub(crate) fn best(&self) -> &Individual {
        &self.individuals[0]
    }

    /// Decodes every individual that still carries the not-evaluated
    /// sentinel. Elite survivors and migrants keep their fitness.
    pub(crate) fn evaluate<D: Decoder>(&mut self, decoder: &D) {
        self.individuals
            .par_iter_mut()
            .filter(|ind| !ind.is_evaluated())
            .for_each(|ind| ind.fitness = decoder.decode(&ind.keys));
    }

    /// Sorts ascending by fitness (best first).
    pub(crate) fn sort(&mut self) {
        self.individuals.sort_by(|a, b| {
            a.fitness
                .partial_cmp(&b.fitness)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }

    /// Builds the next generation in place from the current sorted one:
    /// elite copy, mutant injection, biased uniform crossover.
    pub(crate) fn reproduce<R: Rng>(&mut self, config: &BrkgaConfig, rng: &mut R) {
        let pop_size = self.individuals.len();
        let elite_count = config.elite_count();
        let mutant_count = config.mutant_count();
        let crossover_count = pop_size - elite_count - mutant_count;
        let n = config.chromosome_length;

        let mut next_gen: Vec<Individual> = Vec::with_capacity(pop_size);

        // Phase 1: elite copy
        next_gen.extend_from_slice(&self.individuals[..elite_count]);

        // Phase 2: mutant injection
        for _ in 0..mutant_count {
            next_gen.push(Individual::new(random_keys(n, rng)));
        }

        // Phase 3: biased uniform crossover, one parent from the elite
        // slice and one from the remainder
        for _ in 0..crossover_count {
            let elite_idx = rng.random_range(0..elite_count);
            let nonelite_idx = rng.random_range(elite_count..pop_size);

            let keys: Vec<f64> = (0..n)
                .map(|j| {
                    if rng.random_range(0.0..1.0) < config.elite_inheritance_prob {
                        self.individuals[elite_idx].keys[j]
                    } else {
                        self.individuals[nonelite_idx].keys[j]
                    }
                })
                .collect();
            next_gen.push(Individual::new(keys));
        }

        self.individuals = next_gen;
    }

    /// Copies of the `count` best individuals, for migration.
    pub(crate) fn top(&self, count: usize) -> Vec<Individual> {
        self.individuals[..count].to_vec()
    }

    /// Overwrites the worst individuals with incoming migrants and
    /// re-sorts. Population size is unchanged.
    pub(crate) fn replace_worst(&mut self, migrants: Vec<Individual>) {
        let start = self.individuals.len() - migrants.len();
        for (slot, migrant) in self.individuals[start..].iter_mut().zip(migrants) {
            *slot = migrant;
        }
        self.sort();
    }
}

fn random_keys<R: Rng>(n: usize, rng: &mut R) -> Vec<f64> {
    (0..n).map(|_| rng.random_range(0.0..1.0)).collect()
}
