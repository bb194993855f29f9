//! BRKGA engine configuration.

use thiserror::Error;

/// Invalid engine configuration.
///
/// Every variant is fatal: the engine refuses to construct, no
/// generation runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("chromosome_length must be at least 1")]
    ZeroChromosomeLength,

    #[error("population_size must be at least 3")]
    PopulationTooSmall,

    #[error("elite_fraction ({elite}) + mutant_fraction ({mutants}) must be < 1.0")]
    FractionOverflow { elite: f64, mutants: f64 },

    #[error("elite ({elite}) + mutant ({mutants}) counts leave no room for crossover offspring in a population of {population}")]
    NoCrossoverSlots {
        elite: usize,
        mutants: usize,
        population: usize,
    },

    #[error("elite_fraction too small: no elite individuals")]
    EmptyElite,

    #[error("elite_fraction too large: elite slice covers the whole population")]
    FullElite,

    #[error("elite_inheritance_prob ({0}) must be within [0.0, 1.0]")]
    InheritanceProbOutOfRange(f64),

    #[error("num_islands must be at least 1")]
    ZeroIslands,

    #[error("num_threads must be at least 1")]
    ZeroThreads,

    #[error("migration_interval must be at least 1")]
    ZeroMigrationInterval,

    #[error("{incoming} incoming migrants do not fit in the {slots} non-elite slots of each island")]
    MigrantOverflow { incoming: usize, slots: usize },

    #[error("failed to build worker pool: {0}")]
    ThreadPool(String),
}

/// Configuration for the multi-island BRKGA engine.
///
/// # Parameters
///
/// The two population fractions must satisfy
/// `elite_fraction + mutant_fraction < 1.0`; the remainder of each
/// generation is filled by biased-crossover offspring.
///
/// # Examples
///
/// ```
/// use binpack_brkga::brkga::BrkgaConfig;
///
/// let config = BrkgaConfig::new(100) // 100 random keys
///     .with_population_size(200)
///     .with_elite_fraction(0.20)
///     .with_mutant_fraction(0.15)
///     .with_elite_inheritance_prob(0.70)
///     .with_num_islands(4);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BrkgaConfig {
    /// Number of random keys per chromosome.
    pub chromosome_length: usize,

    /// Population size of each island.
    pub population_size: usize,

    /// Fraction of each population preserved as elite (0.10–0.25 typical).
    pub elite_fraction: f64,

    /// Fraction of each population replaced by random mutants
    /// (0.10–0.30 typical).
    pub mutant_fraction: f64,

    /// Probability that offspring inherit the elite parent's allele
    /// during biased uniform crossover (0.55–0.80 typical).
    pub elite_inheritance_prob: f64,

    /// Number of independent populations evolved in parallel.
    pub num_islands: usize,

    /// Generations between elite migrations (ignored with one island).
    pub migration_interval: usize,

    /// Best individuals each island sends to every other island per
    /// migration.
    pub migration_count: usize,

    /// Worker threads for the engine's rayon pool.
    pub num_threads: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl BrkgaConfig {
    /// Creates a new configuration with the given chromosome length.
    pub fn new(chromosome_length: usize) -> Self {
        Self {
            chromosome_length,
            population_size: 100,
            elite_fraction: 0.20,
            mutant_fraction: 0.15,
            elite_inheritance_prob: 0.70,
            num_islands: 1,
            migration_interval: 50,
            migration_count: 2,
            num_threads: 1,
            seed: None,
        }
    }

    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_elite_fraction(mut self, f: f64) -> Self {
        self.elite_fraction = f;
        self
    }

    pub fn with_mutant_fraction(mut self, f: f64) -> Self {
        self.mutant_fraction = f;
        self
    }

    pub fn with_elite_inheritance_prob(mut self, p: f64) -> Self {
        self.elite_inheritance_prob = p;
        self
    }

    pub fn with_num_islands(mut self, k: usize) -> Self {
        self.num_islands = k;
        self
    }

    pub fn with_migration_interval(mut self, n: usize) -> Self {
        self.migration_interval = n;
        self
    }

    pub fn with_migration_count(mut self, n: usize) -> Self {
        self.migration_count = n;
        self
    }

    pub fn with_num_threads(mut self, n: usize) -> Self {
        self.num_threads = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of elite individuals per island, `ceil(elite_fraction * P)`.
    pub fn elite_count(&self) -> usize {
        (self.population_size as f64 * self.elite_fraction).ceil() as usize
    }

    /// Number of mutants injected per generation,
    /// `ceil(mutant_fraction * P)`.
    pub fn mutant_count(&self) -> usize {
        (self.population_size as f64 * self.mutant_fraction).ceil() as usize
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chromosome_length == 0 {
            return Err(ConfigError::ZeroChromosomeLength);
        }
        if self.population_size < 3 {
            return Err(ConfigError::PopulationTooSmall);
        }
        if self.elite_fraction + self.mutant_fraction >= 1.0 {
            return Err(ConfigError::FractionOverflow {
                elite: self.elite_fraction,
                mutants: self.mutant_fraction,
            });
        }
        if !(0.0..=1.0).contains(&self.elite_inheritance_prob) {
            return Err(ConfigError::InheritanceProbOutOfRange(
                self.elite_inheritance_prob,
            ));
        }
        let elite = self.elite_count();
        let mutants = self.mutant_count();
        if elite == 0 {
            return Err(ConfigError::EmptyElite);
        }
        if elite >= self.population_size {
            return Err(ConfigError::FullElite);
        }
        // Ceiling rounding can exhaust the population even when the raw
        // fractions sum below 1.0.
        if elite + mutants >= self.population_size {
            return Err(ConfigError::NoCrossoverSlots {
                elite,
                mutants,
                population: self.population_size,
            });
        }
        if self.num_islands == 0 {
            return Err(ConfigError::ZeroIslands);
        }
        if self.num_threads == 0 {
            return Err(ConfigError::ZeroThreads);
        }
        if self.migration_interval == 0 {
            return Err(ConfigError::ZeroMigrationInterval);
        }
        if self.num_islands > 1 {
            let incoming = (self.num_islands - 1) * self.migration_count;
            let slots = self.population_size - elite;
            if incoming > slots {
                return Err(ConfigError::MigrantOverflow { incoming, slots });
            }
        }
        Ok(())
    }
}
