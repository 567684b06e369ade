//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::fitness::FitnessConfig;
use crate::error::TimetableError;

/// Configuration for the timetabling Genetic Algorithm.
///
/// Controls population size, generation count, operator rates,
/// scoring, and parallelism.
///
/// # Defaults
///
/// ```
/// use u_timetable::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.generations, 100);
/// assert_eq!(config.tournament_size, 3);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_timetable::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_generations(500)
///     .with_tournament_size(5)
///     .with_mutation_rate(0.2)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GaConfig {
    /// Number of timetables in the population.
    ///
    /// Constant across generations. Zero is accepted and makes the run
    /// terminate with an empty-population outcome.
    pub population_size: usize,

    /// Number of generations to run. Zero runs no generation at all.
    pub generations: usize,

    /// Contestants per tournament (drawn with replacement).
    ///
    /// - k=2: light pressure
    /// - k=3: moderate pressure (default)
    /// - k>5: strong pressure, risk of premature convergence
    pub tournament_size: usize,

    /// Probability that an offspring is mutated (0.0–1.0).
    pub mutation_rate: f64,

    /// Whether to evaluate timetables in parallel using rayon.
    ///
    /// Has no effect without the `parallel` feature. Results are identical
    /// either way; only evaluation is parallelized.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Scoring parameters.
    pub fitness: FitnessConfig,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 100,
            tournament_size: 3,
            mutation_rate: 0.1,
            parallel: true,
            seed: None,
            fitness: FitnessConfig::default(),
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the mutation rate, clamped to `[0, 1]`.
    ///
    /// NaN is kept as-is so that [`validate`](Self::validate) rejects it.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the scoring parameters.
    pub fn with_fitness(mut self, fitness: FitnessConfig) -> Self {
        self.fitness = fitness;
        self
    }

    /// Validates the configuration.
    ///
    /// Returns [`TimetableError::InvalidConfig`] describing the first
    /// invalid parameter.
    pub fn validate(&self) -> Result<(), TimetableError> {
        if self.tournament_size == 0 {
            return Err(TimetableError::InvalidConfig(
                "tournament_size must be at least 1".into(),
            ));
        }
        if !self.mutation_rate.is_finite() || !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(TimetableError::InvalidConfig(format!(
                "mutation_rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }
        Ok(())
    }
}
