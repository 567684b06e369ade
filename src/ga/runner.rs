//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → best tracking → selection → crossover →
//! mutation → replacement → repeat.
//!
//! Each generation is a barrier: every timetable is scored before
//! selection starts, and the whole next population is built before the
//! following generation is evaluated. Only evaluation runs in parallel;
//! every random decision is drawn sequentially from the one injected RNG,
//! so a seeded run gives the same result with or without parallelism.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info, warn};

use super::config::GaConfig;
use super::fitness::{FitnessEvaluator, FitnessScore};
use super::initializer::initialize_population;
use super::observer::{GenerationObserver, GenerationReport, NoopObserver};
use super::operators::{mutate, single_point_crossover};
use super::selection::{select_parents, ScoredIndividual};
use crate::error::{TimetableError, TimetableResult};
use crate::models::{Chromosome, TimetableDomain};
use crate::random::rng_for;

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// All configured generations ran (possibly zero).
    Completed,
    /// The cancellation flag was raised between generations.
    Cancelled,
    /// The population was empty when a generation began.
    EmptyPopulation {
        /// Generation at which the empty population was found.
        generation: usize,
    },
}

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Best timetable seen in any generation, if any generation was scored.
    pub best: Option<Chromosome>,

    /// Fitness of `best`.
    pub best_fitness: Option<FitnessScore>,

    /// Number of generations fully executed.
    pub generations: usize,

    /// Why the run stopped.
    pub termination: Termination,

    /// Best-so-far fitness after each executed generation. Never decreases.
    pub fitness_history: Vec<FitnessScore>,
}

impl GaResult {
    /// Whether the run stopped because the population was empty.
    pub fn is_failure(&self) -> bool {
        matches!(self.termination, Termination::EmptyPopulation { .. })
    }

    /// Whether the run was cancelled externally.
    pub fn cancelled(&self) -> bool {
        self.termination == Termination::Cancelled
    }

    /// The fatal condition that stopped the run, if any.
    ///
    /// A low-fitness result is not a failure; only an empty population is.
    pub fn failure(&self) -> Option<TimetableError> {
        match self.termination {
            Termination::EmptyPopulation { generation } => {
                Some(TimetableError::EmptyPopulation { generation })
            }
            _ => None,
        }
    }

    /// Consumes the result, returning the best timetable.
    ///
    /// `None` means no timetable was found: zero generations, an empty
    /// population, or cancellation before the first generation.
    pub fn into_best(self) -> Option<Chromosome> {
        self.best
    }
}

/// Executes the timetabling GA.
///
/// # Usage
///
/// ```
/// use u_timetable::ga::{GaConfig, GaRunner};
/// use u_timetable::models::{Room, TimetableDomain};
///
/// let domain = TimetableDomain::new()
///     .with_courses(["Math", "Physics"])
///     .with_teachers(["Dr. Alpha", "Prof. Beta"])
///     .with_rooms([Room::new("Room101", 30)])
///     .with_time_slots(["Mon 9-10", "Mon 10-11"]);
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_generations(10)
///     .with_seed(42);
///
/// let result = GaRunner::run(&domain, &config).unwrap();
/// assert_eq!(result.generations, 10);
/// assert!(result.best.is_some());
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with the configured seed and no progress observer.
    ///
    /// # Errors
    /// [`TimetableError::InvalidConfig`] if `config` fails validation.
    pub fn run(domain: &TimetableDomain, config: &GaConfig) -> TimetableResult<GaResult> {
        Self::run_with_cancel(domain, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the GA stops
    /// before the next generation and returns the best timetable found so
    /// far.
    pub fn run_with_cancel(
        domain: &TimetableDomain,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> TimetableResult<GaResult> {
        let mut rng = rng_for(config.seed);
        Self::run_with(
            domain,
            config,
            &mut rng,
            &mut NoopObserver,
            cancel.as_deref(),
        )
    }

    /// Runs the GA with an injected RNG, progress observer, and optional
    /// cancellation flag.
    ///
    /// `config.seed` is ignored; every stochastic operator draws from `rng`.
    pub fn run_with<R, O>(
        domain: &TimetableDomain,
        config: &GaConfig,
        rng: &mut R,
        observer: &mut O,
        cancel: Option<&AtomicBool>,
    ) -> TimetableResult<GaResult>
    where
        R: Rng,
        O: GenerationObserver + ?Sized,
    {
        config.validate()?;

        let evaluator = FitnessEvaluator::new(config.fitness);
        info!(
            population_size = config.population_size,
            generations = config.generations,
            lectures = domain.total_lectures(),
            "starting timetable GA"
        );

        // 1. Initialize population
        let mut population = initialize_population(domain, config.population_size, rng);

        let mut best: Option<ScoredIndividual> = None;
        let mut fitness_history = Vec::with_capacity(config.generations);
        let mut termination = Termination::Completed;
        let mut executed = 0usize;

        // 2. Evolutionary loop
        for generation in 0..config.generations {
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                termination = Termination::Cancelled;
                break;
            }

            if population.is_empty() {
                warn!(generation, "population is empty, stopping");
                termination = Termination::EmptyPopulation { generation };
                break;
            }

            // Evaluate
            let scored = evaluate_population(&evaluator, domain, population, config.parallel);

            // Track best (strict improvement only)
            let gen_best = &scored[find_best(&scored)];
            if best.as_ref().map_or(true, |b| gen_best.fitness > b.fitness) {
                best = Some(gen_best.clone());
            }
            let best_overall = best.as_ref().map_or(gen_best.fitness, |b| b.fitness);
            fitness_history.push(best_overall);

            debug!(
                generation,
                best_fitness = gen_best.fitness,
                best_overall,
                "generation evaluated"
            );
            observer.on_generation(&GenerationReport {
                generation,
                total_generations: config.generations,
                best_fitness: gen_best.fitness,
                best_overall,
            });

            // Select, recombine, replace
            let parents = select_parents(
                &scored,
                config.tournament_size,
                config.population_size,
                rng,
            );
            population = breed(&scored, &parents, domain, config, rng);
            executed = generation + 1;
        }

        let best_fitness = best.as_ref().map(|b| b.fitness);
        info!(
            generations = executed,
            ?best_fitness,
            ?termination,
            "timetable GA finished"
        );

        Ok(GaResult {
            best: best.map(|b| b.chromosome),
            best_fitness,
            generations: executed,
            termination,
            fitness_history,
        })
    }
}

/// Score every timetable, consuming the population.
#[cfg(feature = "parallel")]
fn evaluate_population(
    evaluator: &FitnessEvaluator,
    domain: &TimetableDomain,
    population: Vec<Chromosome>,
    parallel: bool,
) -> Vec<ScoredIndividual> {
    if parallel {
        population
            .into_par_iter()
            .map(|c| score(evaluator, domain, c))
            .collect()
    } else {
        population
            .into_iter()
            .map(|c| score(evaluator, domain, c))
            .collect()
    }
}

/// Score every timetable, consuming the population.
#[cfg(not(feature = "parallel"))]
fn evaluate_population(
    evaluator: &FitnessEvaluator,
    domain: &TimetableDomain,
    population: Vec<Chromosome>,
    _parallel: bool,
) -> Vec<ScoredIndividual> {
    population
        .into_iter()
        .map(|c| score(evaluator, domain, c))
        .collect()
}

fn score(
    evaluator: &FitnessEvaluator,
    domain: &TimetableDomain,
    chromosome: Chromosome,
) -> ScoredIndividual {
    let fitness = evaluator.evaluate(&chromosome, domain);
    ScoredIndividual {
        chromosome,
        fitness,
    }
}

/// Index of the highest-fitness individual; the first one wins ties.
fn find_best(scored: &[ScoredIndividual]) -> usize {
    let mut best = 0;
    for (i, ind) in scored.iter().enumerate().skip(1) {
        if ind.fitness > scored[best].fitness {
            best = i;
        }
    }
    best
}

/// Build the next population from consecutive parent pairs.
///
/// Pairs are `(parents[0], parents[1])`, `(parents[2], parents[3])`, ...
/// When the count is odd, the last parent is paired with itself. Each pair
/// yields two children; the second child of the last pair is dropped if it
/// would exceed `population_size`, so the result has exactly
/// `population_size` members.
fn breed<R: Rng>(
    scored: &[ScoredIndividual],
    parents: &[usize],
    domain: &TimetableDomain,
    config: &GaConfig,
    rng: &mut R,
) -> Vec<Chromosome> {
    let target = config.population_size;
    let mut next = Vec::with_capacity(target);

    for pair in parents.chunks(2) {
        let first = &scored[pair[0]].chromosome;
        let second = pair.get(1).map_or(first, |&i| &scored[i].chromosome);

        let (mut child1, mut child2) = single_point_crossover(first, second, rng);
        mutate(&mut child1, domain, config.mutation_rate, rng);
        mutate(&mut child2, domain, config.mutation_rate, rng);

        next.push(child1);
        if next.len() < target {
            next.push(child2);
        }
    }

    next
}

// ============================================================================
// Tests
// ============================================================================
