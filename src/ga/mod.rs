//! Genetic Algorithm engine for course timetabling.
//!
//! A generational GA over directly-encoded timetables: each chromosome is
//! the list of lectures with their teacher, room, and time slot.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, generations, rates)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best timetable, termination reason, fitness history
//! - [`FitnessEvaluator`]: Constraint scoring with configurable [`PenaltyWeights`]
//! - [`GenerationObserver`]: Per-generation progress hook
//!
//! # Submodules
//!
//! - [`initializer`]: Random timetable construction
//! - [`selection`]: Tournament selection
//! - [`operators`]: Single-point crossover and field mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Colorni, Dorigo & Maniezzo (1992), "A Genetic Algorithm to Solve the
//!   Timetable Problem"

mod config;
mod fitness;
pub mod initializer;
mod observer;
pub mod operators;
mod runner;
pub mod selection;

pub use config::GaConfig;
pub use fitness::{evaluate, FitnessConfig, FitnessEvaluator, FitnessReport, FitnessScore, PenaltyWeights};
pub use observer::{GenerationObserver, GenerationReport, NoopObserver};
pub use runner::{GaResult, GaRunner, Termination};
pub use selection::ScoredIndividual;
