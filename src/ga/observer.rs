//! Per-generation progress reporting.
//!
//! The runner never prints. Hosts that want progress output implement
//! [`GenerationObserver`], or pass a closure taking a
//! [`GenerationReport`].

use super::fitness::FitnessScore;

/// Progress snapshot emitted once per generation, after best tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationReport {
    /// Zero-based generation index.
    pub generation: usize,
    /// Total generations configured for the run.
    pub total_generations: usize,
    /// Best fitness in this generation's population.
    pub best_fitness: FitnessScore,
    /// Best fitness seen in any generation so far.
    pub best_overall: FitnessScore,
}

/// Receives a [`GenerationReport`] at the end of every tracked generation.
pub trait GenerationObserver {
    /// Called once per generation.
    fn on_generation(&mut self, report: &GenerationReport);
}

impl<F> GenerationObserver for F
where
    F: FnMut(&GenerationReport),
{
    fn on_generation(&mut self, report: &GenerationReport) {
        self(report)
    }
}

/// Observer that ignores every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl GenerationObserver for NoopObserver {
    fn on_generation(&mut self, _report: &GenerationReport) {}
}
