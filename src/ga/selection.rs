//! Tournament selection.
//!
//! Selection determines which timetables are chosen as parents for
//! crossover. Higher fitness is better.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use rand::Rng;

use super::fitness::FitnessScore;
use crate::models::Chromosome;

/// A chromosome paired with its score for one generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredIndividual {
    /// The timetable.
    pub chromosome: Chromosome,
    /// Its fitness (higher is better).
    pub fitness: FitnessScore,
}

/// Runs one tournament and returns the winner's index.
///
/// Draws `k` indices uniformly **with replacement**. The first contestant
/// is kept unless a later one has strictly greater fitness, so ties go to
/// the earliest draw.
///
/// # Complexity
/// O(k)
///
/// # Panics
/// Panics if `population` is empty.
pub fn tournament<R: Rng>(population: &[ScoredIndividual], k: usize, rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );
    let k = k.max(1);
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if population[idx].fitness > population[best_idx].fitness {
            best_idx = idx;
        }
    }
    best_idx
}

/// Runs `count` independent tournaments of size `k`.
///
/// Returns parent indices into `population`; the same individual may be
/// chosen several times. Returns an empty vector for an empty population.
pub fn select_parents<R: Rng>(
    population: &[ScoredIndividual],
    k: usize,
    count: usize,
    rng: &mut R,
) -> Vec<usize> {
    if population.is_empty() {
        return Vec::new();
    }
    (0..count).map(|_| tournament(population, k, rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn make_population(fitnesses: &[FitnessScore]) -> Vec<ScoredIndividual> {
        fitnesses
            .iter()
            .map(|&fitness| ScoredIndividual {
                chromosome: Chromosome::new(),
                fitness,
            })
            .collect()
    }

    #[test]
    fn test_tournament_favors_best() {
        let pop = make_population(&[100, 500, 1000, 200]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            counts[tournament(&pop, 4, &mut rng)] += 1;
        }
        // P(best drawn at least once in 4 draws) = 1 - (3/4)^4 ≈ 0.68
        let best_count = counts[2];
        assert!(
            best_count > 6000,
            "expected best to be selected >60% of the time, got {best_count}/{n}"
        );
    }

    #[test]
    fn test_tournament_size_1_is_random() {
        let pop = make_population(&[100, 500, 1000, 200]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            counts[tournament(&pop, 1, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 1500, "expected uniform, got counts: {counts:?}");
        }
    }

    #[test]
    fn test_tournament_size_0_treated_as_1() {
        let pop = make_population(&[1, 2]);
        let mut rng = create_rng(42);
        let idx = tournament(&pop, 0, &mut rng);
        assert!(idx < 2);
    }

    #[test]
    fn test_ties_keep_first_drawn() {
        let pop = make_population(&[500, 500, 500, 500]);
        let n = pop.len();

        for seed in 0..64 {
            let mut rng = create_rng(seed);
            let mut replay = rng.clone();
            let draws: Vec<usize> = (0..3).map(|_| replay.random_range(0..n)).collect();

            assert_eq!(
                tournament(&pop, 3, &mut rng),
                draws[0],
                "seed {seed}: draws {draws:?} should resolve to the first"
            );
        }
    }

    #[test]
    fn test_strictly_better_later_draw_wins() {
        let pop = make_population(&[100, 200, 300, 400]);
        let n = pop.len();

        for seed in 0..64 {
            let mut rng = create_rng(seed);
            let mut replay = rng.clone();
            let draws: Vec<usize> = (0..3).map(|_| replay.random_range(0..n)).collect();
            let expected = draws
                .iter()
                .copied()
                .reduce(|best, idx| if pop[idx].fitness > pop[best].fitness { idx } else { best })
                .unwrap();

            assert_eq!(tournament(&pop, 3, &mut rng), expected, "seed {seed}");
        }
    }

    #[test]
    fn test_single_individual() {
        let pop = make_population(&[5]);
        let mut rng = create_rng(42);
        assert_eq!(tournament(&pop, 3, &mut rng), 0);
    }

    #[test]
    fn test_select_parents_count() {
        let pop = make_population(&[10, 20, 30]);
        let mut rng = create_rng(42);
        let parents = select_parents(&pop, 3, 7, &mut rng);
        assert_eq!(parents.len(), 7);
        assert!(parents.iter().all(|&i| i < 3));
    }

    #[test]
    fn test_select_parents_empty_population() {
        let mut rng = create_rng(42);
        assert!(select_parents(&[], 3, 5, &mut rng).is_empty());
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let mut rng = create_rng(42);
        tournament(&[], 3, &mut rng);
    }
}
