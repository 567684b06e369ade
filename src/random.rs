//! Seedable random source shared by every stochastic operator.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic RNG from a seed.
///
/// Two RNGs built from the same seed yield identical sequences, so a
/// seeded [`GaRunner`](crate::ga::GaRunner) run is reproducible.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates an RNG from the configured seed, or from OS entropy when unset.
pub(crate) fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}
