//! RNG construction helpers for value generation.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Create a fresh RNG seeded from entropy.
pub fn create_rng() -> StdRng {
    StdRng::from_entropy()
}

/// Create an RNG with a specific seed, for reproducible generation.
pub fn create_seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
