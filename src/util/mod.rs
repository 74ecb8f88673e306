//! Various utility functions.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoroshiro64StarStar;

/// A small rng with a fixed seed, for tests that have to be reproducible.
pub fn consistent_rng() -> impl Rng {
    Xoroshiro64StarStar::seed_from_u64(0)
}
