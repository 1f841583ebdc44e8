//! Seeded randomness for puzzle generation
//!
//! Every random choice in generation goes through a generator built here, so a
//! seed string fully determines the puzzle for a given word list.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHasher;
use std::hash::Hasher;

/// Build the deterministic generator for a seed string
///
/// The seed's bytes are digested with `FxHasher` and expanded by
/// `SeedableRng::seed_from_u64`.
#[must_use]
pub fn seeded(seed: &str) -> StdRng {
    let mut hasher = FxHasher::default();
    hasher.write(seed.as_bytes());
    StdRng::seed_from_u64(hasher.finish())
}

/// Uniform index in `0..len`
///
/// # Panics
/// Panics if `len` is zero.
#[inline]
pub fn index<R: Rng + ?Sized>(rng: &mut R, len: usize) -> usize {
    rng.random_range(0..len)
}
