//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct is the single source of randomness for the
//! search. Every operator that shuffles, picks or branches on a probability takes
//! a `&mut RandomNumberGenerator`, so a run seeded with
//! [`RandomNumberGenerator::from_seed`] replays exactly.
//!
//! ## Example
//!
//! ```rust
//! use hotdesk::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(7);
//! let mut days = vec!["Mon", "Tue", "Wed"];
//! rng.shuffle(&mut days);
//!
//! let picked = rng.choose(&days);
//! assert!(picked.is_some());
//! assert!(rng.uniform() < 1.0);
//! ```

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

/// A wrapper around the `rand` crate's `StdRng` that provides the handful of
/// random primitives the search operators need.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws a uniform value in `[0, 1)`.
    pub fn uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Returns `true` with the given probability.
    ///
    /// Probabilities outside `[0, 1]` saturate instead of panicking.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.uniform() < probability
    }

    /// Picks a uniformly random element, or `None` for an empty slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }

    /// Shuffles a slice in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    /// Draws `amount` distinct indices from `0..len`, in draw order.
    ///
    /// `amount` is clamped to `len`.
    pub fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.rng, len, amount.min(len)).into_vec()
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
