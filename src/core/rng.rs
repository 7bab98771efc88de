//! Deterministic, injectable randomness.
//!
//! Every random decision the engine makes goes through [`RandomSource`]:
//!
//! - **Board kind**: grouped vs ungrouped, chosen once at load time
//! - **Outcome draws**: the ungrouped board's randomized judging policy
//! - **Reshuffles**: unbiased permutations of the active pool
//! - **Synthetic labels**: opaque tokens for manufactured categories
//!
//! [`GameRng`] is the production source. Tests supply their own
//! implementation to pin outcome draws.
//!
//! ```
//! use rust_connections::core::{GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//! let mut replay = GameRng::new(42);
//!
//! assert_eq!(rng.unit(), replay.unit());
//! assert_eq!(rng.token(), replay.token());
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const TOKEN_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const TOKEN_LEN: usize = 6;

/// Supplier of every random decision a session makes.
pub trait RandomSource {
    /// Uniform value in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Uniform index in `0..bound`. `bound` must be non-zero.
    fn below(&mut self, bound: usize) -> usize;

    /// Shuffle a slice in place with every permutation equally likely.
    fn shuffle<T>(&mut self, items: &mut [T]);

    /// Returns `true` with the given probability. NaN never succeeds.
    fn coin(&mut self, probability: f64) -> bool {
        self.unit() < probability
    }

    /// Short lowercase base-36 token.
    fn token(&mut self) -> String {
        (0..TOKEN_LEN)
            .map(|_| char::from(TOKEN_ALPHABET[self.below(TOKEN_ALPHABET.len())]))
            .collect()
    }
}

/// Seedable ChaCha8 random source.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }
}

impl RandomSource for GameRng {
    fn unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    fn below(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }
}
