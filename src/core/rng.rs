//! Deterministic random number generation and the shuffle seam.
//!
//! The engine never reaches for ambient randomness: dealing goes through a
//! [`ShuffleSource`], which `GameRng` implements. Tests inject their own
//! source to deal fixed hands.
//!
//! ```
//! use rummy_engine::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let mut left = vec![1, 2, 3, 4, 5, 6, 7, 8];
//! let mut right = left.clone();
//! a.shuffle(&mut left);
//! b.shuffle(&mut right);
//!
//! assert_eq!(left, right);
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::cards::Card;

/// Source of deck permutations.
///
/// Implementations must only reorder the slice, never add or drop cards.
pub trait ShuffleSource {
    fn shuffle_cards(&mut self, cards: &mut [Card]);
}

/// Seeded RNG for deterministic deals.
///
/// Uses ChaCha8 for speed while keeping high quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from a fresh random seed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place (Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}

impl ShuffleSource for GameRng {
    fn shuffle_cards(&mut self, cards: &mut [Card]) {
        self.shuffle(cards);
    }
}
