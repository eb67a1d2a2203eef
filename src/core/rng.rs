//! Seeded randomness for matches.
//!
//! A match draws from two independent streams derived from its seed: one
//! shuffles the deck, the other decides who goes first. A batch of matches
//! forks one generator per match from a base seed.
//!
//! ```
//! use flash_duel::core::GameRng;
//!
//! let mut base = GameRng::new(7);
//! let first = base.fork();
//! let second = base.fork();
//!
//! assert_ne!(first.seed(), second.seed());
//! assert_eq!(first.seed(), GameRng::new(7).fork().seed());
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

use super::player::PlayerId;

/// Deterministic ChaCha8 generator that remembers its seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            forks: 0,
        }
    }

    /// Seed this generator was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Next generator in a deterministic sequence of forks.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;
        Self::new(self.seed.wrapping_add(self.forks.wrapping_mul(0x9E37_79B9_7F4A_7C15)))
    }

    /// Stream keyed by `context`. Drawing from one context never shifts
    /// another, so the first-player draw leaves the deck order alone.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Either seat with equal probability.
    pub fn pick_seat(&mut self) -> PlayerId {
        if self.inner.gen_bool(0.5) {
            PlayerId::P1
        } else {
            PlayerId::P2
        }
    }

    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Uniform pick; `None` for an empty slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shuffled(rng: &mut GameRng) -> Vec<u8> {
        let mut values: Vec<u8> = (1..=25).collect();
        rng.shuffle(&mut values);
        values
    }

    #[test]
    fn test_same_seed_same_shuffle() {
        assert_eq!(shuffled(&mut GameRng::new(42)), shuffled(&mut GameRng::new(42)));
        assert_ne!(shuffled(&mut GameRng::new(1)), shuffled(&mut GameRng::new(2)));
    }

    #[test]
    fn test_fork_sequence() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);

        let first = a.fork();
        assert_eq!(first.seed(), b.fork().seed());
        assert_ne!(first.seed(), a.fork().seed());
    }

    #[test]
    fn test_contexts_are_independent() {
        let rng = GameRng::new(42);

        let deck = shuffled(&mut rng.for_context("deck"));
        assert_eq!(deck, shuffled(&mut GameRng::new(42).for_context("deck")));
        assert_ne!(deck, shuffled(&mut rng.for_context("first-player")));
    }

    #[test]
    fn test_pick_seat_covers_both() {
        let mut rng = GameRng::new(3);
        let seats: Vec<PlayerId> = (0..32).map(|_| rng.pick_seat()).collect();

        assert!(seats.contains(&PlayerId::P1));
        assert!(seats.contains(&PlayerId::P2));
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut values = shuffled(&mut GameRng::new(9));
        assert_ne!(values, (1..=25).collect::<Vec<u8>>());

        values.sort_unstable();
        assert_eq!(values, (1..=25).collect::<Vec<u8>>());
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let verbs = ["move", "push", "attack"];

        assert!(verbs.contains(rng.choose(&verbs).unwrap()));
        assert!(rng.choose::<u8>(&[]).is_none());
    }
}
