//! Random choice among candidate answers.
//!
//! The response tiers that hold several candidates pick one uniformly. The
//! source is injectable so tests can make the pick deterministic.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Picks an index among `len` candidates.
pub trait ChoiceSource: Send + Sync {
    /// Return an index in `0..len`. Only called with `len > 0`.
    fn index(&self, len: usize) -> usize;

    /// Pick one item, or `None` if there is nothing to pick from.
    fn choose<'a>(&self, items: &'a [String]) -> Option<&'a str> {
        if items.is_empty() {
            return None;
        }
        let i = self.index(items.len()).min(items.len() - 1);
        Some(items[i].as_str())
    }
}

/// Uniform choice from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadChoice;

impl ChoiceSource for ThreadChoice {
    fn index(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Uniform choice from a seeded RNG, reproducible across runs.
#[derive(Debug)]
pub struct SeededChoice {
    rng: Mutex<StdRng>,
}

impl SeededChoice {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl ChoiceSource for SeededChoice {
    fn index(&self, len: usize) -> usize {
        match self.rng.lock() {
            Ok(mut rng) => rng.random_range(0..len),
            Err(poisoned) => poisoned.into_inner().random_range(0..len),
        }
    }
}

/// Always picks the first candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstChoice;

impl ChoiceSource for FirstChoice {
    fn index(&self, _len: usize) -> usize {
        0
    }
}
