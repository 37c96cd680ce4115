//! Motivational quotes shown above the list, rotated after every change.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

pub const QUOTES: [&str; 6] = [
    "The best way to get started is to quit talking and begin doing. - Walt Disney",
    "The only limit to our realization of tomorrow is our doubts of today. - Franklin D. Roosevelt",
    "You are never too old to set another goal or to dream a new dream. - C.S. Lewis",
    "Do what you can, with what you have, where you are. - Theodore Roosevelt",
    "Success is not final, failure is not fatal: It is the courage to continue that counts. - Winston Churchill",
    "The future belongs to those who believe in the beauty of their dreams. - Eleanor Roosevelt",
];

/// Holds the quote currently on display and picks the next one.
///
/// Picks are uniform and independent, so the same quote may come up twice
/// in a row.
pub struct QuotePicker {
    rng: StdRng,
    current: &'static str,
}

impl QuotePicker {
    /// Creates a picker with a first quote already chosen.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let current = pick(&mut rng);
        Self { rng, current }
    }

    #[must_use]
    pub fn current(&self) -> &'static str {
        self.current
    }

    /// Chooses a new quote and returns it.
    pub fn rotate(&mut self) -> &'static str {
        self.current = pick(&mut self.rng);
        self.current
    }
}

fn pick(rng: &mut StdRng) -> &'static str {
    QUOTES.choose(rng).copied().unwrap_or(QUOTES[0])
}
