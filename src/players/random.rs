//! Bot that picks uniformly among the moves it is offered.

use rand::prelude::*;
use strictly_rps::{Move, Opponent};
use tracing::debug;

/// Bot choosing uniformly at random from the legal candidates.
///
/// Seeding makes the sequence reproducible; without a seed the generator
/// draws from OS entropy.
pub struct RandomOpponent {
    name: String,
    rng: StdRng,
}

impl RandomOpponent {
    /// Display name used by default.
    pub const NAME: &'static str = "Bot";

    /// Creates a random bot, seeded if `seed` is given.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            name: Self::NAME.to_string(),
            rng,
        }
    }
}

impl Opponent for RandomOpponent {
    fn choose(&mut self, candidates: &[Move]) -> Option<Move> {
        let choice = candidates.choose(&mut self.rng).copied();
        debug!(bot = %self.name, ?choice, "Bot chose move");
        choice
    }

    fn name(&self) -> &str {
        &self.name
    }
}
