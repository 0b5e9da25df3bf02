use super::Choose;
use crate::checkers::{Board, Move};
use derive_more::Constructor;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use tracing::instrument;

/// Picks any of the legal moves, uniformly at random.
#[derive(Debug, Clone, Constructor)]
pub struct Random {
    rng: StdRng,
}

impl Random {
    /// A reproducible [`Random`] bot.
    pub fn seeded(seed: u64) -> Self {
        Random::new(StdRng::seed_from_u64(seed))
    }
}

/// Initializes a [`Random`] bot seeded by [system entropy].
///
/// [system entropy]: rand::rngs::StdRng::from_entropy
impl Default for Random {
    fn default() -> Self {
        Random::new(StdRng::from_entropy())
    }
}

impl Choose for Random {
    #[instrument(level = "trace", skip(self, _board, moves), fields(candidates = moves.len()))]
    fn choose(&mut self, _board: &Board, moves: &[Move]) -> Option<Move> {
        moves.choose(&mut self.rng).cloned()
    }
}
