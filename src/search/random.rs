use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::error::SearchError;
use crate::game::Board;

use super::agent::Agent;

/// An agent that plays a uniformly random legal column. Useful as a
/// baseline opponent in matches and tests.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible agent for deterministic tests and matches.
    pub fn seeded(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, board: &mut Board) -> Result<usize, SearchError> {
        let legal = board.legal_moves();
        if legal.is_empty() {
            return Err(SearchError::NoLegalMoves);
        }
        let idx = self.rng.random_range(0..legal.len());
        Ok(legal[idx])
    }

    fn name(&self) -> &str {
        "Random"
    }
}
