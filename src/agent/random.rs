use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::traits::{Agent, SearchParams};
use crate::game::{Engine, GameSession};

/// An agent that selects uniformly at random from legal actions.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible agent for seeded evaluation runs.
    pub fn with_seed(seed: u64) -> Self {
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

impl<E: Engine> Agent<E> for RandomAgent {
    fn select_move(&mut self, session: &GameSession<E>, _params: SearchParams) -> usize {
        let actions = session.legal_actions();
        assert!(!actions.is_empty(), "No legal actions available");
        let idx = self.rng.random_range(0..actions.len());
        actions[idx]
    }

    fn name(&self) -> &str {
        "Random"
    }
}
