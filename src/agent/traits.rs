use serde::{Deserialize, Serialize};

use crate::game::{Engine, GameSession};

/// The two exploration knobs handed to an agent's search on every call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchParams {
    pub c_puct_base: f32,
    pub c_puct_init: f32,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            c_puct_base: 19652.0,
            c_puct_init: 1.25,
        }
    }
}

/// Anything that can pick a move for the side to play.
///
/// Callers only invoke an agent while the session has at least one legal
/// action, and treat the call as a single blocking step with no timeout.
/// The session is borrowed immutably, so the agent cannot change the game.
pub trait Agent<E: Engine> {
    /// Choose an action for `session.to_play()`.
    fn select_move(&mut self, session: &GameSession<E>, params: SearchParams) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

impl<E: Engine, A: Agent<E> + ?Sized> Agent<E> for Box<A> {
    fn select_move(&mut self, session: &GameSession<E>, params: SearchParams) -> usize {
        (**self).select_move(session, params)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
