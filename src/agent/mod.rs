//! Move-selection seam: the [`Agent`] trait the play loop and evaluator call,
//! and a uniform random agent.

mod random;
mod traits;

pub use random::RandomAgent;
pub use traits::{Agent, SearchParams};
