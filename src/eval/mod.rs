//! Agent-vs-agent evaluation: sequential games with alternating first mover
//! and a running scoreboard.

mod evaluator;
mod scoreboard;

pub use evaluator::{play_game, EvalConfig, Evaluator, GameRecord, Seat};
pub use scoreboard::{Contestant, Scoreboard};
