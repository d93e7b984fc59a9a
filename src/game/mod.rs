//! Dots game model: sides, the board abstraction, the rule-engine seam, and
//! the session that turns raw engine calls into a turn-safe game API.

mod board;
mod engine;
mod perspective;
mod session;
mod side;

pub use board::{Board, CapturePath, Cell, CellStatus, Coord};
pub use engine::Engine;
pub use perspective::session_reward;
pub use session::{GameResult, GameSession, Transition};
pub use side::Side;
