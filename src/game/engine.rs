use super::{Board, CapturePath, Side};

/// The rule engine a [`GameSession`](super::GameSession) wraps.
///
/// The engine owns the board and decides captures and the end of the game.
/// Its terminal value is expressed from the point of view of
/// [`reference_side`](Engine::reference_side), whoever asks.
pub trait Engine {
    /// Snapshot handed to agents. Its layout is the engine's business.
    type Observation: Clone;

    /// Build an engine for a fresh game.
    fn new(width: usize, height: usize) -> Self
    where
        Self: Sized;

    fn width(&self) -> usize;

    fn height(&self) -> usize;

    /// Side due to move next.
    fn to_play(&self) -> Side;

    /// Side that a positive [`terminal_reward`](Engine::terminal_reward) favours.
    fn reference_side(&self) -> Side {
        Side::A
    }

    /// Apply a move for the side to play. Callers only pass legal actions.
    fn play(&mut self, action: usize);

    /// Actions currently playable, in any order.
    fn legal_actions(&self) -> Vec<usize>;

    fn is_terminal(&self) -> bool;

    /// +1, 0 or -1 for the reference side. Only meaningful once terminal.
    fn terminal_reward(&self) -> f32;

    fn observation(&self) -> Self::Observation;

    fn board(&self) -> &Board;

    /// Number of cells enclosed by the most recent capture.
    fn last_capture_area(&self) -> usize;

    /// Boundaries of the regions captured by `side`.
    fn capture_paths(&self, side: Side) -> &[CapturePath];
}
