//! Deterministic doubles shared by the unit tests.

use std::collections::VecDeque;
use std::time::Duration;

use crate::agent::{Agent, SearchParams};
use crate::game::{Board, CapturePath, Cell, CellStatus, Coord, Engine, GameSession, Side};
use crate::ui::{Frontend, InputEvent};

/// Fill-the-board engine: sides alternate placing stones, the game ends when
/// the board is full and the owner of action 0 wins.
///
/// `MIRRORED` scores for side B instead of A. `B_STARTS` lets side B move first.
pub struct FillEngineOf<const MIRRORED: bool, const B_STARTS: bool> {
    board: Board,
    to_play: Side,
    paths: Vec<CapturePath>,
}

pub type FillEngine = FillEngineOf<false, false>;
pub type MirroredFillEngine = FillEngineOf<true, false>;
pub type SecondStartEngine = FillEngineOf<false, true>;

impl<const MIRRORED: bool, const B_STARTS: bool> Engine for FillEngineOf<MIRRORED, B_STARTS> {
    type Observation = Vec<f32>;

    fn new(width: usize, height: usize) -> Self {
        FillEngineOf {
            board: Board::new(width, height),
            to_play: if B_STARTS { Side::B } else { Side::A },
            paths: Vec::new(),
        }
    }

    fn width(&self) -> usize {
        self.board.width()
    }

    fn height(&self) -> usize {
        self.board.height()
    }

    fn to_play(&self) -> Side {
        self.to_play
    }

    fn reference_side(&self) -> Side {
        if MIRRORED {
            Side::B
        } else {
            Side::A
        }
    }

    fn play(&mut self, action: usize) {
        let coord = self.board.coord_of(action).expect("action on board");
        self.board.set(coord, Cell::stone(self.to_play));
        self.to_play = self.to_play.other();
    }

    fn legal_actions(&self) -> Vec<usize> {
        (0..self.board.len())
            .filter(|&a| self.board.cell(a).is_some_and(|c| c.is_empty()))
            .collect()
    }

    fn is_terminal(&self) -> bool {
        self.board.iter().all(|(_, cell)| !cell.is_empty())
    }

    fn terminal_reward(&self) -> f32 {
        match self.board.cell(0).and_then(|c| c.owner) {
            Some(owner) if owner == self.reference_side() => 1.0,
            Some(_) => -1.0,
            None => 0.0,
        }
    }

    fn observation(&self) -> Vec<f32> {
        self.board
            .iter()
            .map(|(_, cell)| match cell.owner {
                Some(Side::A) => 1.0,
                Some(Side::B) => -1.0,
                None => 0.0,
            })
            .collect()
    }

    fn board(&self) -> &Board {
        &self.board
    }

    fn last_capture_area(&self) -> usize {
        0
    }

    fn capture_paths(&self, _side: Side) -> &[CapturePath] {
        &self.paths
    }
}

/// [`FillEngine`] with cell (0, 1) disabled but unowned from the start. It
/// still lists every action as legal.
pub struct HoleEngine {
    inner: FillEngine,
}

impl Engine for HoleEngine {
    type Observation = Vec<f32>;

    fn new(width: usize, height: usize) -> Self {
        let mut inner = FillEngine::new(width, height);
        inner.board.set(
            Coord::new(0, 1),
            Cell {
                owner: None,
                status: CellStatus::Disabled,
            },
        );
        HoleEngine { inner }
    }

    fn width(&self) -> usize {
        self.inner.width()
    }

    fn height(&self) -> usize {
        self.inner.height()
    }

    fn to_play(&self) -> Side {
        self.inner.to_play()
    }

    fn play(&mut self, action: usize) {
        self.inner.play(action);
    }

    fn legal_actions(&self) -> Vec<usize> {
        (0..self.inner.board.len()).collect()
    }

    fn is_terminal(&self) -> bool {
        false
    }

    fn terminal_reward(&self) -> f32 {
        0.0
    }

    fn observation(&self) -> Vec<f32> {
        self.inner.observation()
    }

    fn board(&self) -> &Board {
        self.inner.board()
    }

    fn last_capture_area(&self) -> usize {
        0
    }

    fn capture_paths(&self, side: Side) -> &[CapturePath] {
        self.inner.capture_paths(side)
    }
}

/// Never terminal and never offers a move.
pub struct StuckEngine {
    board: Board,
}

impl Engine for StuckEngine {
    type Observation = ();

    fn new(width: usize, height: usize) -> Self {
        StuckEngine {
            board: Board::new(width, height),
        }
    }

    fn width(&self) -> usize {
        self.board.width()
    }

    fn height(&self) -> usize {
        self.board.height()
    }

    fn to_play(&self) -> Side {
        Side::A
    }

    fn play(&mut self, _action: usize) {}

    fn legal_actions(&self) -> Vec<usize> {
        Vec::new()
    }

    fn is_terminal(&self) -> bool {
        false
    }

    fn terminal_reward(&self) -> f32 {
        0.0
    }

    fn observation(&self) {}

    fn board(&self) -> &Board {
        &self.board
    }

    fn last_capture_area(&self) -> usize {
        0
    }

    fn capture_paths(&self, _side: Side) -> &[CapturePath] {
        &[]
    }
}

/// Always plays the lowest legal action.
pub struct LowestAgent;

impl<E: Engine> Agent<E> for LowestAgent {
    fn select_move(&mut self, session: &GameSession<E>, _params: SearchParams) -> usize {
        session.legal_actions()[0]
    }

    fn name(&self) -> &str {
        "Lowest"
    }
}

/// Always plays the highest legal action.
pub struct HighestAgent;

impl<E: Engine> Agent<E> for HighestAgent {
    fn select_move(&mut self, session: &GameSession<E>, _params: SearchParams) -> usize {
        *session.legal_actions().last().expect("legal actions")
    }

    fn name(&self) -> &str {
        "Highest"
    }
}

/// Plays a fixed action regardless of legality.
pub struct FixedAgent(pub usize);

impl<E: Engine> Agent<E> for FixedAgent {
    fn select_move(&mut self, _session: &GameSession<E>, _params: SearchParams) -> usize {
        self.0
    }

    fn name(&self) -> &str {
        "Fixed"
    }
}

/// What a [`ScriptedFrontend`] saw, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum FrontendLog {
    Poll,
    /// Session step count and last move at redraw time.
    Redraw {
        steps: usize,
        last_move: Option<usize>,
    },
}

/// Feeds one batch of events per poll and records polls and redraws.
pub struct ScriptedFrontend {
    batches: VecDeque<Vec<InputEvent>>,
    pub log: Vec<FrontendLog>,
    pub messages: Vec<Option<String>>,
}

impl ScriptedFrontend {
    pub fn new(batches: Vec<Vec<InputEvent>>) -> Self {
        ScriptedFrontend {
            batches: batches.into(),
            log: Vec::new(),
            messages: Vec::new(),
        }
    }

    pub fn redraws(&self) -> Vec<(usize, Option<usize>)> {
        self.log
            .iter()
            .filter_map(|entry| match entry {
                FrontendLog::Redraw { steps, last_move } => Some((*steps, *last_move)),
                FrontendLog::Poll => None,
            })
            .collect()
    }
}

impl<E: Engine> Frontend<E> for ScriptedFrontend {
    fn poll_events(&mut self, _timeout: Duration) -> std::io::Result<Vec<InputEvent>> {
        self.log.push(FrontendLog::Poll);
        // Quit once the script runs out so loops always end.
        Ok(self
            .batches
            .pop_front()
            .unwrap_or_else(|| vec![InputEvent::Quit]))
    }

    fn redraw(&mut self, session: &GameSession<E>, message: Option<&str>) -> std::io::Result<()> {
        self.log.push(FrontendLog::Redraw {
            steps: session.steps(),
            last_move: session.last_move(),
        });
        self.messages.push(message.map(str::to_string));
        Ok(())
    }
}
