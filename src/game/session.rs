use std::fmt;

use tracing::{debug, info};

use super::perspective::session_reward;
use super::{Board, CapturePath, Engine, Side};
use crate::error::StepError;

/// Final result of a game, seen from the side that moved first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    FirstSideWin,
    SecondSideWin,
    Draw,
}

impl GameResult {
    /// Classify a session-relative terminal reward by its sign.
    pub fn from_reward(reward: f32) -> Self {
        if reward > 0.0 {
            GameResult::FirstSideWin
        } else if reward < 0.0 {
            GameResult::SecondSideWin
        } else {
            GameResult::Draw
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameResult::FirstSideWin => "B+1.0",
            GameResult::SecondSideWin => "W+1.0",
            GameResult::Draw => "DRAW",
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a successful [`GameSession::step`] hands back.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<O> {
    pub observation: O,
    /// Session-relative reward: non-zero only on the terminal step.
    pub reward: f32,
    pub done: bool,
}

/// A single game on top of an [`Engine`], with turn and legality discipline.
///
/// Rewards are always reported for the side that moved first in this game,
/// regardless of which side the engine scores for.
pub struct GameSession<E: Engine> {
    engine: E,
    width: usize,
    height: usize,
    first_mover: Side,
    to_play: Side,
    opponent: Side,
    steps: usize,
    last_move: Option<usize>,
    last_side: Option<Side>,
    done: bool,
    terminal_reward: Option<f32>,
    legal_mask: Vec<bool>,
}

impl<E: Engine> GameSession<E> {
    /// Start a fresh game on a `width` x `height` board.
    pub fn new(width: usize, height: usize) -> Self {
        let engine = E::new(width, height);
        let first_mover = engine.to_play();
        let legal_mask = legality_mask(engine.board(), &engine.legal_actions());
        GameSession {
            width: engine.width(),
            height: engine.height(),
            engine,
            first_mover,
            to_play: first_mover,
            opponent: first_mover.other(),
            steps: 0,
            last_move: None,
            last_side: None,
            done: false,
            terminal_reward: None,
            legal_mask,
        }
    }

    /// Throw the current game away and start a new one on the same board size.
    /// Returns the initial observation.
    pub fn reset(&mut self) -> E::Observation {
        *self = Self::new(self.width, self.height);
        info!(width = self.width, height = self.height, "session reset");
        self.engine.observation()
    }

    /// Play `action` for the side to move.
    ///
    /// Nothing is mutated when the action is rejected.
    pub fn step(&mut self, action: usize) -> Result<Transition<E::Observation>, StepError> {
        if self.done {
            return Err(StepError::TerminalSession);
        }
        if action >= self.num_actions() {
            return Err(StepError::OutOfRange {
                action,
                num_actions: self.num_actions(),
            });
        }
        if !self.legal_mask[action] {
            return Err(StepError::IllegalAction { action });
        }

        self.last_move = Some(action);
        self.last_side = Some(self.to_play);
        self.steps += 1;

        self.engine.play(action);

        self.to_play = self.engine.to_play();
        self.opponent = self.to_play.other();
        self.done = self.engine.is_terminal();

        let mut reward = 0.0;
        if self.done {
            reward = session_reward(
                self.engine.terminal_reward(),
                self.engine.reference_side(),
                self.first_mover,
            );
            self.terminal_reward = Some(reward);
            self.legal_mask.iter_mut().for_each(|legal| *legal = false);
            info!(steps = self.steps, result = %GameResult::from_reward(reward), "game over");
        } else {
            self.legal_mask = legality_mask(self.engine.board(), &self.engine.legal_actions());
        }

        debug!(action, side = self.last_side.map(Side::name), steps = self.steps, "step");

        Ok(Transition {
            observation: self.engine.observation(),
            reward,
            done: self.done,
        })
    }

    /// Currently legal actions, ascending.
    pub fn legal_actions(&self) -> Vec<usize> {
        self.legal_mask
            .iter()
            .enumerate()
            .filter_map(|(action, &legal)| legal.then_some(action))
            .collect()
    }

    /// One flag per action, `true` where the action is playable.
    pub fn legal_action_mask(&self) -> &[bool] {
        &self.legal_mask
    }

    pub fn is_legal(&self, action: usize) -> bool {
        self.legal_mask.get(action).copied().unwrap_or(false)
    }

    /// Empty until the game is over, then one of `B+1.0`, `W+1.0`, `DRAW`.
    pub fn result_string(&self) -> String {
        self.result()
            .map(|result| result.as_str().to_string())
            .unwrap_or_default()
    }

    pub fn result(&self) -> Option<GameResult> {
        self.terminal_reward.map(GameResult::from_reward)
    }

    pub fn observation(&self) -> E::Observation {
        self.engine.observation()
    }

    /// Winning side, `None` before the end and on a draw.
    pub fn winner(&self) -> Option<Side> {
        match self.result()? {
            GameResult::FirstSideWin => Some(self.first_mover),
            GameResult::SecondSideWin => Some(self.first_mover.other()),
            GameResult::Draw => None,
        }
    }

    /// Session-relative terminal reward (+1 when the first mover won).
    pub fn terminal_reward(&self) -> Option<f32> {
        self.terminal_reward
    }

    /// Terminal value as the engine reports it, for its reference side.
    pub fn engine_reward(&self) -> Option<f32> {
        self.done.then(|| self.engine.terminal_reward())
    }

    pub fn is_terminal(&self) -> bool {
        self.done
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn num_actions(&self) -> usize {
        self.legal_mask.len()
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn to_play(&self) -> Side {
        self.to_play
    }

    pub fn opponent(&self) -> Side {
        self.opponent
    }

    pub fn first_mover(&self) -> Side {
        self.first_mover
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn last_side(&self) -> Option<Side> {
        self.last_side
    }

    pub fn board(&self) -> &Board {
        self.engine.board()
    }

    pub fn last_capture_area(&self) -> usize {
        self.engine.last_capture_area()
    }

    pub fn capture_paths(&self, side: Side) -> &[CapturePath] {
        self.engine.capture_paths(side)
    }
}

/// Mask of actions the engine allows whose cell is still empty and enabled.
pub(crate) fn legality_mask(board: &Board, legal_actions: &[usize]) -> Vec<bool> {
    let mut mask = vec![false; board.len()];
    for &action in legal_actions {
        if board.cell(action).is_some_and(|cell| cell.is_playable()) {
            mask[action] = true;
        }
    }
    mask
}
