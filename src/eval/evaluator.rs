use serde::{Deserialize, Serialize};
use tracing::{info, trace};

use super::scoreboard::{Contestant, Scoreboard};
use crate::agent::{Agent, SearchParams};
use crate::error::EvalError;
use crate::game::{Engine, GameResult, GameSession};

/// Evaluation run settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    pub games: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig { games: 2 }
    }
}

/// An agent together with the search parameters it is always called with.
pub struct Seat<E: Engine> {
    pub agent: Box<dyn Agent<E>>,
    pub params: SearchParams,
}

impl<E: Engine> Seat<E> {
    pub fn new(agent: Box<dyn Agent<E>>, params: SearchParams) -> Self {
        Seat { agent, params }
    }

    pub fn name(&self) -> &str {
        self.agent.name()
    }
}

/// Outcome of one evaluation game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub game_index: usize,
    /// Contestant that made the first move.
    pub first: Contestant,
    /// Terminal reward for `first`.
    pub reward: f32,
    pub plies: usize,
}

impl GameRecord {
    pub fn result(&self) -> GameResult {
        GameResult::from_reward(self.reward)
    }

    pub fn winner(&self) -> Option<Contestant> {
        match self.result() {
            GameResult::FirstSideWin => Some(self.first),
            GameResult::SecondSideWin => Some(self.first.other()),
            GameResult::Draw => None,
        }
    }
}

/// Play game `game_index` between `a` and `b` to the end.
///
/// Even games are opened by `a`, odd games by `b`; after that the seats
/// strictly alternate every ply.
pub fn play_game<E: Engine>(
    game_index: usize,
    a: &mut Seat<E>,
    b: &mut Seat<E>,
    width: usize,
    height: usize,
) -> Result<GameRecord, EvalError> {
    let mut session = GameSession::<E>::new(width, height);
    let first = Contestant::first_in_game(game_index);
    let mut turn = game_index % 2;
    let mut plies = 0;

    while !session.is_terminal() {
        if session.legal_actions().is_empty() {
            return Err(EvalError::NoLegalActions {
                game: game_index,
                ply: plies,
            });
        }

        let (contestant, seat) = if turn % 2 == 0 {
            (Contestant::A, &mut *a)
        } else {
            (Contestant::B, &mut *b)
        };
        let action = seat.agent.select_move(&session, seat.params);
        trace!(game = game_index, ply = plies, ?contestant, action, "move");
        session.step(action)?;

        turn += 1;
        plies += 1;
    }

    Ok(GameRecord {
        game_index,
        first,
        reward: session.terminal_reward().unwrap_or(0.0),
        plies,
    })
}

/// Runs a fixed number of games one after another and keeps score.
pub struct Evaluator {
    config: EvalConfig,
    width: usize,
    height: usize,
}

impl Evaluator {
    pub fn new(config: EvalConfig, width: usize, height: usize) -> Self {
        Evaluator {
            config,
            width,
            height,
        }
    }

    /// Play every game, logging the running tally after each one.
    pub fn run<E: Engine>(
        &self,
        a: &mut Seat<E>,
        b: &mut Seat<E>,
    ) -> Result<Scoreboard, EvalError> {
        let mut scoreboard = Scoreboard::new();

        info!(
            games = self.config.games,
            width = self.width,
            height = self.height,
            a = a.name(),
            b = b.name(),
            "starting evaluation"
        );

        for game_index in 0..self.config.games {
            let record = play_game(game_index, a, b, self.width, self.height)?;
            scoreboard.record(record.first, record.reward, record.plies);

            info!(
                "{} vs {} {}:{}. Games {} ({}, {} plies)",
                a.name(),
                b.name(),
                scoreboard.a_wins,
                scoreboard.b_wins,
                game_index + 1,
                record.result(),
                record.plies,
            );
        }

        Ok(scoreboard)
    }
}
