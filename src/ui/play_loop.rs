use std::io;
use std::time::Duration;

use tracing::{debug, info};

use crate::agent::{Agent, SearchParams};
use crate::error::{PlayError, StepError};
use crate::game::{Engine, GameResult, GameSession};
use crate::render::{pointer_to_action, RenderConfig};

/// Input the play loop understands, already in canvas coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Quit,
    /// Start a new game.
    Reset,
    /// The drawing surface changed; paint the session again.
    Redraw,
    /// Primary button pressed at logical canvas pixel `(x, y)`.
    PointerPress { x: f64, y: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Where the play loop gets input from and draws to.
pub trait Frontend<E: Engine> {
    /// Wait up to `timeout` for input and return everything pending, oldest first.
    fn poll_events(&mut self, timeout: Duration) -> io::Result<Vec<InputEvent>>;

    /// Draw the session now.
    fn redraw(&mut self, session: &GameSession<E>, message: Option<&str>) -> io::Result<()>;
}

/// Single-threaded interactive loop: a human clicks, an optional agent replies.
///
/// Every accepted human move is followed by at most one agent reply, which is
/// applied and drawn before the next input event is looked at.
pub struct PlayLoop<E: Engine> {
    session: GameSession<E>,
    render: RenderConfig,
    reply: Option<(Box<dyn Agent<E>>, SearchParams)>,
    tick: Duration,
    state: LoopState,
    message: Option<String>,
}

impl<E: Engine> PlayLoop<E> {
    pub fn new(session: GameSession<E>, render: RenderConfig, tick: Duration) -> Self {
        PlayLoop {
            session,
            render,
            reply: None,
            tick,
            state: LoopState::Running,
            message: None,
        }
    }

    /// Let `agent` answer every accepted human move.
    pub fn with_reply(mut self, agent: Box<dyn Agent<E>>, params: SearchParams) -> Self {
        self.reply = Some((agent, params));
        self
    }

    pub fn session(&self) -> &GameSession<E> {
        &self.session
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Main loop: draw once, then tick until a quit event arrives.
    pub fn run<F: Frontend<E>>(&mut self, frontend: &mut F) -> Result<(), PlayError> {
        info!(
            width = self.session.width(),
            height = self.session.height(),
            agent_reply = self.reply.is_some(),
            "play loop started"
        );
        frontend.redraw(&self.session, self.message.as_deref())?;

        while self.state == LoopState::Running {
            self.tick(frontend)?;
        }

        info!(steps = self.session.steps(), "play loop stopped");
        Ok(())
    }

    /// Handle every event pending this tick, in arrival order.
    pub fn tick<F: Frontend<E>>(&mut self, frontend: &mut F) -> Result<LoopState, PlayError> {
        if self.state == LoopState::Stopped {
            return Ok(self.state);
        }

        for event in frontend.poll_events(self.tick)? {
            match event {
                InputEvent::Quit => {
                    self.state = LoopState::Stopped;
                    break;
                }
                InputEvent::Reset => {
                    self.session.reset();
                    self.message = Some("New game started!".to_string());
                    frontend.redraw(&self.session, self.message.as_deref())?;
                }
                InputEvent::Redraw => frontend.redraw(&self.session, self.message.as_deref())?,
                InputEvent::PointerPress { x, y } => self.handle_press(x, y, frontend)?,
            }
        }

        Ok(self.state)
    }

    fn handle_press<F: Frontend<E>>(
        &mut self,
        x: f64,
        y: f64,
        frontend: &mut F,
    ) -> Result<(), PlayError> {
        let Some(action) = pointer_to_action(&self.render, self.session.board(), x, y) else {
            debug!(x, y, "click off the board");
            return Ok(());
        };

        match self.session.step(action) {
            Ok(_) => {}
            Err(StepError::TerminalSession) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
                frontend.redraw(&self.session, self.message.as_deref())?;
                return Ok(());
            }
            Err(err) => {
                debug!(action, %err, "click ignored");
                return Ok(());
            }
        }

        self.message = outcome_message(&self.session);
        frontend.redraw(&self.session, self.message.as_deref())?;

        if let Some((agent, params)) = self.reply.as_mut() {
            if self.session.is_terminal() || self.session.legal_actions().is_empty() {
                return Ok(());
            }
            let reply = agent.select_move(&self.session, *params);
            debug!(action = reply, agent = agent.name(), "agent reply");
            self.session.step(reply)?;

            self.message = outcome_message(&self.session);
            frontend.redraw(&self.session, self.message.as_deref())?;
        }

        Ok(())
    }
}

fn outcome_message<E: Engine>(session: &GameSession<E>) -> Option<String> {
    let result = session.result()?;
    Some(match (result, session.winner()) {
        (GameResult::Draw, _) | (_, None) => "It's a draw!".to_string(),
        (_, Some(side)) => format!("Side {} wins!", side.name()),
    })
}
