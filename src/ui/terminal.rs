use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
    MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tracing::info;

use super::canvas_view;
use super::play_loop::{Frontend, InputEvent, PlayLoop};
use crate::agent::Agent;
use crate::config::AppConfig;
use crate::game::{Engine, GameSession};
use crate::logging;
use crate::render::{BoardRenderer, RenderConfig};

/// Crossterm input and a ratatui canvas, with mouse capture enabled.
pub struct TerminalFrontend {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    renderer: BoardRenderer,
    canvas_area: Rect,
}

impl TerminalFrontend {
    pub fn new(terminal: Terminal<CrosstermBackend<Stdout>>, renderer: BoardRenderer) -> Self {
        TerminalFrontend {
            terminal,
            renderer,
            canvas_area: Rect::default(),
        }
    }

    /// Leave raw mode and the alternate screen. Errors are ignored so this is
    /// safe to call while another error is being reported.
    pub fn restore(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

/// Map a crossterm event to play-loop input. Mouse cells are converted to
/// logical canvas pixels through the last painted `canvas_area`.
fn translate(event: Event, canvas_area: Rect, config: &RenderConfig) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(InputEvent::Quit),
            KeyCode::Char('r') | KeyCode::Char('R') => Some(InputEvent::Reset),
            _ => None,
        },
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            canvas_view::cell_to_canvas(
                canvas_area,
                config.canvas_width,
                config.canvas_height,
                mouse.column,
                mouse.row,
            )
            .map(|(x, y)| InputEvent::PointerPress { x, y })
        }
        // The layout and canvas area change with the terminal size.
        Event::Resize(_, _) => Some(InputEvent::Redraw),
        _ => None,
    }
}

impl<E: Engine> Frontend<E> for TerminalFrontend {
    fn poll_events(&mut self, timeout: Duration) -> io::Result<Vec<InputEvent>> {
        let mut events = Vec::new();
        if !event::poll(timeout)? {
            return Ok(events);
        }
        // Drain whatever is already queued. Stop after a resize so later
        // clicks are mapped through the canvas area of the next redraw.
        loop {
            let input = translate(event::read()?, self.canvas_area, self.renderer.config());
            let resized = input == Some(InputEvent::Redraw);
            events.extend(input);
            if resized || !event::poll(Duration::ZERO)? {
                break;
            }
        }
        Ok(events)
    }

    fn redraw(&mut self, session: &GameSession<E>, message: Option<&str>) -> io::Result<()> {
        let scene = self.renderer.render(session);
        let header = canvas_view::header_text(session);
        let mut canvas_area = self.canvas_area;
        self.terminal.draw(|f| {
            canvas_area = canvas_view::render(f, &scene, &header, message);
        })?;
        self.canvas_area = canvas_area;
        Ok(())
    }
}

/// Play one interactive game in the terminal.
///
/// Logs go to `config.play.log_file` so they do not corrupt the screen. When
/// `reply` is given and `config.play.agent_reply` is set, the agent answers
/// every accepted click.
pub fn run_interactive<E: Engine>(
    config: &AppConfig,
    reply: Option<Box<dyn Agent<E>>>,
) -> Result<()> {
    config.validate().context("validating config")?;
    logging::init_file(&config.play.log_file)
        .with_context(|| format!("opening log file {}", config.play.log_file.display()))?;

    let session = GameSession::<E>::new(config.board.width, config.board.height);
    let mut play = PlayLoop::new(session, config.render.clone(), config.play.tick());
    if let Some(agent) = reply.filter(|_| config.play.agent_reply) {
        info!(agent = agent.name(), "agent reply enabled");
        play = play.with_reply(agent, config.search.params());
    }

    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    if let Err(err) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(err).context("entering alternate screen");
    }
    let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(terminal) => terminal,
        Err(err) => {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            return Err(err).context("creating terminal");
        }
    };

    let mut frontend = TerminalFrontend::new(terminal, BoardRenderer::new(config.render.clone()));
    let res = play.run(&mut frontend);

    // Restore terminal, always runs, even on error
    frontend.restore();

    res.context("running play loop")?;
    if let Some(result) = play.session().result() {
        info!(%result, steps = play.session().steps(), "interactive game finished");
    }
    Ok(())
}
