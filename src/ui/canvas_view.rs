use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine},
        Block, Borders, Paragraph,
    },
    Frame,
};

use crate::game::{Engine, GameSession};
use crate::render::{Rgb, Scene, Shape};

/// Render header, board canvas, message and controls. Returns the area the
/// board canvas was painted into, for mapping mouse positions back.
pub fn render(frame: &mut Frame, scene: &Scene, header: &str, message: Option<&str>) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, header, chunks[0]);
    let canvas_area = render_scene(frame, scene, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
    canvas_area
}

/// Header line for a session.
pub fn header_text<E: Engine>(session: &GameSession<E>) -> String {
    if session.is_terminal() {
        format!("Game Over  |  {}", session.result_string())
    } else {
        format!(
            "To play: {}  |  Move {}",
            session.to_play().name(),
            session.steps() + 1
        )
    }
}

/// Map a terminal cell inside `area` to logical canvas pixels (y down).
/// Cells outside the area give `None`.
pub fn cell_to_canvas(
    area: Rect,
    scene_width: f64,
    scene_height: f64,
    column: u16,
    row: u16,
) -> Option<(f64, f64)> {
    if area.width == 0
        || area.height == 0
        || column < area.x
        || row < area.y
        || column >= area.x + area.width
        || row >= area.y + area.height
    {
        return None;
    }
    let x = (f64::from(column - area.x) + 0.5) * scene_width / f64::from(area.width);
    let y = (f64::from(row - area.y) + 0.5) * scene_height / f64::from(area.height);
    Some((x, y))
}

fn render_header(frame: &mut Frame, header: &str, area: Rect) {
    let widget = Paragraph::new(header.to_string())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Dots"));

    frame.render_widget(widget, area);
}

fn render_scene(frame: &mut Frame, scene: &Scene, area: Rect) -> Rect {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let height = scene.height;
    // Canvas y grows upwards; scene y grows downwards.
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .background_color(color(scene.background))
        .x_bounds([0.0, scene.width])
        .y_bounds([0.0, scene.height])
        .paint(move |ctx| {
            for shape in scene.shapes() {
                match shape {
                    Shape::Line { from, to, color: c, .. } => ctx.draw(&CanvasLine {
                        x1: from.x,
                        y1: height - from.y,
                        x2: to.x,
                        y2: height - to.y,
                        color: color(*c),
                    }),
                    Shape::Circle {
                        center,
                        radius,
                        color: c,
                    } => ctx.draw(&Circle {
                        x: center.x,
                        y: height - center.y,
                        radius: *radius,
                        color: color(*c),
                    }),
                    Shape::Text { at, text, color: c } => ctx.print(
                        at.x,
                        height - at.y,
                        Span::styled(text.clone(), Style::default().fg(color(*c))),
                    ),
                }
            }
        });

    frame.render_widget(canvas, inner);
    inner
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let widget = Paragraph::new(message.unwrap_or("").to_string())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("Click: Place dot  |  R: Restart  |  Q: Quit");
    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}
