use super::border::BorderRenderer;
use super::geometry::grid_point;
use super::{Point, RenderConfig, Rgb, Scene, Shape};
use crate::game::{Board, CapturePath, Cell, CellStatus, Engine, GameSession, Side};

/// Draws the grid, stones, capture readout and capture borders of a game.
pub struct BoardRenderer {
    config: RenderConfig,
}

impl BoardRenderer {
    pub fn new(config: RenderConfig) -> Self {
        BoardRenderer { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Build the scene for the current session state.
    pub fn render<E: Engine>(&self, session: &GameSession<E>) -> Scene {
        self.render_parts(
            session.board(),
            session.last_capture_area(),
            session.capture_paths(Side::A),
            session.capture_paths(Side::B),
        )
    }

    pub fn render_parts(
        &self,
        board: &Board,
        last_capture_area: usize,
        paths_a: &[CapturePath],
        paths_b: &[CapturePath],
    ) -> Scene {
        let config = &self.config;
        let mut scene = Scene::new(
            config.canvas_width,
            config.canvas_height,
            config.colors.background,
        );

        self.draw_grid(&mut scene);

        for (coord, cell) in board.iter() {
            if let Some(color) = self.stone_color(cell) {
                scene.push(Shape::Circle {
                    center: grid_point(config, coord),
                    radius: config.stone_radius,
                    color,
                });
            }
        }

        scene.push(Shape::Text {
            at: Point::new(config.readout_x, config.readout_y),
            text: last_capture_area.to_string(),
            color: config.colors.readout,
        });

        let borders = BorderRenderer::new(config);
        borders.draw(&mut scene, paths_a, config.colors.side_a);
        borders.draw(&mut scene, paths_b, config.colors.side_b);

        scene
    }

    /// Stone color for a cell, `None` for an empty cell.
    pub fn stone_color(&self, cell: Cell) -> Option<Rgb> {
        let colors = &self.config.colors;
        let color = match (cell.owner?, cell.status) {
            (Side::A, CellStatus::Enabled) => colors.side_a,
            (Side::B, CellStatus::Enabled) => colors.side_b,
            (Side::A, CellStatus::Disabled) => colors.side_a_disabled,
            (Side::B, CellStatus::Disabled) => colors.side_b_disabled,
        };
        Some(color)
    }

    fn draw_grid(&self, scene: &mut Scene) {
        let c = &self.config;
        let far_x = c.canvas_width - c.grid_margin - c.line_width;
        let far_y = c.canvas_height - c.grid_margin - c.line_width;

        let mut x = c.grid_margin;
        while x < c.canvas_width {
            scene.push(Shape::Line {
                from: Point::new(x, c.grid_margin),
                to: Point::new(x, far_y),
                color: c.colors.grid,
                width: c.line_width,
            });
            x += c.grid_spacing;
        }

        let mut y = c.grid_margin;
        while y < c.canvas_height {
            scene.push(Shape::Line {
                from: Point::new(c.grid_margin, y),
                to: Point::new(far_x, y),
                color: c.colors.grid,
                width: c.line_width,
            });
            y += c.grid_spacing;
        }
    }
}
