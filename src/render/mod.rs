//! Board drawing as a display list: the renderers turn session state into a
//! [`Scene`] of lines, circles and text in logical canvas pixels (origin top
//! left, y down). Frontends paint the scene however they can.

mod board;
mod border;
mod config;
mod geometry;

pub use board::BoardRenderer;
pub use border::BorderRenderer;
pub use config::{Palette, RenderConfig, Rgb};
pub use geometry::{grid_point, pointer_to_action};

/// A position in logical canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// One draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line {
        from: Point,
        to: Point,
        color: Rgb,
        width: f64,
    },
    Circle {
        center: Point,
        radius: f64,
        color: Rgb,
    },
    Text {
        at: Point,
        text: String,
        color: Rgb,
    },
}

/// Everything needed to paint one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub background: Rgb,
    shapes: Vec<Shape>,
}

impl Scene {
    pub fn new(width: f64, height: f64, background: Rgb) -> Self {
        Scene {
            width,
            height,
            background,
            shapes: Vec::new(),
        }
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
