use super::geometry::grid_point;
use super::{RenderConfig, Rgb, Scene, Shape};
use crate::game::{CapturePath, Coord};

/// Strokes capture boundaries as closed polygons.
pub struct BorderRenderer<'a> {
    config: &'a RenderConfig,
}

impl<'a> BorderRenderer<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        BorderRenderer { config }
    }

    /// Append one segment per consecutive pair of points plus a closing
    /// segment back to the first point, so an N-point path yields N lines.
    ///
    /// Empty and single-point paths enclose nothing and draw nothing.
    pub fn draw(&self, scene: &mut Scene, paths: &[CapturePath], color: Rgb) {
        for path in paths {
            if path.len() < 2 {
                continue;
            }

            for pair in path.windows(2) {
                self.segment(scene, pair[0], pair[1], color);
            }
            self.segment(scene, path[path.len() - 1], path[0], color);
        }
    }

    fn segment(&self, scene: &mut Scene, from: Coord, to: Coord, color: Rgb) {
        scene.push(Shape::Line {
            from: grid_point(self.config, from),
            to: grid_point(self.config, to),
            color,
            width: self.config.border_width,
        });
    }
}
