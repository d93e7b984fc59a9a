use super::{Point, RenderConfig};
use crate::game::{Board, Coord};

/// Canvas position of a grid intersection.
pub fn grid_point(config: &RenderConfig, coord: Coord) -> Point {
    Point {
        x: coord.x as f64 * config.grid_spacing + config.grid_margin,
        y: coord.y as f64 * config.grid_spacing + config.grid_margin,
    }
}

/// Action under a pointer, rounding to the nearest grid line.
///
/// `gx = floor((px + spacing / 2) / spacing)`, likewise for `gy`. Points that
/// round to an intersection off the board give `None`.
pub fn pointer_to_action(config: &RenderConfig, board: &Board, px: f64, py: f64) -> Option<usize> {
    let half = config.grid_spacing / 2.0;
    let gx = ((px + half) / config.grid_spacing).floor();
    let gy = ((py + half) / config.grid_spacing).floor();
    if !gx.is_finite() || !gy.is_finite() || gx < 0.0 || gy < 0.0 {
        return None;
    }
    board.action_of(Coord::new(gx as usize, gy as usize))
}
