use serde::{Deserialize, Serialize};

/// 8-bit RGB color, `[r, g, b]` in TOML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const RED: Rgb = Rgb(255, 0, 0);
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Rgb,
    pub grid: Rgb,
    pub side_a: Rgb,
    pub side_a_disabled: Rgb,
    pub side_b: Rgb,
    pub side_b_disabled: Rgb,
    /// Capture-area readout.
    pub readout: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            background: Rgb::WHITE,
            grid: Rgb(150, 150, 220),
            side_a: Rgb::BLACK,
            side_a_disabled: Rgb(128, 128, 128),
            side_b: Rgb::RED,
            side_b_disabled: Rgb(255, 200, 200),
            readout: Rgb::RED,
        }
    }
}

/// Canvas geometry and colors. Fixed for the lifetime of a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Distance between neighbouring grid lines.
    pub grid_spacing: f64,
    pub grid_margin: f64,
    pub line_width: f64,
    /// Stroke width of capture borders.
    pub border_width: f64,
    pub stone_radius: f64,
    pub readout_x: f64,
    pub readout_y: f64,
    pub colors: Palette,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            canvas_width: 480.0,
            canvas_height: 480.0,
            grid_spacing: 67.0,
            grid_margin: 5.0,
            line_width: 1.0,
            border_width: 3.0,
            stone_radius: 6.0,
            readout_x: 20.0,
            readout_y: 20.0,
            colors: Palette::default(),
        }
    }
}
