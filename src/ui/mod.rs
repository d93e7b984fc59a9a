//! Interactive play: the input/redraw loop, the ratatui canvas view that
//! paints a rendered scene, and the crossterm terminal frontend.

pub mod canvas_view;
mod play_loop;
mod terminal;

pub use play_loop::{Frontend, InputEvent, LoopState, PlayLoop};
pub use terminal::{run_interactive, TerminalFrontend};
