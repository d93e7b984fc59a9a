//! # Dots Play
//!
//! Session, interactive play and agent-vs-agent evaluation for the game of
//! Dots on a rectangular grid. The capture rules live behind the
//! [`game::Engine`] trait; everything here drives an engine, renders it and
//! keeps score.
//!
//! ## Modules
//!
//! - [`game`]: Board model, engine seam, game session state machine
//! - [`agent`]: Agent trait, search parameters, random agent
//! - [`render`]: Display list of the board, captured regions and readout
//! - [`ui`]: Event-driven play loop and its terminal front end
//! - [`eval`]: Alternating-start evaluation of two agents
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types
//! - [`logging`]: Tracing subscriber setup

pub mod agent;
pub mod config;
pub mod error;
pub mod eval;
pub mod game;
pub mod logging;
pub mod render;
pub mod ui;

#[cfg(test)]
mod testing;
