use std::path::PathBuf;

/// Reasons a [`GameSession::step`](crate::game::GameSession::step) is rejected.
/// A rejected step never touches the board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StepError {
    #[error("game is over, call reset before stepping again")]
    TerminalSession,

    #[error("action {action} is out of range (board has {num_actions} actions)")]
    OutOfRange { action: usize, num_actions: usize },

    #[error("illegal action {action}")]
    IllegalAction { action: usize },
}

/// Errors that can occur while evaluating agents against each other.
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    #[error("agent move rejected: {0}")]
    Step(#[from] StepError),

    #[error("game {game} has no legal actions at ply {ply} but is not over")]
    NoLegalActions { game: usize, ply: usize },
}

/// Errors that end the interactive play loop.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("agent reply rejected: {0}")]
    Step(#[from] StepError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
