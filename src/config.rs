use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::agent::SearchParams;
use crate::error::ConfigError;
use crate::eval::EvalConfig;
use crate::render::RenderConfig;

/// Board size every session is created with.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            width: 8,
            height: 8,
        }
    }
}

/// Values handed to agent construction and, for the two exploration knobs,
/// to every move request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub c_puct_base: f32,
    pub c_puct_init: f32,
    pub num_simulations: usize,
    pub num_parallel: usize,
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            c_puct_base: 19652.0,
            c_puct_init: 1.25,
            num_simulations: 380,
            num_parallel: 8,
            seed: 1,
        }
    }
}

impl SearchConfig {
    pub fn params(&self) -> SearchParams {
        SearchParams {
            c_puct_base: self.c_puct_base,
            c_puct_init: self.c_puct_init,
        }
    }
}

/// Interactive play settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// Input polling rate.
    pub tick_hz: u32,
    /// Whether a configured agent answers each human move.
    pub agent_reply: bool,
    pub log_file: PathBuf,
}

impl Default for PlayConfig {
    fn default() -> Self {
        PlayConfig {
            tick_hz: 60,
            agent_reply: true,
            log_file: PathBuf::from("dots_play.log"),
        }
    }
}

impl PlayConfig {
    pub fn tick(&self) -> Duration {
        Duration::from_secs(1) / self.tick_hz.max(1)
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub search: SearchConfig,
    pub eval: EvalConfig,
    pub play: PlayConfig,
    pub render: RenderConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.width == 0 || self.board.height == 0 {
            return Err(ConfigError::Validation(
                "board.width and board.height must be > 0".into(),
            ));
        }

        if self.search.c_puct_base <= 0.0 {
            return Err(ConfigError::Validation(
                "search.c_puct_base must be > 0".into(),
            ));
        }
        if self.search.c_puct_init < 0.0 {
            return Err(ConfigError::Validation(
                "search.c_puct_init must be >= 0".into(),
            ));
        }
        if self.search.num_simulations == 0 {
            return Err(ConfigError::Validation(
                "search.num_simulations must be >= 1".into(),
            ));
        }
        if self.search.num_parallel == 0 {
            return Err(ConfigError::Validation(
                "search.num_parallel must be >= 1".into(),
            ));
        }

        if self.eval.games == 0 {
            return Err(ConfigError::Validation("eval.games must be > 0".into()));
        }

        if self.play.tick_hz == 0 {
            return Err(ConfigError::Validation("play.tick_hz must be > 0".into()));
        }

        let render = &self.render;
        if render.canvas_width <= 0.0 || render.canvas_height <= 0.0 {
            return Err(ConfigError::Validation(
                "render canvas size must be > 0".into(),
            ));
        }
        if render.grid_spacing <= 0.0 {
            return Err(ConfigError::Validation(
                "render.grid_spacing must be > 0".into(),
            ));
        }
        if render.grid_margin < 0.0 || render.line_width <= 0.0 || render.border_width <= 0.0 {
            return Err(ConfigError::Validation(
                "render margins and stroke widths must be positive".into(),
            ));
        }
        if render.stone_radius <= 0.0 {
            return Err(ConfigError::Validation(
                "render.stone_radius must be > 0".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Rgb;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_defaults_match_reference_setup() {
        let config = AppConfig::default();
        assert_eq!((config.board.width, config.board.height), (8, 8));
        assert_eq!(config.search.params(), SearchParams::default());
        assert_eq!(config.eval.games, 2);
        assert_eq!(config.render.grid_spacing, 67.0);
        assert_eq!(config.render.canvas_width, 480.0);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[search]
c_puct_init = 2.5

[render.colors]
side_b = [0, 0, 255]
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert!((config.search.c_puct_init - 2.5).abs() < 1e-6);
        assert!((config.search.c_puct_base - 19652.0).abs() < 1e-3);
        assert_eq!(config.render.colors.side_b, Rgb(0, 0, 255));
        assert_eq!(config.render.colors.side_a, Rgb::BLACK);
        assert_eq!(config.board.width, 8);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.eval.games, AppConfig::default().eval.games);
        assert_eq!(config.render, RenderConfig::default());
    }

    #[test]
    fn test_validation_rejects_empty_board() {
        let mut config = AppConfig::default();
        config.board.height = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_games() {
        let mut config = AppConfig::default();
        config.eval.games = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_spacing() {
        let mut config = AppConfig::default();
        config.render.grid_spacing = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_tick_rate() {
        let mut config = AppConfig::default();
        config.play.tick_hz = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_non_positive_c_puct_base() {
        let mut config = AppConfig::default();
        config.search.c_puct_base = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_tick_duration() {
        let play = PlayConfig::default();
        assert_eq!(play.tick(), Duration::from_nanos(16_666_666));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.board.width, 8);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[board]
width = 6
height = 5

[eval]
games = 10
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!((config.board.width, config.board.height), (6, 5));
        assert_eq!(config.eval.games, 10);
        assert_eq!(config.play.tick_hz, 60);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[board]\nwidth = 0\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml().unwrap();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config.render, RenderConfig::default());
    }
}
