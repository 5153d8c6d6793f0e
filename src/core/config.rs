//! Display and asset configuration
//!
//! Round timings are fixed constants in `game::machine`; only the
//! presentation layer is configurable here.

use crate::core::error::{GameError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Highest frame rate accepted by `validate`
const MAX_FRAME_RATE: u32 = 240;

/// Configuration for the front ends
///
/// Every field has a default, so a TOML file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Window width in logical pixels
    pub window_width: u32,

    /// Window height in logical pixels
    pub window_height: u32,

    /// Ticks per second; one tick per rendered frame
    pub frame_rate: u32,

    /// Window caption
    pub title: String,

    /// Directory holding background.png, rock.png, paper.png and scissors.png
    pub asset_dir: PathBuf,

    /// Fixed opponent seed for reproducible runs (entropy when unset)
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 600,
            frame_rate: 60,
            title: "Rock-Paper-Scissors - In tribute to Alex Kidd in Miracle World".into(),
            asset_dir: PathBuf::from("assets/images"),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse a config from TOML text and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        tracing::info!("Loaded config from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Load from `path` when given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(GameError::InvalidConfig(format!(
                "window size must be non-zero, got {}x{}",
                self.window_width, self.window_height
            )));
        }

        if self.frame_rate == 0 || self.frame_rate > MAX_FRAME_RATE {
            return Err(GameError::InvalidConfig(format!(
                "frame_rate ({}) must be between 1 and {}",
                self.frame_rate, MAX_FRAME_RATE
            )));
        }

        if self.title.trim().is_empty() {
            return Err(GameError::InvalidConfig("title must not be empty".into()));
        }

        Ok(())
    }

    /// Time budget of one frame at the configured rate
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.window_width, 800);
        assert_eq!(config.window_height, 600);
        assert_eq!(config.frame_rate, 60);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GameConfig::from_toml_str("seed = 7\nasset_dir = \"art\"").unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.asset_dir, PathBuf::from("art"));
        assert_eq!(config.frame_rate, 60);
    }

    #[test]
    fn test_zero_frame_rate_rejected() {
        let err = GameConfig::from_toml_str("frame_rate = 0").unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));
    }

    #[test]
    fn test_zero_window_rejected() {
        let config = GameConfig {
            window_width: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = GameConfig::from_toml_str("frame_rate = \"fast\"").unwrap_err();
        assert!(matches!(err, GameError::ConfigParse(_)));
    }

    #[test]
    fn test_load_or_default_without_path() {
        let config = GameConfig::load_or_default(None).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = GameConfig::load(Path::new("/nonexistent/janken.toml")).unwrap_err();
        assert!(matches!(err, GameError::IoError(_)));
    }

    #[test]
    fn test_frame_interval() {
        let config = GameConfig::default();
        let interval = config.frame_interval();
        assert!(interval > Duration::from_millis(16));
        assert!(interval < Duration::from_millis(17));
    }
}
