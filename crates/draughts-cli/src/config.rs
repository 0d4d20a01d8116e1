//! Configuration file loading for the terminal front end.
//!
//! Settings come from `draughts.toml` in the current directory. A missing
//! file means defaults; command-line flags override either.

use clap::ValueEnum;
use draughts_core::Side;
use draughts_engine::Difficulty;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Move-selection policy as written in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    Random,
    Greedy,
    #[default]
    Minimax,
}

/// Which side the computer plays, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Opponent {
    #[default]
    Black,
    Red,
    None,
}

/// Front end configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DraughtsConfig {
    #[serde(default)]
    pub difficulty: Policy,
    /// Search depth for the minimax policy. Defaults to 3.
    #[serde(default = "default_depth")]
    pub depth: u8,
    #[serde(default)]
    pub computer: Opponent,
    /// Seed for the computer's random choices; unseeded when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_depth() -> u8 {
    Difficulty::DEFAULT_DEPTH
}

impl Default for DraughtsConfig {
    fn default() -> Self {
        DraughtsConfig {
            difficulty: Policy::default(),
            depth: default_depth(),
            computer: Opponent::default(),
            seed: None,
        }
    }
}

impl DraughtsConfig {
    /// Loads the configuration from [`Self::config_path()`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file exists but cannot be read,
    /// or [`ConfigError::Parse`] if the file contains invalid TOML.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads the configuration from `path`, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns `draughts.toml` in the current working directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from("draughts.toml")
    }

    pub fn difficulty(&self) -> Difficulty {
        match self.difficulty {
            Policy::Random => Difficulty::Random,
            Policy::Greedy => Difficulty::Greedy,
            Policy::Minimax => Difficulty::Minimax { depth: self.depth },
        }
    }

    pub fn computer_side(&self) -> Option<Side> {
        match self.computer {
            Opponent::Black => Some(Side::Black),
            Opponent::Red => Some(Side::Red),
            Opponent::None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let config: DraughtsConfig = toml::from_str(
            r#"
difficulty = "greedy"
depth = 5
computer = "red"
seed = 42
"#,
        )
        .unwrap();
        assert_eq!(config.difficulty(), Difficulty::Greedy);
        assert_eq!(config.depth, 5);
        assert_eq!(config.computer_side(), Some(Side::Red));
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config: DraughtsConfig = toml::from_str("").unwrap();
        assert_eq!(config, DraughtsConfig::default());
        assert_eq!(config.difficulty(), Difficulty::Minimax { depth: 3 });
        assert_eq!(config.computer_side(), Some(Side::Black));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn two_player_config() {
        let config: DraughtsConfig = toml::from_str(r#"computer = "none""#).unwrap();
        assert_eq!(config.computer_side(), None);
    }

    #[test]
    fn invalid_toml_is_rejected() {
        assert!(toml::from_str::<DraughtsConfig>("difficulty = ").is_err());
        assert!(toml::from_str::<DraughtsConfig>(r#"difficulty = "hard""#).is_err());
    }

    #[test]
    fn missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("draughts-config-does-not-exist.toml");
        let config = DraughtsConfig::load_from(&path).unwrap();
        assert_eq!(config, DraughtsConfig::default());
    }

    #[test]
    fn load_from_file() {
        let path = std::env::temp_dir().join(format!("draughts-{}.toml", std::process::id()));
        std::fs::write(&path, "difficulty = \"random\"\n").unwrap();
        let config = DraughtsConfig::load_from(&path);
        std::fs::remove_file(&path).ok();
        assert_eq!(config.unwrap().difficulty(), Difficulty::Random);
    }
}
