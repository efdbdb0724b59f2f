use std::path::Path;

use crate::error::ConfigError;
use crate::game::{BoardSize, Color, Player, PlayerId};

/// Piece colors chosen before play starts.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub player1_color: Color,
    pub player2_color: Color,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            player1_color: Color::RED,
            player2_color: Color::YELLOW,
        }
    }
}

impl PlayersConfig {
    /// Build the two player records handed to the engine at game start.
    pub fn players(&self) -> (Player, Player) {
        (
            Player::new(PlayerId::One, self.player1_color),
            Player::new(PlayerId::Two, self.player2_color),
        )
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardSize,
    pub players: PlayersConfig,
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
            eprintln!("Warning: config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.board
            .validate()
            .map_err(|e| ConfigError::Validation(format!("board: {e}")))
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
