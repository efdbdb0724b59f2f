use std::path::PathBuf;

use crate::game::GameStatus;

/// Rejected engine operations. None of these are fatal: the engine is left
/// exactly as it was and the caller may try again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("cannot {operation} while the game is {status}")]
    InvalidState {
        status: GameStatus,
        operation: &'static str,
    },

    #[error("column {column} is out of range (board has {width} columns)")]
    InvalidColumn { column: isize, width: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("players must be supplied as player 1 then player 2")]
    InvalidPlayers,

    #[error("board size {height}x{width} is out of range (each dimension must be 1..={max})")]
    InvalidBoardSize {
        height: usize,
        width: usize,
        max: usize,
    },
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

    #[error("invalid color '{0}' (expected #rrggbb)")]
    InvalidColor(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_state_display() {
        let err = GameError::InvalidState {
            status: GameStatus::Idle,
            operation: "drop a piece",
        };
        assert_eq!(err.to_string(), "cannot drop a piece while the game is idle");
    }

    #[test]
    fn test_invalid_column_display() {
        let err = GameError::InvalidColumn { column: -1, width: 7 };
        assert_eq!(
            err.to_string(),
            "column -1 is out of range (board has 7 columns)"
        );
    }

    #[test]
    fn test_column_full_display() {
        let err = GameError::ColumnFull { column: 3 };
        assert_eq!(err.to_string(), "column 3 is full");
    }

    #[test]
    fn test_invalid_board_size_display() {
        let err = GameError::InvalidBoardSize {
            height: 0,
            width: 7,
            max: 32,
        };
        assert_eq!(
            err.to_string(),
            "board size 0x7 is out of range (each dimension must be 1..=32)"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board.width must be >= 1".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: board.width must be >= 1"
        );
    }

    #[test]
    fn test_invalid_color_display() {
        let err = ConfigError::InvalidColor("blue".to_string());
        assert_eq!(err.to_string(), "invalid color 'blue' (expected #rrggbb)");
    }
}
