use std::path::PathBuf;

use crate::game::Player;

/// Errors raised by board construction and move validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid board state: {0}")]
    InvalidState(String),

    #[error("operation requires a real player, got {0}")]
    InvalidPlayer(Player),

    #[error("invalid move by {player} at location {location} (expected a real player and a location in 1..=6)")]
    InvalidMove { player: Player, location: usize },
}

/// Errors raised while an agent picks or plays a move.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("{player} has no legal move; the game should have been checked for completion first")]
    NoLegalMove { player: Player },

    #[error("board error: {0}")]
    Board(#[from] BoardError),
}

/// Error type returned by statistics sinks.
pub type SinkError = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised when pushing statistics to sinks.
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error("stats sink #{sink_index} failed: {source}")]
    Sink {
        sink_index: usize,
        #[source]
        source: SinkError,
    },
}

/// Errors that can occur while running a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("agent error: {0}")]
    Agent(#[from] AgentError),

    #[error("board error: {0}")]
    Board(#[from] BoardError),

    #[error("agent '{agent}' is bound to {bound} but was seated as {seat}")]
    SeatMismatch {
        agent: String,
        bound: Player,
        seat: Player,
    },

    #[error("first mover must be a real player, got {0}")]
    InvalidFirstMover(Player),

    #[error("statistics error: {0}")]
    Stats(#[from] StatsError),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_error_display() {
        let err = BoardError::InvalidMove {
            player: Player::Two,
            location: 9,
        };
        assert_eq!(
            err.to_string(),
            "invalid move by Player2 at location 9 (expected a real player and a location in 1..=6)"
        );
        assert_eq!(
            BoardError::InvalidPlayer(Player::Nobody).to_string(),
            "operation requires a real player, got Nobody"
        );
    }

    #[test]
    fn test_agent_error_display() {
        let err = AgentError::NoLegalMove { player: Player::One };
        assert_eq!(
            err.to_string(),
            "Player1 has no legal move; the game should have been checked for completion first"
        );
    }

    #[test]
    fn test_session_error_wraps_agent_error() {
        let err: SessionError = AgentError::NoLegalMove { player: Player::Two }.into();
        assert!(matches!(
            err,
            SessionError::Agent(AgentError::NoLegalMove { player: Player::Two })
        ));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("session.games must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: session.games must be > 0"
        );
    }
}
