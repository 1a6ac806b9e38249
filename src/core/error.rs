//! Error types shared by the engines and the configuration loader.
//!
//! Every `GameError` is recoverable: the adapter reports it to the user and
//! leaves the game untouched.

use super::player::PlayerId;

/// Why a steal target was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetReason {
    /// The actor tried to steal from themselves.
    SelfTarget,
    /// The target is not an active player.
    NotInGame,
    /// The target has no cards to steal.
    EmptyHand,
}

impl std::fmt::Display for TargetReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetReason::SelfTarget => write!(f, "you cannot steal from yourself"),
            TargetReason::NotInGame => write!(f, "they are not in this game"),
            TargetReason::EmptyHand => write!(f, "they have no cards"),
        }
    }
}

/// Engine operation failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("it is not your turn ({expected} is up, not {actual})")]
    OutOfTurn { expected: PlayerId, actual: PlayerId },

    #[error("{0} is not playing in this game")]
    NotInGame(PlayerId),

    #[error("the deck is empty")]
    EmptyDeck,

    #[error("cannot target {target}: {reason}")]
    InvalidTarget { target: PlayerId, reason: TargetReason },

    #[error("column {} is full", .column + 1)]
    ColumnFull { column: usize },

    #[error("column {} does not exist", .column + 1)]
    InvalidColumn { column: usize },

    #[error("the game is already over")]
    GameAlreadyOver,

    #[error("invalid game setup: {0}")]
    InvalidSetup(String),
}

/// Configuration loading failure.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, GameError>;
