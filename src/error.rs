//! Error types for configuration and gameplay.
//!
//! Configuration errors are fatal: the game cannot start without a valid
//! candidate list and settings. Gameplay errors are recoverable and leave the
//! game state untouched.

use crate::game_state::GameStatus;
use derive_more::{Display, Error};

/// A problem with the candidate list or game settings.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    #[display("candidate list is empty")]
    EmptyCandidateList,
    #[display("candidate '{word}' has {actual} letters, expected {expected}")]
    WrongWordLength {
        word: String,
        expected: usize,
        actual: usize,
    },
    #[display("candidate '{word}' must contain only letters")]
    NonAlphabetic { word: String },
    #[display("candidate '{word}' appears more than once")]
    DuplicateCandidate { word: String },
    #[display("word length must be at least 1")]
    ZeroWordLength,
    #[display("attempt budget must be at least 1")]
    ZeroAttempts,
    #[display("failed to read word list '{path}': {message}")]
    WordListIo { path: String, message: String },
}

/// Errors returned by the game engine.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    #[display("configuration error: {_0}")]
    Configuration(#[error(source)] ConfigError),
    #[display("guess must be exactly {expected} letters, got {actual}")]
    InvalidGuessLength { expected: usize, actual: usize },
    #[display("the game is already over ({status})")]
    GameAlreadyOver { status: GameStatus },
}

impl From<ConfigError> for GameError {
    fn from(err: ConfigError) -> Self {
        Self::Configuration(err)
    }
}
