use crate::error::ConfigError;
use crate::scoring::ScoringRule;

/// Number of letters in every secret and guess.
pub const WORD_LENGTH: usize = 4;

/// Non-winning guesses allowed before the game is lost.
pub const MAX_ATTEMPTS: u32 = 6;

/// Settings fixed at engine construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub word_length: usize,
    pub max_attempts: u32,
    pub scoring: ScoringRule,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: WORD_LENGTH,
            max_attempts: MAX_ATTEMPTS,
            scoring: ScoringRule::default(),
        }
    }
}

impl GameConfig {
    /// Check the settings before a game is built from them.
    ///
    /// # Errors
    /// Returns `ConfigError` when the word length or attempt budget is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.word_length == 0 {
            return Err(ConfigError::ZeroWordLength);
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.word_length, 4);
        assert_eq!(config.max_attempts, 6);
        assert_eq!(config.scoring, ScoringRule::Membership);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_values_rejected() {
        let config = GameConfig {
            word_length: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroWordLength));

        let config = GameConfig {
            max_attempts: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroAttempts));
    }
}
