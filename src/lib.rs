// Library interface for four-letter-wordle
// This allows integration tests to access internal modules

pub mod cli;
pub mod config;
pub mod error;
pub mod game_state;
pub mod logging;
pub mod scoring;
pub mod selector;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use config::{GameConfig, MAX_ATTEMPTS, WORD_LENGTH};
pub use error::{ConfigError, GameError};
pub use game_state::{GameInterface, GameState, GameStatus, GuessRecord, UserAction, game_loop};
pub use scoring::{Feedback, Score, ScoringRule, score_guess};
pub use selector::{select_secret, select_secret_from};
pub use wordbank::{CandidateList, load_wordbank_from_file, load_wordbank_from_str};
