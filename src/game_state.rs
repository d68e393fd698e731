//! Game engine and the host loop that drives it.
//!
//! # State Machine
//! - `InProgress` → `Won` when a guess scores all exact matches
//! - `InProgress` → `Lost` when the attempt budget runs out
//! - `Won` and `Lost` are terminal; further guesses are rejected

use crate::config::GameConfig;
use crate::error::GameError;
use crate::scoring::{Score, score_guess};
use crate::selector::select_secret;
use crate::wordbank::CandidateList;
use crate::{debug_log, info_log};
use derive_more::Display;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum GameStatus {
    #[display("in progress")]
    InProgress,
    #[display("won")]
    Won,
    #[display("lost")]
    Lost,
}

impl GameStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// A scored guess kept in the game history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: String,
    pub score: Score,
}

/// State of a single game. Only `submit_guess` mutates it.
#[derive(Debug, Clone)]
pub struct GameState {
    secret: String,
    config: GameConfig,
    attempts_remaining: u32,
    history: Vec<GuessRecord>,
    status: GameStatus,
}

impl GameState {
    /// Start a game with a secret drawn from `candidates`.
    ///
    /// # Errors
    /// Returns `GameError::Configuration` if the config is invalid or the
    /// candidates do not match the configured word length.
    pub fn new_game<R: Rng + ?Sized>(
        candidates: &CandidateList,
        config: &GameConfig,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        config.validate()?;
        if candidates.word_length() != config.word_length {
            // Every candidate shares the list's length, so report the first.
            return Err(crate::error::ConfigError::WrongWordLength {
                word: candidates.words()[0].clone(),
                expected: config.word_length,
                actual: candidates.word_length(),
            }
            .into());
        }

        let secret = select_secret(candidates, rng);
        info_log!(
            "New game: {} candidates, {} attempts, {:?} scoring",
            candidates.len(),
            config.max_attempts,
            config.scoring
        );
        debug_log!("Secret selected: '{}'", secret);
        Ok(Self::start(secret.to_string(), *config))
    }

    /// Start a game with a known secret.
    ///
    /// # Errors
    /// Returns `GameError::Configuration` if the config is invalid or the
    /// secret is not a valid candidate for it.
    pub fn with_secret(secret: &str, config: &GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let candidates = CandidateList::new([secret], config.word_length)?;
        Ok(Self::start(candidates.words()[0].clone(), *config))
    }

    fn start(secret: String, config: GameConfig) -> Self {
        Self {
            secret,
            attempts_remaining: config.max_attempts,
            config,
            history: Vec::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Validate, score and record one guess.
    ///
    /// Rejected submissions leave the state untouched.
    ///
    /// # Errors
    /// - `GameError::GameAlreadyOver` once the game is won or lost
    /// - `GameError::InvalidGuessLength` if the normalized guess has the wrong length
    pub fn submit_guess(&mut self, raw: &str) -> Result<Score, GameError> {
        if self.status.is_terminal() {
            info_log!("Guess '{}' rejected: game already {}", raw, self.status);
            return Err(GameError::GameAlreadyOver {
                status: self.status,
            });
        }

        let guess = normalize_guess(raw);
        let actual = guess.chars().count();
        if actual != self.config.word_length {
            info_log!(
                "Guess '{}' rejected: {} letters, expected {}",
                guess,
                actual,
                self.config.word_length
            );
            return Err(GameError::InvalidGuessLength {
                expected: self.config.word_length,
                actual,
            });
        }

        let score = score_guess(&self.secret, &guess, self.config.scoring);
        info_log!("Guess '{}' scored {}", guess, score);
        self.history.push(GuessRecord {
            guess,
            score: score.clone(),
        });

        if score.is_win() {
            self.status = GameStatus::Won;
            info_log!("Game won after {} guesses", self.history.len());
        } else {
            self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
            if self.attempts_remaining == 0 {
                self.status = GameStatus::Lost;
                info_log!("Game lost: attempts exhausted");
            }
        }

        Ok(score)
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.config.word_length
    }

    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.config.max_attempts
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// The secret, only once the game has ended.
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&str> {
        self.is_over().then_some(self.secret.as_str())
    }

    /// Closing message for a finished game.
    #[must_use]
    pub fn end_message(&self) -> Option<String> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Won => Some(format!(
                "Congratulations! You guessed the word '{}' correctly!",
                self.secret
            )),
            GameStatus::Lost => Some(format!(
                "Sorry, you ran out of attempts. The word was '{}'.",
                self.secret
            )),
        }
    }
}

fn normalize_guess(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Input collected by a presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Guess(String),
    Quit,
}

/// A presentation layer the host loop can drive.
///
/// Implementations only read the game; the loop owns every mutation.
pub trait GameInterface {
    fn display_new_game(&mut self, game: &GameState);
    /// Returns `None` when the input was rejected locally and should be re-read.
    fn read_guess(&mut self, game: &GameState) -> Option<UserAction>;
    fn display_score(&mut self, game: &GameState, record: &GuessRecord);
    fn display_error(&mut self, game: &GameState, error: &GameError);
    fn display_game_over(&mut self, game: &GameState, message: &str);
    /// Block until the player asks to quit.
    fn wait_for_quit(&mut self);
    fn display_exit_message(&mut self);
}

/// Run one game to completion or until the player quits.
///
/// Returns the status the game was left in.
pub fn game_loop<I: GameInterface + ?Sized>(game: &mut GameState, interface: &mut I) -> GameStatus {
    interface.display_new_game(game);

    while !game.is_over() {
        let raw = match interface.read_guess(game) {
            Some(UserAction::Quit) => {
                info_log!("Player quit with game {}", game.status());
                interface.display_exit_message();
                return game.status();
            }
            Some(UserAction::Guess(raw)) => raw,
            None => continue,
        };

        match game.submit_guess(&raw) {
            Ok(_) => {
                if let Some(record) = game.history().last() {
                    interface.display_score(game, record);
                }
            }
            Err(e) => {
                debug_log!("Submission rejected: {}", e);
                interface.display_error(game, &e);
            }
        }
    }

    if let Some(message) = game.end_message() {
        interface.display_game_over(game, &message);
    }
    interface.wait_for_quit();
    interface.display_exit_message();
    game.status()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use crate::scoring::{Feedback, ScoringRule};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn tree_game() -> GameState {
        GameState::with_secret("tree", &GameConfig::default()).unwrap()
    }

    #[test]
    fn test_new_game_starts_in_progress() {
        let game = tree_game();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.attempts_remaining(), 6);
        assert!(game.history().is_empty());
        assert_eq!(game.revealed_secret(), None);
        assert_eq!(game.end_message(), None);
    }

    #[test]
    fn test_new_game_single_candidate() {
        let list = CandidateList::new(["tree"], 4).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let mut game = GameState::new_game(&list, &GameConfig::default(), &mut rng).unwrap();
        let score = game.submit_guess("tree").unwrap();
        assert_eq!(score.feedback(), &[Feedback::ExactMatch; 4]);
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn test_new_game_rejects_mismatched_length() {
        let list = CandidateList::new(["trees"], 5).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let err = GameState::new_game(&list, &GameConfig::default(), &mut rng).unwrap_err();
        assert!(matches!(
            err,
            GameError::Configuration(ConfigError::WrongWordLength { expected: 4, actual: 5, .. })
        ));
    }

    #[test]
    fn test_new_game_rejects_invalid_config() {
        let list = CandidateList::new(["tree"], 4).unwrap();
        let config = GameConfig {
            max_attempts: 0,
            ..GameConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(
            GameState::new_game(&list, &config, &mut rng).unwrap_err(),
            GameError::Configuration(ConfigError::ZeroAttempts)
        );
    }

    #[test]
    fn test_with_secret_validates_length() {
        assert!(matches!(
            GameState::with_secret("trees", &GameConfig::default()),
            Err(GameError::Configuration(ConfigError::WrongWordLength { .. }))
        ));
    }

    #[test]
    fn test_winning_guess() {
        let mut game = tree_game();
        let score = game.submit_guess("tree").unwrap();
        assert!(score.is_win());
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.attempts_remaining(), 6);
        assert_eq!(game.revealed_secret(), Some("tree"));
        assert_eq!(
            game.end_message().unwrap(),
            "Congratulations! You guessed the word 'tree' correctly!"
        );
    }

    #[test]
    fn test_guess_is_case_insensitive() {
        let mut game = tree_game();
        game.submit_guess("  TrEE ").unwrap();
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.history()[0].guess, "tree");
    }

    #[test]
    fn test_win_on_last_attempt() {
        let mut game = tree_game();
        for guess in ["rain", "wind", "bell", "ship", "fish"] {
            game.submit_guess(guess).unwrap();
        }
        assert_eq!(game.attempts_remaining(), 1);
        game.submit_guess("tree").unwrap();
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.attempts_remaining(), 1);
    }

    #[test]
    fn test_six_misses_lose() {
        let mut game = tree_game();
        let guesses = ["rain", "wind", "bell", "ship", "fish", "lock"];
        for (i, guess) in guesses.iter().enumerate() {
            assert_eq!(game.status(), GameStatus::InProgress);
            game.submit_guess(guess).unwrap();
            assert_eq!(game.attempts_remaining(), 6 - (i as u32 + 1));
        }
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.attempts_remaining(), 0);
        assert_eq!(game.history().len(), 6);
        assert_eq!(
            game.end_message().unwrap(),
            "Sorry, you ran out of attempts. The word was 'tree'."
        );
    }

    #[test]
    fn test_wrong_length_leaves_state_unchanged() {
        let mut game = tree_game();
        assert_eq!(
            game.submit_guess("xyz"),
            Err(GameError::InvalidGuessLength {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(
            game.submit_guess("trees"),
            Err(GameError::InvalidGuessLength {
                expected: 4,
                actual: 5
            })
        );
        assert_eq!(game.attempts_remaining(), 6);
        assert!(game.history().is_empty());
        assert_eq!(game.status(), GameStatus::InProgress);

        // resubmission still works
        game.submit_guess("tree").unwrap();
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn test_empty_guess_rejected() {
        let mut game = tree_game();
        assert_eq!(
            game.submit_guess("   "),
            Err(GameError::InvalidGuessLength {
                expected: 4,
                actual: 0
            })
        );
    }

    #[test]
    fn test_submit_after_win_rejected() {
        let mut game = tree_game();
        game.submit_guess("tree").unwrap();
        let err = game.submit_guess("rain").unwrap_err();
        assert_eq!(
            err,
            GameError::GameAlreadyOver {
                status: GameStatus::Won
            }
        );
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.attempts_remaining(), 6);
    }

    #[test]
    fn test_submit_after_loss_rejected() {
        let mut game = tree_game();
        for guess in ["rain", "wind", "bell", "ship", "fish", "lock"] {
            game.submit_guess(guess).unwrap();
        }
        // even a wrong-length guess reports the game as over
        for guess in ["tree", "xyz"] {
            assert_eq!(
                game.submit_guess(guess),
                Err(GameError::GameAlreadyOver {
                    status: GameStatus::Lost
                })
            );
        }
        assert_eq!(game.history().len(), 6);
        assert_eq!(game.attempts_remaining(), 0);
    }

    #[test]
    fn test_history_records_book_obbo() {
        let mut game = GameState::with_secret("book", &GameConfig::default()).unwrap();
        game.submit_guess("obbo").unwrap();
        let record = &game.history()[0];
        assert_eq!(record.guess, "obbo");
        assert_eq!(record.score.to_string(), "YYYY");
    }

    #[test]
    fn test_classic_scoring_config() {
        let config = GameConfig {
            scoring: ScoringRule::Classic,
            ..GameConfig::default()
        };
        let mut game = GameState::with_secret("book", &config).unwrap();
        let score = game.submit_guess("obbo").unwrap();
        assert_eq!(score.to_string(), "YYXY");
    }

    #[test]
    fn test_custom_budget_and_length() {
        let config = GameConfig {
            word_length: 5,
            max_attempts: 2,
            ..GameConfig::default()
        };
        let mut game = GameState::with_secret("crane", &config).unwrap();
        game.submit_guess("slate").unwrap();
        game.submit_guess("trace").unwrap();
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.revealed_secret(), Some("crane"));
    }

    /// Scripted interface that records what the loop showed it.
    struct ScriptedInterface {
        inputs: Vec<Option<UserAction>>,
        scores: Vec<String>,
        errors: Vec<GameError>,
        game_over: Option<String>,
        waited_for_quit: bool,
        exited: bool,
    }

    impl ScriptedInterface {
        fn new(inputs: Vec<Option<UserAction>>) -> Self {
            Self {
                inputs: inputs.into_iter().rev().collect(),
                scores: Vec::new(),
                errors: Vec::new(),
                game_over: None,
                waited_for_quit: false,
                exited: false,
            }
        }
    }

    impl GameInterface for ScriptedInterface {
        fn display_new_game(&mut self, _game: &GameState) {}

        fn read_guess(&mut self, _game: &GameState) -> Option<UserAction> {
            self.inputs.pop().unwrap_or(Some(UserAction::Quit))
        }

        fn display_score(&mut self, _game: &GameState, record: &GuessRecord) {
            self.scores.push(record.score.to_string());
        }

        fn display_error(&mut self, _game: &GameState, error: &GameError) {
            self.errors.push(error.clone());
        }

        fn display_game_over(&mut self, _game: &GameState, message: &str) {
            self.game_over = Some(message.to_string());
        }

        fn wait_for_quit(&mut self) {
            self.waited_for_quit = true;
        }

        fn display_exit_message(&mut self) {
            self.exited = true;
        }
    }

    fn guess(word: &str) -> Option<UserAction> {
        Some(UserAction::Guess(word.to_string()))
    }

    #[test]
    fn test_game_loop_win() {
        let mut game = tree_game();
        let mut ui = ScriptedInterface::new(vec![guess("rain"), None, guess("tree")]);
        assert_eq!(game_loop(&mut game, &mut ui), GameStatus::Won);
        assert_eq!(ui.scores, vec!["YXXX".to_string(), "GGGG".to_string()]);
        assert!(ui.game_over.unwrap().starts_with("Congratulations"));
        assert!(ui.waited_for_quit);
        assert!(ui.exited);
    }

    #[test]
    fn test_game_loop_reports_invalid_length() {
        let mut game = tree_game();
        let mut ui = ScriptedInterface::new(vec![guess("xyz"), guess("tree")]);
        game_loop(&mut game, &mut ui);
        assert_eq!(
            ui.errors,
            vec![GameError::InvalidGuessLength {
                expected: 4,
                actual: 3
            }]
        );
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn test_game_loop_loss() {
        let mut game = tree_game();
        let inputs = ["rain", "wind", "bell", "ship", "fish", "lock"]
            .into_iter()
            .map(guess)
            .collect();
        let mut ui = ScriptedInterface::new(inputs);
        assert_eq!(game_loop(&mut game, &mut ui), GameStatus::Lost);
        assert_eq!(ui.scores.len(), 6);
        assert!(ui.game_over.unwrap().starts_with("Sorry"));
    }

    #[test]
    fn test_game_loop_quit_mid_game() {
        let mut game = tree_game();
        let mut ui = ScriptedInterface::new(vec![guess("rain"), Some(UserAction::Quit)]);
        assert_eq!(game_loop(&mut game, &mut ui), GameStatus::InProgress);
        assert_eq!(game.attempts_remaining(), 5);
        assert!(ui.game_over.is_none());
        assert!(!ui.waited_for_quit);
        assert!(ui.exited);
    }
}
