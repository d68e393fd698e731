use crate::config::{GameConfig, MAX_ATTEMPTS, WORD_LENGTH};
use crate::error::GameError;
use crate::game_state::{GameInterface, GameState, GuessRecord, UserAction};
use crate::scoring::ScoringRule;
use clap::{Parser, ValueEnum};
use std::io::BufRead;
use std::path::PathBuf;

/// Which presentation layer drives the game.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    /// Full-screen terminal interface
    #[default]
    Tui,
    /// Line-based prompts on stdin/stdout
    Cli,
}

/// Guess the secret four-letter word in six attempts
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list to draw the secret from
    #[arg(short = 'w', long = "words")]
    pub wordbank_path: Option<PathBuf>,

    /// Number of non-winning guesses allowed
    #[arg(short = 'a', long = "attempts", default_value_t = MAX_ATTEMPTS)]
    pub attempts: u32,

    /// Letters per word
    #[arg(short = 'l', long = "length", default_value_t = WORD_LENGTH)]
    pub word_length: usize,

    /// Let each secret letter justify at most one yellow mark
    #[arg(long = "classic-scoring")]
    pub classic_scoring: bool,

    /// Seed for a reproducible secret word
    #[arg(long)]
    pub seed: Option<u64>,

    /// Presentation to use
    #[arg(long, value_enum, default_value_t = Mode::Tui)]
    pub mode: Mode,
}

impl Cli {
    #[must_use]
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            word_length: self.word_length,
            max_attempts: self.attempts,
            scoring: if self.classic_scoring {
                ScoringRule::Classic
            } else {
                ScoringRule::Membership
            },
        }
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

pub enum GuessInput {
    Valid(String),
    Invalid,
    Quit,
}

fn is_valid_word(word: &str, word_length: usize) -> bool {
    word.chars().count() == word_length && word.chars().all(|c| c.is_ascii_alphabetic())
}

pub fn read_guess<R: BufRead>(reader: &mut R, word_length: usize) -> GuessInput {
    println!("\nEnter your guess ({word_length} letters, or 'quit' to exit):");
    let mut input = String::new();
    match reader.read_line(&mut input) {
        // EOF behaves like a quit signal
        Ok(0) | Err(_) => return GuessInput::Quit,
        Ok(_) => {}
    }
    let input = input.trim().to_lowercase();

    match input.as_str() {
        "quit" | "exit" => GuessInput::Quit,
        _ if is_valid_word(&input, word_length) => GuessInput::Valid(input),
        _ => {
            println!("Invalid guess. Please enter {word_length} letters.");
            GuessInput::Invalid
        }
    }
}

pub fn display_new_game(word_length: usize, max_attempts: u32) {
    println!("Guess the {word_length}-letter word. You have {max_attempts} attempts.");
    println!("Feedback: G = right letter and spot, Y = in the word elsewhere, X = not in the word.");
}

pub fn display_score(record: &GuessRecord, attempts_remaining: u32) {
    println!("{}  {}", record.guess.to_uppercase(), record.score);
    println!("Attempts remaining: {attempts_remaining}");
}

pub fn display_error(error: &GameError) {
    println!("{error}");
}

pub fn display_game_over(message: &str) {
    println!("{message}");
}

pub fn display_exit_message() {
    println!("Exiting.");
}

/// CLI implementation of the `GameInterface` trait
/// This struct wraps a `BufRead` reader and implements the game interface for line-based play
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_new_game(&mut self, game: &GameState) {
        display_new_game(game.word_length(), game.max_attempts());
    }

    fn read_guess(&mut self, game: &GameState) -> Option<UserAction> {
        match read_guess(&mut self.reader, game.word_length()) {
            GuessInput::Valid(guess) => Some(UserAction::Guess(guess)),
            GuessInput::Quit => Some(UserAction::Quit),
            GuessInput::Invalid => None,
        }
    }

    fn display_score(&mut self, game: &GameState, record: &GuessRecord) {
        display_score(record, game.attempts_remaining());
    }

    fn display_error(&mut self, _game: &GameState, error: &GameError) {
        display_error(error);
    }

    fn display_game_over(&mut self, _game: &GameState, message: &str) {
        display_game_over(message);
    }

    fn wait_for_quit(&mut self) {
        println!("Type 'quit' to exit.");
        let mut input = String::new();
        loop {
            input.clear();
            match self.reader.read_line(&mut input) {
                Ok(0) | Err(_) => return,
                Ok(_) => {
                    if matches!(input.trim().to_lowercase().as_str(), "quit" | "exit") {
                        return;
                    }
                    println!("The game is over. Type 'quit' to exit.");
                }
            }
        }
    }

    fn display_exit_message(&mut self) {
        display_exit_message();
    }
}
