use crate::error::ConfigError;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

const APP_DIR: &str = "four-letter-wordle";
const USER_WORDBANK_FILE: &str = "words.txt";

/// Ordered, non-empty list of distinct lowercase words that all share one length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateList {
    words: Vec<String>,
    word_length: usize,
}

impl CandidateList {
    /// Build a candidate list, lowercasing every entry.
    ///
    /// # Errors
    /// Returns `ConfigError` if the list is empty, or any word has the wrong
    /// length, contains a non-letter, or repeats an earlier word.
    pub fn new<I, S>(words: I, word_length: usize) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if word_length == 0 {
            return Err(ConfigError::ZeroWordLength);
        }

        let mut seen = HashSet::new();
        let mut list = Vec::new();
        for word in words {
            let word = word.as_ref().to_lowercase();
            let actual = word.chars().count();
            if actual != word_length {
                return Err(ConfigError::WrongWordLength {
                    word,
                    expected: word_length,
                    actual,
                });
            }
            if !word.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(ConfigError::NonAlphabetic { word });
            }
            if !seen.insert(word.clone()) {
                return Err(ConfigError::DuplicateCandidate { word });
            }
            list.push(word);
        }

        if list.is_empty() {
            return Err(ConfigError::EmptyCandidateList);
        }

        Ok(Self {
            words: list,
            word_length,
        })
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

/// Split word-list text into trimmed lines, skipping blanks and `#` comments.
#[must_use]
pub fn parse_wordbank(data: &str) -> Vec<String> {
    data.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Load and validate a candidate list from newline-delimited text.
///
/// # Errors
/// Returns `ConfigError` when the resulting list breaks a candidate invariant.
pub fn load_wordbank_from_str(data: &str, word_length: usize) -> Result<CandidateList, ConfigError> {
    CandidateList::new(parse_wordbank(data), word_length)
}

/// Load and validate a candidate list from a newline-delimited file.
///
/// # Errors
/// Returns `ConfigError::WordListIo` if the file cannot be read, or another
/// `ConfigError` when its contents are invalid.
pub fn load_wordbank_from_file<P: AsRef<Path>>(
    path: P,
    word_length: usize,
) -> Result<CandidateList, ConfigError> {
    let path = path.as_ref();
    let data = fs::read_to_string(path).map_err(|e| ConfigError::WordListIo {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    load_wordbank_from_str(&data, word_length)
}

/// Location of the optional per-user word list.
#[must_use]
pub fn user_wordbank_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(USER_WORDBANK_FILE))
}

/// Pick the word list: an explicit path, then the per-user file, then the
/// embedded list.
///
/// # Errors
/// Returns `ConfigError` if the chosen source cannot be read or is invalid.
pub fn resolve_wordbank(
    explicit: Option<&Path>,
    word_length: usize,
) -> Result<CandidateList, ConfigError> {
    if let Some(path) = explicit {
        return load_wordbank_from_file(path, word_length);
    }
    if let Some(path) = user_wordbank_path()
        && path.is_file()
    {
        return load_wordbank_from_file(&path, word_length);
    }
    load_wordbank_from_str(EMBEDDED_WORDBANK, word_length)
}
