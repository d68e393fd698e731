//! Per-letter scoring of a guess against the secret.
//!
//! Two rules are available:
//! - [`ScoringRule::Membership`] (default): a misplaced letter is marked
//!   present whenever it occurs anywhere in the secret. A guess that repeats a
//!   letter can collect several `PresentElsewhere` marks even if the secret
//!   holds that letter once.
//! - [`ScoringRule::Classic`]: exact matches consume their secret letter first,
//!   then each remaining secret letter can justify at most one
//!   `PresentElsewhere` mark.

use std::fmt;

/// Classification of a single guessed letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    ExactMatch,       // Green
    PresentElsewhere, // Yellow
    Absent,           // Gray
}

impl Feedback {
    #[must_use]
    pub fn to_char(self) -> char {
        match self {
            Self::ExactMatch => 'G',
            Self::PresentElsewhere => 'Y',
            Self::Absent => 'X',
        }
    }
}

/// How repeated letters are resolved when scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringRule {
    #[default]
    Membership,
    Classic,
}

/// Ordered per-position feedback for one guess.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Score(Vec<Feedback>);

impl Score {
    #[must_use]
    pub fn feedback(&self) -> &[Feedback] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every position is an exact match.
    #[must_use]
    pub fn is_win(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|f| *f == Feedback::ExactMatch)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for feedback in &self.0 {
            write!(f, "{}", feedback.to_char())?;
        }
        Ok(())
    }
}

/// Score `guess` against `secret` with the given rule.
///
/// Both words must already be normalized to lowercase and have equal length.
#[must_use]
pub fn score_guess(secret: &str, guess: &str, rule: ScoringRule) -> Score {
    debug_assert_eq!(secret.chars().count(), guess.chars().count());
    match rule {
        ScoringRule::Membership => score_membership(secret, guess),
        ScoringRule::Classic => score_classic(secret, guess),
    }
}

fn score_membership(secret: &str, guess: &str) -> Score {
    let feedback = guess
        .chars()
        .zip(secret.chars())
        .map(|(g, s)| {
            if g == s {
                Feedback::ExactMatch
            } else if secret.contains(g) {
                Feedback::PresentElsewhere
            } else {
                Feedback::Absent
            }
        })
        .collect();
    Score(feedback)
}

fn score_classic(secret: &str, guess: &str) -> Score {
    let guess_chars: Vec<char> = guess.chars().collect();
    let mut secret_chars: Vec<Option<char>> = secret.chars().map(Some).collect();
    let mut feedback = vec![Feedback::Absent; guess_chars.len()];

    // First pass: exact matches
    for (i, &g) in guess_chars.iter().enumerate() {
        if secret_chars.get(i).copied().flatten() == Some(g) {
            feedback[i] = Feedback::ExactMatch;
            secret_chars[i] = None;
        }
    }
    // Second pass: misplaced letters from what is left
    for (i, &g) in guess_chars.iter().enumerate() {
        if feedback[i] == Feedback::ExactMatch {
            continue;
        }
        if let Some(pos) = secret_chars.iter().position(|&c| c == Some(g)) {
            feedback[i] = Feedback::PresentElsewhere;
            secret_chars[pos] = None;
        }
    }
    Score(feedback)
}
