//! Secret word selection.

use crate::error::ConfigError;
use crate::wordbank::CandidateList;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Pick the secret uniformly at random from a validated candidate list.
pub fn select_secret<'a, R: Rng + ?Sized>(candidates: &'a CandidateList, rng: &mut R) -> &'a str {
    candidates.words().choose(rng).map_or("", String::as_str)
}

/// Validate a raw word list, then pick the secret from it.
///
/// # Errors
/// Returns `ConfigError` if the list is empty or a word has the wrong length.
pub fn select_secret_from<S: AsRef<str>, R: Rng + ?Sized>(
    words: &[S],
    word_length: usize,
    rng: &mut R,
) -> Result<String, ConfigError> {
    let candidates = CandidateList::new(words, word_length)?;
    Ok(select_secret(&candidates, rng).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_single_candidate_always_selected() {
        let list = CandidateList::new(["tree"], 4).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(select_secret(&list, &mut rng), "tree");
        }
    }

    #[test]
    fn test_selection_stays_within_candidates() {
        let list = CandidateList::new(["tree", "yard", "door", "book"], 4).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert!(list.contains(select_secret(&list, &mut rng)));
        }
    }

    #[test]
    fn test_selection_reaches_every_candidate() {
        let list = CandidateList::new(["tree", "yard", "door", "book"], 4).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(select_secret(&list, &mut rng));
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_same_seed_same_secret() {
        let list = CandidateList::new(["tree", "yard", "door", "book"], 4).unwrap();
        let mut rng1 = StdRng::seed_from_u64(99);
        let mut rng2 = StdRng::seed_from_u64(99);
        assert_eq!(select_secret(&list, &mut rng1), select_secret(&list, &mut rng2));
    }

    #[test]
    fn test_raw_list_is_validated() {
        let mut rng = StdRng::seed_from_u64(3);
        let empty: [&str; 0] = [];
        assert_eq!(
            select_secret_from(&empty, 4, &mut rng),
            Err(ConfigError::EmptyCandidateList)
        );
        assert!(matches!(
            select_secret_from(&["tree", "abc"], 4, &mut rng),
            Err(ConfigError::WrongWordLength { .. })
        ));
        assert_eq!(select_secret_from(&["Tree"], 4, &mut rng).unwrap(), "tree");
    }
}
