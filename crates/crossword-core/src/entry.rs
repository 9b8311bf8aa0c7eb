use crate::error::EntryError;
use crate::normalize::normalize;
use serde::{Deserialize, Serialize};

/// One clue/answer pair from the fixed puzzle definition.
///
/// The normalized answer is derived once at construction and is guaranteed
/// to be a non-empty sequence of `A`-`Z` letters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Clue text shown to the player
    pub clue: String,
    /// Answer as authored (may contain spaces and accents)
    pub answer_original: String,
    /// Uppercase letters-only form used for placement and comparison
    pub answer_normalized: String,
}

impl Entry {
    /// Create an entry, rejecting answers with no letters to place.
    pub fn new(clue: &str, answer: &str) -> Result<Self, EntryError> {
        let answer_normalized = normalize(answer);
        if answer_normalized.is_empty() {
            return Err(EntryError::EmptyAnswer {
                answer: answer.to_string(),
            });
        }
        Ok(Self {
            clue: clue.to_string(),
            answer_original: answer.to_string(),
            answer_normalized,
        })
    }

    /// Build an entry list from raw clue/answer pairs.
    ///
    /// Fails on the first malformed answer so bad configuration is caught
    /// at load time, not mid-generation.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Vec<Entry>, EntryError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        pairs
            .into_iter()
            .map(|(clue, answer)| Entry::new(clue, answer))
            .collect()
    }

    /// Normalized answer length in letters
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.answer_normalized.len()
    }

    /// Letter at index `i` of the normalized answer
    pub fn letter(&self, i: usize) -> char {
        self.answer_normalized.as_bytes()[i] as char
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_on_construction() {
        let entry = Entry::new("clue", "Triada Epidemiológica").unwrap();
        assert_eq!(entry.answer_original, "Triada Epidemiológica");
        assert_eq!(entry.answer_normalized, "TRIADAEPIDEMIOLOGICA");
        assert_eq!(entry.len(), 20);
        assert_eq!(entry.letter(0), 'T');
    }

    #[test]
    fn test_rejects_empty_answer() {
        let err = Entry::new("clue", "42 - !!").unwrap_err();
        assert_eq!(
            err,
            EntryError::EmptyAnswer {
                answer: "42 - !!".to_string()
            }
        );
    }

    #[test]
    fn test_from_pairs_stops_on_bad_entry() {
        let result = Entry::from_pairs(vec![("a", "SALUD"), ("b", "123")]);
        assert!(result.is_err());

        let entries = Entry::from_pairs(vec![("a", "SALUD"), ("b", "AGENTE")]).unwrap();
        assert_eq!(entries.len(), 2);
    }
}
