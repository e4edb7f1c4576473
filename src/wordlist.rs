//! wordlist.rs: Module to load the ranked word list and index it by word shape
//!
//! The input is plain text, one word per line, best (most frequent) word first.
//! The output is a `WordList`: the ranked entries plus one bucket per
//! [`PatternSignature`], each bucket holding its words in rank order.
//!
//! The parsing logic:
//! - Each line is trimmed and lowercased.
//! - Blank lines are skipped silently.
//! - A word seen twice keeps its first (better) rank; later copies are dropped.
//!
//! The list is immutable once built. It is passed by reference into the solver,
//! so one load can serve any number of solves.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use log::{info, warn};

use crate::errors::SolveError;
use crate::patterns::PatternSignature;

/// Ranked word list indexed by pattern signature.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    /// Lowercase words in rank order.
    /// Example: `["the", "of", "and", ...]`
    pub entries: Vec<String>,
    /// Signature -> indices into `entries`, ascending (i.e. rank order).
    buckets: HashMap<PatternSignature, Vec<usize>>,
}

impl WordList {
    /// Build from already-split words, in rank order.
    ///
    /// Words are normalized exactly like lines of a word list file.
    pub fn from_words<I, S>(words: I) -> WordList
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen: HashSet<String> = HashSet::new();
        let mut entries = Vec::new();
        let mut buckets: HashMap<PatternSignature, Vec<usize>> = HashMap::new();

        for raw in words {
            let word = raw.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            let word = word.to_lowercase();
            if !seen.insert(word.clone()) {
                continue;
            }

            buckets
                .entry(PatternSignature::encode(&word))
                .or_default()
                .push(entries.len());
            entries.push(word);
        }

        WordList { entries, buckets }
    }

    /// Parse a raw word list from an in-memory string (one word per line).
    pub fn parse_from_str(contents: &str) -> WordList {
        Self::from_words(contents.lines())
    }

    /// Read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Will return `SolveError::Io` if unable to read a file at `path`.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<WordList, SolveError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|e| SolveError::io(path, e))?;
        let word_list = Self::parse_from_str(&data);
        info!(
            "loaded {} words in {} pattern buckets from {}",
            word_list.len(),
            word_list.num_buckets(),
            path.display()
        );
        Ok(word_list)
    }

    /// Like [`WordList::load_from_path`], but an unreadable file only logs a warning
    /// and yields an empty list. Solving then has to skip every word, which will
    /// nearly always exhaust the unknown-word budget.
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> WordList {
        match Self::load_from_path(path) {
            Ok(word_list) => word_list,
            Err(e) => {
                warn!("{e}; continuing with an empty word list");
                WordList::default()
            }
        }
    }

    /// All words sharing `signature`, best rank first. Empty if there are none.
    pub fn bucket<'a>(&'a self, signature: &PatternSignature) -> impl Iterator<Item = &'a str> + use<'a> {
        self.buckets
            .get(signature)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(|&i| self.entries[i].as_str())
    }

    /// Rank-order membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.bucket(&PatternSignature::encode(word)).any(|w| w == word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn num_buckets(&self) -> usize {
        self.buckets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buckets_preserve_rank() {
        let wl = WordList::parse_from_str("the\ncat\n\nsee\nand\n  dog \nall\n");
        assert_eq!(wl.len(), 6);

        let abc: Vec<&str> = wl.bucket(&PatternSignature::encode("xyz")).collect();
        assert_eq!(abc, vec!["the", "cat", "and", "dog"]);

        let abb: Vec<&str> = wl.bucket(&PatternSignature::encode("XYY")).collect();
        assert_eq!(abb, vec!["see", "all"]);

        assert_eq!(wl.bucket(&PatternSignature::encode("abcd")).count(), 0);
    }

    #[test]
    fn test_normalization_and_duplicates() {
        let wl = WordList::from_words(["The", "", "of", "the", "DON'T"]);
        assert_eq!(wl.entries, vec!["the", "of", "don't"]);
        assert!(wl.contains("don't"));
        assert!(!wl.contains("dont"));
    }

    #[test]
    fn test_missing_file_yields_empty_list() {
        let wl = WordList::load_or_empty("/definitely/not/a/real/word/list.txt");
        assert!(wl.is_empty());
        assert_eq!(wl.num_buckets(), 0);

        assert!(matches!(
            WordList::load_from_path("/definitely/not/a/real/word/list.txt"),
            Err(SolveError::Io { .. })
        ));
    }
}
