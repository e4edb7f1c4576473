//! patterns.rs: word shape signatures
//!
//! A signature records which positions of a word hold the same character:
//! the first distinct character gets code 0, the next new one gets 1, and so on,
//! scanning left to right. `"letter"` and `"XMEEMB"` both encode to `0.1.2.2.1.3`.
//!
//! Two words can only decode to each other under a consistent substitution if
//! their signatures are equal, which is what the word list is bucketed by.

use std::collections::HashMap;
use std::fmt;

/// Structural pattern key: one code per character position.
///
/// Stored as the integer sequence itself rather than concatenated digits, so
/// words with more than ten distinct characters can't collide
/// (code `10` vs. codes `1`,`0`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct PatternSignature(Vec<usize>);

impl PatternSignature {
    /// Encode `word`. Every character is significant, whatever its case or class.
    #[must_use]
    pub fn encode(word: &str) -> Self {
        let mut seen: HashMap<char, usize> = HashMap::new();
        let codes = word
            .chars()
            .map(|c| {
                let next = seen.len();
                *seen.entry(c).or_insert(next)
            })
            .collect();
        PatternSignature(codes)
    }

    pub fn codes(&self) -> &[usize] {
        &self.0
    }

    /// Number of character positions (always the encoded word's length in chars).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of distinct characters in the encoded word.
    pub fn distinct(&self) -> usize {
        self.0.iter().max().map_or(0, |&m| m + 1)
    }
}

impl fmt::Display for PatternSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for code in &self.0 {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{code}")?;
            first = false;
        }
        Ok(())
    }
}

/// Free-function form of [`PatternSignature::encode`].
#[must_use]
pub fn encode(word: &str) -> PatternSignature {
    PatternSignature::encode(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_encoding() {
        assert_eq!(encode("letter").codes(), &[0, 1, 2, 2, 1, 3]);
        assert_eq!(encode("dog").codes(), &[0, 1, 2]);
        assert_eq!(encode("").codes(), &[] as &[usize]);
        assert_eq!(encode("don't").codes(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_renaming_invariance() {
        assert_eq!(encode("ABA"), encode("XYX"));
        assert_eq!(encode("ABA"), encode("eve"));
        assert_ne!(encode("ABA"), encode("ABB"));
        assert_eq!(encode("tBt"), encode("tot"));
    }

    #[test]
    fn test_deterministic() {
        let word = "MISSISSIPPI";
        assert_eq!(encode(word), encode(word));
        assert_eq!(encode(word).len(), word.len());
    }

    #[test]
    fn test_many_distinct_characters_do_not_collide() {
        // eleven distinct letters followed by a repeat of the second
        let long = encode("abcdefghijkb");
        assert_eq!(long.distinct(), 11);
        assert_eq!(long.codes()[10], 10);
        assert_eq!(long.to_string(), "0.1.2.3.4.5.6.7.8.9.10.1");

        // digit concatenation would render both of these as "012345678910"
        let a = encode("abcdefghijk");
        let b = encode("abcdefghijba");
        assert_ne!(a, b);
        assert_ne!(a.to_string(), b.to_string());
    }
}
