use std::fmt;

use crate::cipher_char::{CipherChar, NUM_LETTERS};

/// A partial, injective mapping from ciphertext letters (`A`–`Z`) to plaintext
/// letters (`a`–`z`).
///
/// At most one cipher letter maps to any plain letter. Letters that aren't
/// mapped yet stay as ciphertext when the translation is applied.
///
/// The struct is a pair of fixed-size tables, so cloning it per search branch
/// is cheap; the solver never undoes an assignment, it extends a copy instead.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Translation {
    /// cipher letter index -> plain letter
    forward: [Option<char>; NUM_LETTERS],
    /// plain letter index -> cipher letter mapped onto it
    reverse: [Option<char>; NUM_LETTERS],
}

impl Translation {
    /// Plain letter for `cipher`, if it's been decided.
    pub fn get(&self, cipher: char) -> Option<char> {
        if !cipher.is_cipher_letter() {
            return None;
        }
        cipher.letter_index().and_then(|i| self.forward[i])
    }

    /// Cipher letter already mapped onto `plain`, if any.
    pub fn source_of(&self, plain: char) -> Option<char> {
        if !plain.is_plain_letter() {
            return None;
        }
        plain.letter_index().and_then(|i| self.reverse[i])
    }

    /// Record `cipher -> plain`.
    ///
    /// Returns `false` (and leaves `self` unchanged) if `cipher` is already mapped
    /// to something else, or `plain` is already the image of a different cipher
    /// letter. Re-assigning an existing pair is accepted.
    pub(crate) fn assign(&mut self, cipher: char, plain: char) -> bool {
        let (Some(ci), Some(pi)) = (cipher.letter_index(), plain.letter_index()) else {
            return false;
        };
        if !cipher.is_cipher_letter() || !plain.is_plain_letter() {
            return false;
        }

        match (self.forward[ci], self.reverse[pi]) {
            (Some(p), _) => p == plain,
            (None, Some(_)) => false,
            (None, None) => {
                self.forward[ci] = Some(plain);
                self.reverse[pi] = Some(cipher);
                true
            }
        }
    }

    /// Copy-on-extend: a new translation that also maps every cipher letter of
    /// `cipher_word` to the character at the same position of `plain_word`.
    ///
    /// Non-letter positions must agree literally. Returns `None` on any conflict,
    /// including words of different length.
    #[must_use]
    pub fn extended_with(&self, cipher_word: &str, plain_word: &str) -> Option<Translation> {
        let mut next = self.clone();
        let mut cipher_chars = cipher_word.chars();
        let mut plain_chars = plain_word.chars();

        loop {
            match (cipher_chars.next(), plain_chars.next()) {
                (None, None) => return Some(next),
                (Some(c), Some(p)) => {
                    let ok = if c.is_cipher_letter() { next.assign(c, p) } else { c == p };
                    if !ok {
                        return None;
                    }
                }
                _ => return None,
            }
        }
    }

    /// Render `text` through the translation: mapped cipher letters become their
    /// plain letter, everything else is copied unchanged.
    pub fn apply(&self, text: &str) -> String {
        text.chars().map(|c| self.get(c).unwrap_or(c)).collect()
    }

    /// Iterate over decided pairs, ordered by cipher letter.
    pub fn iter(&self) -> impl Iterator<Item = (char, char)> + '_ {
        ('A'..='Z').zip(self.forward.iter()).filter_map(|(c, p)| p.map(|p| (c, p)))
    }

    pub fn len(&self) -> usize {
        self.forward.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if no two cipher letters share a plain letter.
    pub fn is_injective(&self) -> bool {
        let mut seen = [false; NUM_LETTERS];
        for (_, p) in self.iter() {
            let Some(i) = p.letter_index() else { return false };
            if seen[i] {
                return false;
            }
            seen[i] = true;
        }
        true
    }
}

impl fmt::Debug for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_is_injective() {
        let mut t = Translation::default();
        assert!(t.assign('A', 'd'));
        assert!(t.assign('A', 'd'));
        assert!(!t.assign('A', 'x'));
        assert!(!t.assign('B', 'd'));
        assert!(t.assign('B', 'o'));
        assert_eq!(t.get('A'), Some('d'));
        assert_eq!(t.source_of('o'), Some('B'));
        assert_eq!(t.len(), 2);
        assert!(t.is_injective());
    }

    #[test]
    fn test_extended_with_copies() {
        let base = Translation::default();
        let t = base.extended_with("ABC", "dog").unwrap();
        assert!(base.is_empty());
        assert_eq!(t.apply("CAB"), "gdo");

        // `C` can't also become `d`
        assert!(t.extended_with("CX", "dd").is_none());
        // two cipher letters onto one plain letter within a single word
        assert!(base.extended_with("AB", "ee").is_none());
        // literal characters must line up
        assert!(base.extended_with("AB'C", "don't").is_none());
        assert!(base.extended_with("ABC'D", "don't").is_some());
        assert!(base.extended_with("ABC'D", "donst").is_none());
    }

    #[test]
    fn test_apply_keeps_unmapped_and_literals() {
        let t = Translation::default().extended_with("AB", "hi").unwrap();
        assert_eq!(t.apply("AB, CAB! 42"), "hi, Chi! 42");
        assert_eq!(format!("{t:?}"), "{'A': 'h', 'B': 'i'}");
    }
}
