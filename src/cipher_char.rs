// Character-set constants
pub(crate) const CIPHER_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub(crate) const PLAIN_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";

pub(crate) const APOSTROPHE: char = '\'';

pub(crate) const NUM_LETTERS: usize = CIPHER_CHARS.len();

/// Character classes used throughout the search.
///
/// Ciphertext letters are uppercase ASCII and still need decoding; plaintext
/// letters are lowercase ASCII. Anything else (apostrophes, digits, `_`, ...) is
/// compared literally and never mapped. "Fixed" means "not a cipher letter":
/// plaintext letters and literals alike are already decided.
pub trait CipherChar {
    fn is_cipher_letter(&self) -> bool;
    fn is_plain_letter(&self) -> bool;
    fn is_fixed(&self) -> bool;
    /// Position in the alphabet (0..26) for cipher or plain letters.
    fn letter_index(&self) -> Option<usize>;
}

impl CipherChar for char {
    fn is_cipher_letter(&self) -> bool {
        self.is_ascii_uppercase()
    }
    fn is_plain_letter(&self) -> bool {
        self.is_ascii_lowercase()
    }
    fn is_fixed(&self) -> bool {
        !self.is_cipher_letter()
    }
    fn letter_index(&self) -> Option<usize> {
        if self.is_cipher_letter() {
            Some(*self as usize - 'A' as usize)
        } else if self.is_plain_letter() {
            Some(*self as usize - 'a' as usize)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes() {
        assert!('Q'.is_cipher_letter());
        assert!(!'q'.is_cipher_letter());
        assert!('q'.is_plain_letter());
        assert!(APOSTROPHE.is_fixed());
        assert!('7'.is_fixed());
        assert!('q'.is_fixed());
        assert!(!'É'.is_cipher_letter());
    }

    #[test]
    fn test_letter_index() {
        assert_eq!('A'.letter_index(), Some(0));
        assert_eq!('z'.letter_index(), Some(NUM_LETTERS - 1));
        assert_eq!(APOSTROPHE.letter_index(), None);
        assert_eq!(PLAIN_CHARS.chars().nth(3).and_then(|c| c.letter_index()), Some(3));
    }
}
