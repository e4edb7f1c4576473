use once_cell::sync::Lazy;
use regex::Regex;

use crate::cipher_char::APOSTROPHE;

/// Anything that is not a word character, whitespace, or an apostrophe.
static STRIP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s']").unwrap());

/// Uppercase `ciphertext` and drop every character that can't be part of a token.
///
/// Apostrophes survive so that `DON'T`-style words keep their fixed character.
#[must_use]
pub fn normalize(ciphertext: &str) -> String {
    STRIP_RE.replace_all(&ciphertext.to_uppercase(), "").into_owned()
}

/// Split normalized ciphertext into tokens.
///
/// Apostrophes at either end of a word are quotation marks, not part of it;
/// a token left empty after trimming them is dropped.
pub fn tokenize(normalized: &str) -> Vec<String> {
    normalized
        .split_whitespace()
        .map(|raw| raw.trim_matches(APOSTROPHE))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Sort tokens longest first (by char count). The sort is stable: equal-length
/// tokens keep their order of appearance.
pub fn order_by_length(tokens: &mut [String]) {
    tokens.sort_by_key(|t| std::cmp::Reverse(t.chars().count()));
}

/// `normalize`, `tokenize`, then `order_by_length`.
pub fn prepare(ciphertext: &str) -> Vec<String> {
    let mut tokens = tokenize(&normalize(ciphertext));
    order_by_length(&mut tokens);
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("Gsv, jfrxp; yildm!"), "GSV JFRXP YILDM");
        assert_eq!(normalize("abc'd \"efg\"\n-- x_1"), "ABC'D EFG\n X_1");
    }

    #[test]
    fn test_tokenize_trims_quotes() {
        let tokens = tokenize(&normalize("'QEB' ABC'D ' XYZ'"));
        assert_eq!(tokens, vec!["QEB", "ABC'D", "XYZ"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(prepare("").is_empty());
        assert!(prepare("  ... !!! ' ").is_empty());
    }

    #[test]
    fn test_order_is_stable() {
        let tokens = prepare("AB CDE FG HIJ K LMNO");
        assert_eq!(tokens, vec!["LMNO", "CDE", "HIJ", "AB", "FG", "K"]);
    }
}
