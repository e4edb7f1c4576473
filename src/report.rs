//! Text report for a finished solve.
//!
//! On success: the ciphertext, a blank line, the decoded text, a blank line, then
//! the solved letter pairs (`"X -> y"`, sorted, five per line). On failure, or
//! when nothing got mapped, a single failure line.

use std::fmt::Write as _;

use crate::solver::Solution;
use crate::translation::Translation;

pub const FAILURE_LINE: &str = "Failed to translate the ciphertext.";
pub const PAIRS_PER_LINE: usize = 5;
const PAIR_SEPARATOR: &str = "  ";

/// The uppercased ciphertext with every solved letter replaced.
/// Unsolved letters stay as uppercase ciphertext; non-letters are unchanged.
pub fn plaintext(ciphertext: &str, translation: &Translation) -> String {
    translation.apply(&ciphertext.to_uppercase())
}

/// Solved pairs as `"<CIPHER> -> <plain>"`, sorted by their text, grouped into lines.
pub fn pair_lines(translation: &Translation) -> Vec<String> {
    let mut pairs: Vec<String> = translation.iter().map(|(c, p)| format!("{c} -> {p}")).collect();
    pairs.sort();
    pairs
        .chunks(PAIRS_PER_LINE)
        .map(|chunk| chunk.join(PAIR_SEPARATOR))
        .collect()
}

/// Full report text. No trailing newline.
pub fn render(ciphertext: &str, solution: Option<&Solution>) -> String {
    let Some(solution) = solution.filter(|s| !s.translation.is_empty()) else {
        return FAILURE_LINE.to_string();
    };

    let mut out = String::new();
    // Writing to a String can't fail.
    let _ = write!(out, "{ciphertext}\n\n{}\n", plaintext(ciphertext, &solution.translation));
    for line in pair_lines(&solution.translation) {
        let _ = write!(out, "\n{line}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solution(cipher: &str, plain: &str) -> Solution {
        Solution {
            translation: Translation::default().extended_with(cipher, plain).unwrap(),
            unknown_count: 0,
            budget: 0,
            nodes: 1,
        }
    }

    #[test]
    fn test_failure_line() {
        assert_eq!(render("XYZ", None), FAILURE_LINE);
        let empty = Solution { translation: Translation::default(), unknown_count: 0, budget: 0, nodes: 1 };
        assert_eq!(render("", Some(&empty)), FAILURE_LINE);
    }

    #[test]
    fn test_report_layout() {
        let s = solution("GSVJFRX", "thequic");
        let report = render("Gsv jfrx, QQ!", Some(&s));
        let expected = "Gsv jfrx, QQ!\n\
                        \n\
                        the quic, QQ!\n\
                        \n\
                        F -> u  G -> t  J -> q  R -> i  S -> h\n\
                        V -> e  X -> c";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_pair_lines_chunking() {
        let s = solution("ABCDEFGHIJK", "abcdefghijk");
        let lines = pair_lines(&s.translation);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], "K -> k");
    }
}
