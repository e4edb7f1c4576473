use crate::cipher_char::CipherChar;
use crate::patterns::PatternSignature;
use crate::wordlist::WordList;

/// Is `candidate` consistent with a partially decoded word?
///
/// `partial` holds uppercase cipher letters at undecided positions and literal
/// characters (plain letters, apostrophes, ...) at decided ones. The caller has
/// already matched signatures, so lengths agree.
///
/// - decided position: the candidate must have the same character;
/// - undecided position: the candidate must have a plain letter there
///   (an apostrophe can't be the decoding of a cipher letter).
fn is_consistent(partial: &str, candidate: &str) -> bool {
    partial.chars().zip(candidate.chars()).all(|(p, w)| {
        if p.is_fixed() {
            p == w
        } else {
            w.is_plain_letter()
        }
    })
}

/// All words of `word_list` that `partial` could decode to, best rank first.
///
/// Signature equality takes care of undecided letters that repeat; the per
/// position check takes care of decided ones.
pub fn find_candidates<'w>(word_list: &'w WordList, partial: &str) -> Vec<&'w str> {
    let signature = PatternSignature::encode(partial);
    word_list
        .bucket(&signature)
        .filter(|candidate| is_consistent(partial, candidate))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word_list() -> WordList {
        WordList::from_words(["the", "dog", "don't", "won't", "cat", "tot", "tat", "doesn", "isn't"])
    }

    #[test]
    fn test_fully_undecided() {
        let wl = word_list();
        assert_eq!(find_candidates(&wl, "ABC"), vec!["the", "dog", "cat"]);
        assert_eq!(find_candidates(&wl, "ABA"), vec!["tot", "tat"]);
        assert!(find_candidates(&wl, "ABCD").is_empty());
    }

    #[test]
    fn test_decided_letters_filter() {
        let wl = word_list();
        assert_eq!(find_candidates(&wl, "tBt"), vec!["tot", "tat"]);
        assert_eq!(find_candidates(&wl, "tot"), vec!["tot"]);
        assert_eq!(find_candidates(&wl, "dBC"), vec!["dog"]);
        assert!(find_candidates(&wl, "xBC").is_empty());
    }

    #[test]
    fn test_apostrophe_must_align() {
        let wl = word_list();
        // `doesn` shares the 01234 shape but has no apostrophe
        assert_eq!(find_candidates(&wl, "ABC'D"), vec!["don't", "won't", "isn't"]);
        assert_eq!(find_candidates(&wl, "wBC'D"), vec!["won't"]);
        // an apostrophe in the word can't face an undecided cipher letter
        assert_eq!(find_candidates(&wl, "ABCDE"), vec!["doesn"]);
    }
}
