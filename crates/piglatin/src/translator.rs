// Word translator and orchestrator.
//
// Translation rules:
// 1. A word starting with a standard vowel keeps its stem and takes "yay".
// 2. Any other word has its leading consonant cluster rotated to the end
//    and takes "ay". A leading `y` belongs to the cluster.
// Capitalization and trailing punctuation of the original word are restored
// on the result.

use piglatin_core::case::{is_capitalized, lower_first, upper_first};
use piglatin_core::character::{
    is_extended_vowel, is_letter, is_standard_vowel, is_trailing_punctuation,
};
use piglatin_core::segment::SegmentKind;

use crate::tokenizer::segment;

/// Suffix for words that start with a standard vowel.
const VOWEL_SUFFIX: &str = "yay";

/// Suffix for words that start with a consonant cluster.
const CONSONANT_SUFFIX: &str = "ay";

// ---------------------------------------------------------------------------
// Classification predicates
// ---------------------------------------------------------------------------

/// Check whether a segment is blank (empty or whitespace only).
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Check whether a word is translatable: it must begin with a run of one or
/// more letters. Words led by digits or punctuation ("123", "...", "'tis")
/// are not translated.
pub fn starts_with_letter(word: &[char]) -> bool {
    matches!(word.first(), Some(&c) if is_letter(c))
}

/// Check whether a word starts with a standard vowel (`y` excluded).
///
/// The empty word does not start with a vowel; it falls through to the
/// consonant branch, where rotation is a no-op.
fn starts_with_standard_vowel(word: &[char]) -> bool {
    matches!(word.first(), Some(&c) if is_standard_vowel(c))
}

// ---------------------------------------------------------------------------
// Punctuation splitting
// ---------------------------------------------------------------------------

/// Strip the trailing run of recognized punctuation from a word.
///
/// Punctuation characters are peeled off the end one at a time and pushed
/// to the front of the punctuation buffer, so the returned punctuation is
/// in its original left-to-right order. A word made entirely of punctuation
/// yields an empty stem.
pub fn strip_trailing_punctuation(word: &[char]) -> (Vec<char>, Vec<char>) {
    let mut end = word.len();
    while end > 0 && is_trailing_punctuation(word[end - 1]) {
        end -= 1;
    }
    (word[..end].to_vec(), word[end..].to_vec())
}

// ---------------------------------------------------------------------------
// Consonant regrouping
// ---------------------------------------------------------------------------

/// Rotate the leading consonant cluster of a word to its end.
///
/// The cluster runs from position 0 up to the first extended-vowel
/// character, except that a `y` at position 0 always belongs to the cluster
/// ("you" rotates to "ouy", "yttria" to "ttriay"). A word with no vowel
/// anywhere ("tsk") rotates by its full length, which leaves it unchanged,
/// so the slice positions are always in range.
pub fn regroup_consonants(word: &[char]) -> Vec<char> {
    let cluster_len = word
        .iter()
        .enumerate()
        .position(|(idx, &c)| {
            if idx == 0 {
                // A leading `y` never ends the cluster.
                is_standard_vowel(c)
            } else {
                is_extended_vowel(c)
            }
        })
        .unwrap_or(word.len());

    let mut rotated = word[cluster_len..].to_vec();
    rotated.extend_from_slice(&word[..cluster_len]);
    rotated
}

// ---------------------------------------------------------------------------
// Word building
// ---------------------------------------------------------------------------

/// Assemble the final word from its parts.
///
/// The stem, suffix, and restored punctuation are concatenated; when the
/// original word was capitalized, the first character of the concatenation
/// is uppercased. With a non-empty stem that is always the stem's first
/// letter.
fn build_word(stem: &[char], suffix: &str, punctuation: &[char], capitalized: bool) -> String {
    let mut out: Vec<char> = Vec::with_capacity(stem.len() + suffix.len() + punctuation.len());
    out.extend_from_slice(stem);
    out.extend(suffix.chars());
    out.extend_from_slice(punctuation);
    if capitalized {
        upper_first(&mut out);
    }
    out.into_iter().collect()
}

// ---------------------------------------------------------------------------
// Translation
// ---------------------------------------------------------------------------

/// Translate a single word into Pig Latin.
///
/// Blank input and words that do not begin with a letter are returned
/// unchanged. Otherwise the trailing punctuation is stripped, the stem is
/// translated with capitalization preserved, and the punctuation is
/// reattached at the very end.
pub fn translate_word(word: &str) -> String {
    if is_blank(word) {
        return word.to_string();
    }

    let original: Vec<char> = word.chars().collect();
    if !starts_with_letter(&original) {
        return word.to_string();
    }

    let capitalized = is_capitalized(&original);
    let mut working = original;
    lower_first(&mut working);

    let (stem, punctuation) = strip_trailing_punctuation(&working);

    // Unreachable through the letter gate above, but the lower-level
    // functions accept arbitrary words: a fully-stripped stem is emitted
    // verbatim with no suffix.
    if stem.is_empty() {
        return word.to_string();
    }

    if starts_with_standard_vowel(&stem) {
        return build_word(&stem, VOWEL_SUFFIX, &punctuation, capitalized);
    }

    let rotated = regroup_consonants(&stem);
    build_word(&rotated, CONSONANT_SUFFIX, &punctuation, capitalized)
}

/// Translate text into Pig Latin.
///
/// The text is split into word and whitespace segments, each word segment
/// is translated independently, and the segments are rejoined in original
/// order with no separator; the whitespace segments themselves provide the
/// separation.
pub fn translate(text: &str) -> String {
    segment(text)
        .into_iter()
        .map(|seg| match seg.kind {
            SegmentKind::Word => translate_word(&seg.text),
            SegmentKind::Whitespace => seg.text,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn to_string(cs: &[char]) -> String {
        cs.iter().collect()
    }

    // -- predicates --

    #[test]
    fn blank_segments() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\n"));
        assert!(!is_blank("a"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn translatable_words_start_with_a_letter() {
        assert!(starts_with_letter(&chars("dog")));
        assert!(starts_with_letter(&chars("don't")));
        assert!(!starts_with_letter(&chars("123")));
        assert!(!starts_with_letter(&chars("...")));
        assert!(!starts_with_letter(&chars("'tis")));
        assert!(!starts_with_letter(&[]));
    }

    // -- punctuation splitting --

    #[test]
    fn strips_single_trailing_punctuation() {
        let (stem, punct) = strip_trailing_punctuation(&chars("hello!"));
        assert_eq!(to_string(&stem), "hello");
        assert_eq!(to_string(&punct), "!");
    }

    #[test]
    fn strips_punctuation_run_in_original_order() {
        let (stem, punct) = strip_trailing_punctuation(&chars("latin?!"));
        assert_eq!(to_string(&stem), "latin");
        assert_eq!(to_string(&punct), "?!");
    }

    #[test]
    fn interior_punctuation_is_kept() {
        let (stem, punct) = strip_trailing_punctuation(&chars("don't"));
        assert_eq!(to_string(&stem), "don't");
        assert!(punct.is_empty());
    }

    #[test]
    fn all_punctuation_word_leaves_empty_stem() {
        let (stem, punct) = strip_trailing_punctuation(&chars("?!."));
        assert!(stem.is_empty());
        assert_eq!(to_string(&punct), "?!.");
    }

    #[test]
    fn unrecognized_punctuation_is_not_stripped() {
        let (stem, punct) = strip_trailing_punctuation(&chars("well,"));
        assert_eq!(to_string(&stem), "well,");
        assert!(punct.is_empty());
    }

    // -- consonant regrouping --

    #[test]
    fn regroups_single_consonant() {
        assert_eq!(to_string(&regroup_consonants(&chars("dog"))), "ogd");
    }

    #[test]
    fn regroups_consonant_cluster() {
        assert_eq!(to_string(&regroup_consonants(&chars("plants"))), "antspl");
    }

    #[test]
    fn leading_y_joins_the_cluster() {
        assert_eq!(to_string(&regroup_consonants(&chars("you"))), "ouy");
    }

    #[test]
    fn interior_y_ends_the_cluster() {
        assert_eq!(to_string(&regroup_consonants(&chars("rhythm"))), "ythmrh");
    }

    #[test]
    fn all_consonant_word_is_unchanged() {
        assert_eq!(to_string(&regroup_consonants(&chars("tsk"))), "tsk");
    }

    #[test]
    fn empty_word_is_unchanged() {
        assert!(regroup_consonants(&[]).is_empty());
    }

    // -- single words --

    #[test]
    fn vowel_start_takes_yay() {
        assert_eq!(translate_word("am"), "amyay");
        assert_eq!(translate_word("in"), "inyay");
    }

    #[test]
    fn consonant_start_takes_ay() {
        assert_eq!(translate_word("dog"), "ogday");
        assert_eq!(translate_word("plants"), "antsplay");
    }

    #[test]
    fn leading_y_is_a_consonant() {
        assert_eq!(translate_word("you"), "ouyay");
    }

    #[test]
    fn capitalization_moves_to_new_first_letter() {
        assert_eq!(translate_word("Hello!"), "Ellohay!");
        assert_eq!(translate_word("Latin?"), "Atinlay?");
        assert_eq!(translate_word("Rhythm"), "Ythmrhay");
    }

    #[test]
    fn punctuation_returns_at_the_end() {
        assert_eq!(translate_word("say..."), "aysay...");
        assert_eq!(translate_word("what?!"), "atwhay?!");
    }

    #[test]
    fn contraction_keeps_interior_apostrophe() {
        assert_eq!(translate_word("don't"), "on'tday");
        assert_eq!(translate_word("know!"), "owknay!");
    }

    #[test]
    fn all_consonant_word_still_gets_suffix() {
        assert_eq!(translate_word("tsk"), "tskay");
    }

    #[test]
    fn untranslatable_words_pass_through() {
        assert_eq!(translate_word(""), "");
        assert_eq!(translate_word("123"), "123");
        assert_eq!(translate_word("..."), "...");
        assert_eq!(translate_word("?!"), "?!");
        assert_eq!(translate_word("'tis"), "'tis");
    }

    // -- full text --

    #[test]
    fn translates_a_phrase() {
        assert_eq!(translate("how do you"), "owhay oday ouyay");
    }

    #[test]
    fn empty_text() {
        assert_eq!(translate(""), "");
    }

    #[test]
    fn whitespace_only_text_is_unchanged() {
        assert_eq!(translate("  \t\n "), "  \t\n ");
    }

    #[test]
    fn whitespace_runs_survive_verbatim() {
        assert_eq!(translate("a  b\t\tc"), "ayay  bay\t\tcay");
    }
}
