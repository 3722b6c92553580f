// Character classification for Pig Latin translation.

// ---------------------------------------------------------------------------
// Vowel constants
// ---------------------------------------------------------------------------

/// Standard English vowels (lowercase): a e i o u. A leading `y` is never a
/// vowel under the translation rules, so it is excluded here.
const STANDARD_VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Check whether a character is a standard vowel (case-insensitive).
pub fn is_standard_vowel(c: char) -> bool {
    STANDARD_VOWELS.contains(&c.to_ascii_lowercase())
}

/// Check whether a character is an extended vowel (case-insensitive).
///
/// The extended set is the standard vowels plus `y`. It is used only when
/// scanning the interior of a word for the end of a leading consonant
/// cluster; at position 0 a `y` counts as a consonant.
pub fn is_extended_vowel(c: char) -> bool {
    let lower = c.to_ascii_lowercase();
    lower == 'y' || STANDARD_VOWELS.contains(&lower)
}

// ---------------------------------------------------------------------------
// Punctuation
// ---------------------------------------------------------------------------

/// Check whether a character is punctuation recognized at the end of a word.
///
/// Only this set is stripped before translation and reattached afterwards.
/// Interior punctuation (the apostrophe in "don't") is left where it is,
/// since stripping stops at the first non-member scanning from the right.
pub fn is_trailing_punctuation(c: char) -> bool {
    matches!(c, '!' | '.' | '?' | '\'' | ';' | ':')
}

// ---------------------------------------------------------------------------
// Letters and case
// ---------------------------------------------------------------------------

/// Check whether a character is a letter the translator understands.
///
/// The translation rules are defined over the ASCII alphabet only; accented
/// and non-Latin letters are treated as untranslatable content.
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Convert a character to lowercase, one-to-one.
pub fn simple_lower(c: char) -> char {
    c.to_ascii_lowercase()
}

/// Convert a character to uppercase, one-to-one.
pub fn simple_upper(c: char) -> char {
    c.to_ascii_uppercase()
}
