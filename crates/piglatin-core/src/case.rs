// Capitalization detection and restoration.

use crate::character::{simple_lower, simple_upper};

/// Check whether a word counts as capitalized.
///
/// A word is capitalized when uppercasing its first character leaves it
/// unchanged. This is deliberately true for words whose first character is
/// not a cased letter at all ("123", "'tis") so that restoring the flag on
/// such a word is a no-op. The empty word is vacuously capitalized.
pub fn is_capitalized(word: &[char]) -> bool {
    match word.first() {
        Some(&c) => simple_upper(c) == c,
        None => true,
    }
}

/// Lowercase only the first character of a word, in place.
///
/// Used to normalize a word before translation; the rest of the word keeps
/// its original case.
pub fn lower_first(word: &mut [char]) {
    if let Some(c) = word.first_mut() {
        *c = simple_lower(*c);
    }
}

/// Uppercase only the first character of a word, in place.
///
/// Restores the capitalization flag on a rebuilt word. Applied to whatever
/// character ends up first after the translation rules have run.
pub fn upper_first(word: &mut [char]) {
    if let Some(c) = word.first_mut() {
        *c = simple_upper(*c);
    }
}
