//! Text primitives: line normalization, letter counting, edit distance.

mod levenshtein;
mod lines;

pub use levenshtein::{levenshtein, min_distance};
pub use lines::normalize_lines;

/// Latin letter accepted in a name, including accented Portuguese letters.
///
/// Matches the class `[A-Za-zÀ-ú]`.
pub fn is_name_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || ('\u{00C0}'..='\u{00FA}').contains(&c)
}

/// Number of name letters in `text`. Asterisks and everything else are ignored.
pub fn alpha_count(text: &str) -> usize {
    text.chars().filter(|&c| is_name_letter(c)).count()
}
