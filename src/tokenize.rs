//! Text normalization and tokenization.
//!
//! Indexing and querying share this module, which is what makes matching
//! symmetric: "Café" in a title and "cafe" in a query normalize to the
//! same token.

use unicode_normalization::UnicodeNormalization;

/// Minimum token length in characters. Shorter tokens are discarded as
/// noise ("a", "of", "de", stray digits).
pub const MIN_TOKEN_CHARS: usize = 3;

/// Normalize a string for matching: NFD-decompose, strip combining
/// diacritical marks, lowercase.
///
/// This folds accented and unaccented forms together:
/// - "Café" → "cafe"
/// - "Álgebra" → "algebra"
/// - "Geometría" → "geometria"
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Check if a character is a combining diacritical mark.
///
/// NFD decomposition splits "é" into "e" + U+0301; dropping the mark
/// leaves the base letter.
fn is_combining_mark(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036F}')
}

/// Characters a token is made of. Everything else is a separator.
fn is_token_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}

/// Tokenize text into normalized terms.
///
/// Splits the normalized text on maximal runs of non-token characters and
/// drops tokens shorter than [`MIN_TOKEN_CHARS`]. Total over any input:
/// empty, whitespace-only, or punctuation-only text yields an empty vec
/// rather than an error. Tokens come out in source order.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split(|c: char| !is_token_char(c))
        // Tokens are pure ASCII after normalization, so byte length is
        // character length.
        .filter(|token| token.len() >= MIN_TOKEN_CHARS)
        .map(str::to_string)
        .collect()
}
