//! Text tokenizer for member and tag search
//!
//! Pipeline: NFKD → lowercase → split on runs of characters outside
//!           `[a-z а-я ё 0-9]` → drop empty pieces
//!
//! Indexing and querying go through the same functions; a query tokenized
//! differently from the indexed text would never match it.

use unicode_normalization::UnicodeNormalization;

/// Normalize text for comparison: compatibility decomposition, then lowercase.
///
/// Ranking compares normalized strings, so this is public alongside
/// [`tokenize`].
///
/// # Example
///
/// ```
/// use taskdeck_search::tokenizer::normalize;
///
/// assert_eq!(normalize("Ｉｖａｎ"), "ivan");
/// ```
pub fn normalize(text: &str) -> String {
    text.nfkd().collect::<String>().to_lowercase()
}

/// Whether a normalized character belongs to a token.
///
/// Everything else, including the combining marks NFKD splits off
/// accented letters, is a delimiter.
#[inline]
fn is_token_char(c: char) -> bool {
    // 'ё' never survives NFKD (it decomposes to 'е' + U+0308)
    matches!(c, 'a'..='z' | 'а'..='я' | 'ё' | '0'..='9')
}

/// Tokenize text into searchable terms.
///
/// Duplicates are kept, in order of occurrence.
///
/// # Example
///
/// ```
/// use taskdeck_search::tokenizer::tokenize;
///
/// let tokens = tokenize("Ivan Petrov-Vodkin, QA");
/// assert_eq!(tokens, vec!["ivan", "petrov", "vodkin", "qa"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split(|c: char| !is_token_char(c))
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Tokenize and deduplicate, preserving first occurrence order.
///
/// # Example
///
/// ```
/// use taskdeck_search::tokenizer::tokenize_unique;
///
/// let tokens = tokenize_unique("test test TEST");
/// assert_eq!(tokens, vec!["test"]);
/// ```
pub fn tokenize_unique(text: &str) -> Vec<String> {
    let mut seen = rustc_hash::FxHashSet::default();
    tokenize(text)
        .into_iter()
        .filter(|t| seen.insert(t.clone()))
        .collect()
}
