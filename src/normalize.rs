//! Text normalization into comparable word tokens
//!
//! Both the reference phrase and the transcribed hypothesis pass through here
//! before alignment, so casing, punctuation, and whitespace differences never
//! reach the scorer.

use crate::types::Token;

/// Normalize raw text into an ordered token sequence.
///
/// Lowercases, drops every character that is not a lowercase ASCII letter or
/// whitespace (digits, punctuation, emoji, accented letters), then splits on
/// whitespace. Empty or all-punctuation input yields an empty sequence.
///
/// Idempotent: re-normalizing the space-joined output reproduces the same
/// sequence.
///
/// # Examples
/// ```
/// use pronounce_core::normalize::normalize;
///
/// let tokens = normalize("Hello, World!");
/// let words: Vec<&str> = tokens.iter().map(|t| t.as_str()).collect();
/// assert_eq!(words, vec!["hello", "world"]);
/// ```
pub fn normalize(raw: &str) -> Vec<Token> {
    let cleaned: String = raw
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
        .collect();

    cleaned.split_whitespace().map(Token::new).collect()
}
