//! Core types used throughout the pronunciation core

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A normalized word: lowercase ASCII letters only, no punctuation or digits.
///
/// Tokens are only produced by [`crate::normalize::normalize`]; equality is
/// exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    /// Wrap an already-normalized word. Callers outside the normalizer should
    /// prefer [`crate::normalize::normalize`].
    pub(crate) fn new(word: impl Into<String>) -> Self {
        Self(word.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// How a reference word fared against the hypothesis transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    /// Best candidate scored at or above the threshold
    Matched,
    /// Best candidate fell below the threshold (candidate still consumed)
    Substituted,
    /// No unconsumed hypothesis words remained
    Missing,
}

impl MatchStatus {
    /// Convert to single-character representation for the verdict vector
    pub fn as_char(&self) -> char {
        match self {
            Self::Matched => 'M',
            Self::Substituted => 'S',
            Self::Missing => 'X',
        }
    }

    /// Parse from single character
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'M' => Some(Self::Matched),
            'S' => Some(Self::Substituted),
            'X' => Some(Self::Missing),
            _ => None,
        }
    }
}

/// Verdict for one reference word
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordMatch {
    /// The expected word, from the reference phrase
    pub reference: Token,
    pub status: MatchStatus,
    /// The hypothesis word this reference word was paired with
    /// (None for [`MatchStatus::Missing`])
    pub heard: Option<Token>,
    /// Similarity in `[0.0, 1.0]`; 0.0 for [`MatchStatus::Missing`]
    pub score: f64,
}

/// Result of aligning a hypothesis transcript against a reference phrase.
///
/// Holds one [`WordMatch`] per reference word, in reference order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignmentOutcome {
    pub matches: Vec<WordMatch>,
}

impl AlignmentOutcome {
    /// Verdict vector string, one char per reference word (e.g. `"MMSX"`)
    pub fn verdict_vector(&self) -> String {
        self.matches.iter().map(|m| m.status.as_char()).collect()
    }

    /// Number of reference words classified as matched
    pub fn matched_count(&self) -> usize {
        self.matches
            .iter()
            .filter(|m| m.status == MatchStatus::Matched)
            .count()
    }

    /// Fraction of reference words matched; 1.0 for an empty reference
    pub fn accuracy(&self) -> f64 {
        if self.matches.is_empty() {
            return 1.0;
        }
        self.matched_count() as f64 / self.matches.len() as f64
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Serialize the outcome to JSON (for callers crossing an FFI or
    /// messaging boundary)
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
