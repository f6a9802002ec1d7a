//! Word similarity scoring
//!
//! The default metric is normalized Levenshtein: `(L - distance) / L` with
//! `L = max(len(a), len(b))`, so 1.0 means identical and 0.0 means no
//! character survives. Jaro-Winkler is available as an alternative for
//! callers that want typo-friendly prefix weighting.

use serde::{Deserialize, Serialize};
use strsim::{jaro_winkler, normalized_levenshtein};

use crate::types::Token;

/// Which string-similarity metric the aligner scores candidates with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Edit-distance based: `1 - levenshtein(a, b) / max(len(a), len(b))`
    #[default]
    NormalizedLevenshtein,
    /// Jaro-Winkler, which favors shared prefixes
    JaroWinkler,
}

impl Metric {
    /// Score two tokens in `[0.0, 1.0]`. Symmetric and reflexive for both
    /// metrics; two empty strings score 1.0, one empty against a non-empty
    /// scores 0.0.
    pub fn similarity(&self, a: &Token, b: &Token) -> f64 {
        match self {
            Self::NormalizedLevenshtein => normalized_levenshtein(a.as_str(), b.as_str()),
            Self::JaroWinkler => jaro_winkler(a.as_str(), b.as_str()),
        }
    }
}
