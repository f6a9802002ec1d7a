//! Greedy word alignment between a reference phrase and a transcript
//!
//! For each reference word, in order, the aligner picks the most similar
//! hypothesis word not yet claimed by an earlier reference word. A candidate
//! at or above the threshold is a match; below it, a substitution; when no
//! unclaimed candidates remain, the reference word is missing.
//!
//! This is deliberately a left-to-right greedy nearest-match, not a global
//! minimum-cost assignment. A below-threshold candidate is still consumed,
//! which can starve a later reference word of a better pairing. Downstream
//! feedback depends on this exact behavior, so keep the tie-break (earliest
//! surviving index wins) and the consumption order as they are.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::normalize::normalize;
use crate::scoring::Metric;
use crate::types::{AlignmentOutcome, MatchStatus, Token, WordMatch};

/// Default minimum similarity for classifying a candidate as a true match
pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// Aligner configuration, passed at construction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignerConfig {
    /// Minimum similarity in `[0.0, 1.0]` for a match verdict
    pub threshold: f64,
    /// Similarity metric used to score candidates
    pub metric: Metric,
}

impl Default for AlignerConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            metric: Metric::default(),
        }
    }
}

/// Word-by-word pronunciation checker
#[derive(Debug, Clone)]
pub struct Aligner {
    config: AlignerConfig,
}

impl Aligner {
    /// Create an aligner, validating the configured threshold.
    ///
    /// # Errors
    /// Returns [`Error::InvalidThreshold`] when the threshold lies outside
    /// `[0.0, 1.0]`.
    pub fn new(config: AlignerConfig) -> Result<Self> {
        if !(0.0..=1.0).contains(&config.threshold) {
            return Err(Error::InvalidThreshold(config.threshold));
        }
        Ok(Self { config })
    }

    /// Create an aligner with the default configuration (threshold 0.6,
    /// normalized Levenshtein)
    pub fn with_defaults() -> Self {
        Self {
            config: AlignerConfig::default(),
        }
    }

    pub fn config(&self) -> &AlignerConfig {
        &self.config
    }

    /// Normalize both raw strings, then align.
    ///
    /// This is the entry point the surrounding application calls with the
    /// expected phrase and the transcript returned by speech recognition.
    pub fn analyze(&self, reference_text: &str, transcript: &str) -> AlignmentOutcome {
        let reference = normalize(reference_text);
        let hypothesis = normalize(transcript);
        self.align(&reference, &hypothesis)
    }

    /// Align a hypothesis token sequence against a reference token sequence.
    ///
    /// The outcome carries exactly one [`WordMatch`] per reference token, in
    /// reference order; each hypothesis position is claimed by at most one
    /// reference token. Pure and deterministic: no state survives the call.
    pub fn align(&self, reference: &[Token], hypothesis: &[Token]) -> AlignmentOutcome {
        // hypothesis positions already claimed during this call
        let mut consumed = vec![false; hypothesis.len()];
        let mut matches = Vec::with_capacity(reference.len());

        for word in reference {
            matches.push(self.classify(word, hypothesis, &mut consumed));
        }

        let outcome = AlignmentOutcome { matches };
        debug!(
            verdicts = %outcome.verdict_vector(),
            matched = outcome.matched_count(),
            reference_len = reference.len(),
            hypothesis_len = hypothesis.len(),
            "aligned transcript against reference"
        );
        outcome
    }

    /// Pick the best unclaimed hypothesis word for one reference word and
    /// classify the pairing. Ties on score go to the earliest surviving
    /// index, which falls out of the strict `>` comparison below.
    fn classify(
        &self,
        reference: &Token,
        hypothesis: &[Token],
        consumed: &mut [bool],
    ) -> WordMatch {
        let mut best: Option<(usize, f64)> = None;

        for (i, candidate) in hypothesis.iter().enumerate() {
            if consumed[i] {
                continue;
            }
            let score = self.config.metric.similarity(reference, candidate);
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((i, score));
            }
        }

        let Some((index, score)) = best else {
            return WordMatch {
                reference: reference.clone(),
                status: MatchStatus::Missing,
                heard: None,
                score: 0.0,
            };
        };

        // the candidate is spent either way; a below-threshold pairing may
        // not be reclaimed by a later reference word
        consumed[index] = true;

        let status = if score >= self.config.threshold {
            MatchStatus::Matched
        } else {
            MatchStatus::Substituted
        };

        WordMatch {
            reference: reference.clone(),
            status,
            heard: Some(hypothesis[index].clone()),
            score,
        }
    }
}
