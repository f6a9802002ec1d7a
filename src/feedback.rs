//! Rendering alignment outcomes as per-word feedback lines

use crate::types::{AlignmentOutcome, MatchStatus};

/// Render one display line per reference word, in reference order.
///
/// # Examples
/// ```
/// use pronounce_core::align::Aligner;
/// use pronounce_core::feedback::format_feedback;
///
/// let outcome = Aligner::with_defaults().analyze("the zebra", "the zoo");
/// let lines = format_feedback(&outcome);
/// assert_eq!(lines[0], "✅ the");
/// assert_eq!(lines[1], "❌ zebra ➜ heard: zoo (20%)");
/// ```
pub fn format_feedback(outcome: &AlignmentOutcome) -> Vec<String> {
    outcome
        .matches
        .iter()
        .map(|m| match m.status {
            MatchStatus::Matched => format!("✅ {}", m.reference),
            MatchStatus::Substituted => {
                // the aligner always records the consumed candidate for a
                // substitution
                let heard = m.heard.as_ref().map(|t| t.as_str()).unwrap_or_default();
                format!(
                    "❌ {} ➜ heard: {} ({}%)",
                    m.reference,
                    heard,
                    percentage(m.score)
                )
            }
            MatchStatus::Missing => format!("❗ missed: {}", m.reference),
        })
        .collect()
}

fn percentage(score: f64) -> u32 {
    (score * 100.0).round() as u32
}
