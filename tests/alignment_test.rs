//! End-to-end pipeline tests
//!
//! These tests verify the complete comparison workflow the surrounding bot
//! drives: raw reference phrase + raw transcript → normalization → greedy
//! alignment → per-word feedback lines.

use approx::assert_relative_eq;
use pronounce_core::align::{Aligner, AlignerConfig};
use pronounce_core::error::Error;
use pronounce_core::feedback::format_feedback;
use pronounce_core::normalize::normalize;
use pronounce_core::scoring::Metric;
use pronounce_core::types::{AlignmentOutcome, MatchStatus};

// ============ Full Comparison Pipeline ============

#[test]
fn test_full_comparison_pipeline() {
    // simulates: phrase from storage + transcript from whisper → feedback
    let reference = "The quick brown fox";
    let transcript = "the quik brown"; // one near-miss, one word dropped

    let aligner = Aligner::with_defaults();
    let outcome = aligner.analyze(reference, transcript);

    assert_eq!(outcome.len(), 4);
    assert_eq!(outcome.verdict_vector(), "MMMX");

    // "quik" scores 0.8 against "quick", above the 0.6 default
    let quick = &outcome.matches[1];
    assert_eq!(quick.status, MatchStatus::Matched);
    assert_eq!(quick.heard.as_ref().unwrap().as_str(), "quik");
    assert_relative_eq!(quick.score, 0.8);

    let lines = format_feedback(&outcome);
    assert_eq!(
        lines,
        vec!["✅ the", "✅ quick", "✅ brown", "❗ missed: fox"]
    );
}

#[test]
fn test_pipeline_with_substitution_feedback() {
    let aligner = Aligner::with_defaults();
    let outcome = aligner.analyze("say zebra please", "say zoo please");

    assert_eq!(outcome.verdict_vector(), "MSM");
    let lines = format_feedback(&outcome);
    assert_eq!(lines[1], "❌ zebra ➜ heard: zoo (20%)");
}

#[test]
fn test_pipeline_punctuation_and_case_do_not_matter() {
    let aligner = Aligner::with_defaults();
    let outcome = aligner.analyze("Don't stop, believing!", "DONT STOP believing");

    assert_eq!(outcome.verdict_vector(), "MMM");
    assert_relative_eq!(outcome.accuracy(), 1.0);
}

#[test]
fn test_pipeline_silence_marks_everything_missing() {
    // whisper returned nothing usable
    let aligner = Aligner::with_defaults();
    let outcome = aligner.analyze("hello there friend", "...");

    assert_eq!(outcome.verdict_vector(), "XXX");
    assert_relative_eq!(outcome.accuracy(), 0.0);
    assert_eq!(
        format_feedback(&outcome),
        vec![
            "❗ missed: hello",
            "❗ missed: there",
            "❗ missed: friend"
        ]
    );
}

#[test]
fn test_pipeline_empty_reference() {
    let aligner = Aligner::with_defaults();
    let outcome = aligner.analyze("", "anything at all");

    assert!(outcome.is_empty());
    assert!(format_feedback(&outcome).is_empty());
}

// ============ Heuristic Behavior ============

#[test]
fn test_consumption_invariant_holds_on_scrambled_input() {
    let aligner = Aligner::with_defaults();
    let reference = normalize("she sells sea shells by the shore");
    let hypothesis = normalize("the shells she sells by the shore");

    let outcome = aligner.align(&reference, &hypothesis);

    // no hypothesis word may be claimed twice: count pairings per heard word
    // and compare against availability in the hypothesis
    let mut claimed: Vec<&str> = outcome
        .matches
        .iter()
        .filter_map(|m| m.heard.as_ref())
        .map(|t| t.as_str())
        .collect();
    claimed.sort_unstable();
    for word in ["the", "shells", "she", "sells", "by", "shore"] {
        let available = hypothesis.iter().filter(|t| t.as_str() == word).count();
        let used = claimed.iter().filter(|w| **w == word).count();
        assert!(used <= available, "{word:?} claimed {used}x, only {available} present");
    }
}

#[test]
fn test_greedy_substitution_starves_later_word() {
    // "peach" grabs "beach" as a below-threshold-free match candidate even
    // though "beach" itself comes later in the reference; the later "beach"
    // is left with nothing. The greedy heuristic keeps this behavior.
    let aligner = Aligner::new(AlignerConfig {
        threshold: 0.9,
        metric: Metric::default(),
    })
    .unwrap();
    let outcome = aligner.analyze("peach beach", "beach");

    assert_eq!(outcome.verdict_vector(), "SX");
}

#[test]
fn test_determinism_across_repeated_calls() {
    let aligner = Aligner::with_defaults();
    let mut outcomes: Vec<AlignmentOutcome> = Vec::new();
    for _ in 0..5 {
        outcomes.push(aligner.analyze("red lorry yellow lorry", "red lolly yellow lorry"));
    }
    for outcome in &outcomes[1..] {
        assert_eq!(outcome, &outcomes[0]);
    }
}

#[test]
fn test_concurrent_alignments_are_independent() {
    use std::thread;

    let aligner = Aligner::with_defaults();
    let expected = aligner.analyze("the cat sat on the mat", "the cat sad on a mat");

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let aligner = aligner.clone();
            let expected = expected.clone();
            thread::spawn(move || {
                for _ in 0..50 {
                    let outcome =
                        aligner.analyze("the cat sat on the mat", "the cat sad on a mat");
                    assert_eq!(outcome, expected);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

// ============ Configuration ============

#[test]
fn test_invalid_threshold_is_a_construction_error() {
    for bad in [1.5, -0.1] {
        let err = Aligner::new(AlignerConfig {
            threshold: bad,
            metric: Metric::default(),
        })
        .unwrap_err();
        assert!(matches!(err, Error::InvalidThreshold(value) if value == bad));
    }
}

#[test]
fn test_config_serde_round_trip() {
    let config = AlignerConfig {
        threshold: 0.75,
        metric: Metric::JaroWinkler,
    };
    let json = serde_json::to_string(&config).unwrap();
    let parsed: AlignerConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_outcome_json_export() {
    let aligner = Aligner::with_defaults();
    let outcome = aligner.analyze("cat dog", "cat");

    let json = outcome.to_json().unwrap();
    let parsed: AlignmentOutcome = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.verdict_vector(), "MX");
}
