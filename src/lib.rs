//! Pronounce Core - Word-alignment engine for pronunciation practice
//!
//! Compares a speech-recognition transcript against an expected reference
//! phrase and produces a per-word verdict (matched / substituted / missing),
//! using greedy nearest-match alignment over normalized word tokens.
//!
//! The crate is the pure comparison core of a pronunciation-practice bot:
//! phrase storage, audio handling, speech recognition, and chat delivery all
//! live in the surrounding application.
//!
//! ```
//! use pronounce_core::{Aligner, format_feedback};
//!
//! let aligner = Aligner::with_defaults();
//! let outcome = aligner.analyze("The cat sat", "the cat sad");
//!
//! assert_eq!(outcome.verdict_vector(), "MMM");
//! assert_eq!(format_feedback(&outcome).len(), 3);
//! ```

pub mod align;
pub mod error;
pub mod feedback;
pub mod normalize;
pub mod scoring;
pub mod types;

pub use error::{Error, Result};
pub use types::*;

/// Re-export the main engine components for convenience
pub use align::{Aligner, AlignerConfig, DEFAULT_THRESHOLD};
pub use feedback::format_feedback;
pub use normalize::normalize;
pub use scoring::Metric;
