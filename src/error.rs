//! Error types for the pronunciation core

use thiserror::Error;

/// Result type alias using the core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in the pronunciation core
#[derive(Error, Debug)]
pub enum Error {
    /// Match threshold outside `[0.0, 1.0]`. Raised at aligner construction;
    /// a configuration defect, never a per-call failure.
    #[error("invalid match threshold {0}: must be within 0.0..=1.0")]
    InvalidThreshold(f64),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
