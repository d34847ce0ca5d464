//! Structured error types for the Vitae generation pipeline.
//!
//! Fatal errors abort the whole call and return no document. Everything
//! else (unsupported font strings, malformed link targets, empty optional
//! sections) degrades in place and is logged, never surfaced here.

use thiserror::Error;

/// The unified error type returned by all public Vitae API functions.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Required personal details are missing. Raised before any layout work.
    #[error("invalid resume data: {0}")]
    InvalidInput(String),

    /// A single block's minimum height exceeds the usable page height, so
    /// it can never be placed. Generation aborts rather than looping.
    #[error("block of {height:.1}pt cannot fit usable page height of {usable:.1}pt")]
    LayoutOverflow { height: f64, usable: f64 },

    /// Pagination exceeded the hard page cap. Rejects pathological input.
    #[error("document exceeded the maximum of {0} pages")]
    PageLimit(usize),

    /// The caller's cancellation check fired between block placements.
    #[error("generation cancelled by caller")]
    Cancelled,

    /// JSON input failed to parse as a generation request.
    #[error("failed to parse request: {0}")]
    Parse(#[from] serde_json::Error),
}
