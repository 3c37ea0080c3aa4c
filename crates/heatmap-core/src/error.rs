//! Error types for the heatmap crates.

use thiserror::Error;

/// Result type alias using HeatmapError.
pub type HeatmapResult<T> = Result<T, HeatmapError>;

/// Primary error type for heatmap construction and rendering.
///
/// Out-of-bounds points are not errors: they are a defined no-op, so
/// bulk ingestion near the buffer edges pays no error-handling cost.
#[derive(Debug, Error)]
pub enum HeatmapError {
    /// Non-positive width, height or radius passed to a constructor.
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    /// Malformed call argument (stamp data length mismatch,
    /// non-positive saturation).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
