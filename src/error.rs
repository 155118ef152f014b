//! Error types for the dominant-color library.

use thiserror::Error;

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, PaletteError>;

/// Terminal failures of an extraction call.
///
/// Extraction is deterministic and pure, so none of these are retryable.
/// Low color variety is not an error: missing roles are filled from the best
/// available candidate instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// Input buffer is empty or malformed.
    #[error("invalid input image: {reason}")]
    InvalidInput { reason: String },

    /// Quality value outside the recognized set.
    #[error("invalid quality: {value} is not a recognized target edge length (expected 50, 100, 250, or 0)")]
    InvalidConfiguration { value: u32 },
}
