//! Error types for request parsing and validation.

use thiserror::Error;

/// Errors that can occur while loading or serializing a request document.
#[derive(Debug, Error)]
pub enum SpecError {
    /// The request document is not valid JSON or is missing required fields.
    #[error("invalid request document: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error while reading a request file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Validation errors. A request with any of these cannot be synthesized.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Tempo of zero would divide by zero when deriving beat timing.
    #[error("tempo must be greater than zero")]
    ZeroTempo,

    /// Duration must be a finite, non-negative number of seconds.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The rejected duration.
        duration: f64,
    },
}

/// Validation warnings. The request is still renderable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationWarning {
    /// The genre is not in the styling vocabulary; the colorizer passes
    /// audio through unchanged.
    #[error("unknown genre '{genre}' renders without styling")]
    UnknownGenre {
        /// The unrecognized genre label.
        genre: String,
    },

    /// Durations under four seconds overlap the 2s master fade-in and
    /// fade-out ramps.
    #[error("duration {duration}s is shorter than the combined master fades")]
    ShortDuration {
        /// The short duration.
        duration: f64,
    },

    /// The `key` field is accepted but not yet used for transposition.
    #[error("key '{key}' is reserved and currently ignored")]
    UnusedKey {
        /// The ignored key.
        key: String,
    },
}
