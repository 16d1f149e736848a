//! Error types for the track backend.

use thiserror::Error;

/// Result type for track synthesis operations.
pub type TrackResult<T> = Result<T, TrackError>;

/// Errors that can occur during track synthesis.
#[derive(Debug, Error)]
pub enum TrackError {
    /// Tempo of zero cannot be converted to beat timing.
    #[error("invalid tempo: {tempo} BPM")]
    InvalidTempo {
        /// The invalid tempo.
        tempo: u32,
    },

    /// Negative or non-finite duration.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The invalid duration.
        duration: f64,
    },

    /// Invalid sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TrackError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }
}
