//! Request validation.
//!
//! Validation separates hard errors (the backend would divide by zero or
//! allocate nonsense) from warnings (the request renders, but probably not
//! the way the caller imagined).

use crate::error::{ValidationError, ValidationWarning};
use crate::genre::Genre;
use crate::request::TrackRequest;

/// Durations below this overlap the 2s master fade-in and fade-out.
pub const SHORT_DURATION_SECONDS: f64 = 4.0;

/// Result of validating a request.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    /// Whether validation passed (no errors).
    pub ok: bool,
    /// List of validation errors.
    pub errors: Vec<ValidationError>,
    /// List of validation warnings.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    fn from_parts(errors: Vec<ValidationError>, warnings: Vec<ValidationWarning>) -> Self {
        Self {
            ok: errors.is_empty(),
            errors,
            warnings,
        }
    }
}

/// Validates a track request.
///
/// Errors:
/// - tempo of zero (beat timing would divide by zero)
/// - negative or non-finite duration
///
/// Warnings:
/// - zero or sub-4-second duration (degenerate or overlapping master fades)
/// - genre outside the styling vocabulary (renders unstyled)
/// - non-empty `key` (reserved field, currently ignored)
pub fn validate_request(request: &TrackRequest) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if request.tempo == 0 {
        errors.push(ValidationError::ZeroTempo);
    }

    if !request.duration_seconds.is_finite() || request.duration_seconds < 0.0 {
        errors.push(ValidationError::InvalidDuration {
            duration: request.duration_seconds,
        });
    } else if request.duration_seconds < SHORT_DURATION_SECONDS {
        warnings.push(ValidationWarning::ShortDuration {
            duration: request.duration_seconds,
        });
    }

    if !Genre::parse(&request.genre).is_known() {
        warnings.push(ValidationWarning::UnknownGenre {
            genre: request.genre.clone(),
        });
    }

    if !request.key.is_empty() {
        warnings.push(ValidationWarning::UnusedKey {
            key: request.key.clone(),
        });
    }

    ValidationResult::from_parts(errors, warnings)
}
