//! Trackforge Request Library
//!
//! This crate provides the request types, vocabulary, validation, and download
//! pricing for Trackforge. Requests are JSON documents describing a procedural
//! instrumental track to synthesize.
//!
//! # Overview
//!
//! A [`TrackRequest`] carries everything the synthesis backend needs:
//!
//! - **genre**: styling label, resolved case-insensitively via [`Genre::parse`]
//! - **tempo**: beats per minute
//! - **duration_seconds**: track length
//! - **seed**: deterministic seed for the percussion noise
//! - **key** / **structure**: reserved fields carried for forward compatibility
//!
//! # Example
//!
//! ```
//! use trackforge_spec::{validate_request, TrackRequest};
//!
//! let request = TrackRequest::new("pop", 120, 30.0);
//! let result = validate_request(&request);
//! assert!(result.ok);
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error types for request parsing and validation
//! - [`format`]: Audio format/quality vocabulary for size estimation
//! - [`genre`]: Genre vocabulary with fall-through parsing
//! - [`pricing`]: File-size estimation and download pricing
//! - [`request`]: Main request type
//! - [`validation`]: Request validation

pub mod error;
pub mod format;
pub mod genre;
pub mod pricing;
pub mod request;
pub mod validation;

// Re-export commonly used types at the crate root
pub use error::{SpecError, ValidationError, ValidationWarning};
pub use format::{AudioFormat, AudioQuality};
pub use genre::Genre;
pub use request::{TrackRequest, DEFAULT_SAMPLE_RATE};
pub use validation::{validate_request, ValidationResult};
