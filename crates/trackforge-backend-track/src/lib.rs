//! Trackforge Track Backend
//!
//! This crate synthesizes complete instrumental tracks from a
//! [`TrackRequest`](trackforge_spec::TrackRequest) and encodes them as 16-bit
//! PCM WAV files.
//!
//! # Overview
//!
//! A render runs through a fixed pipeline:
//!
//! 1. **Composition** - melody, chord harmony, bass, and procedural drums are
//!    summed per sample from genre-keyed scale and progression tables
//! 2. **Colorizing** - one genre-conditioned transform (distortion, swing
//!    modulation, waveshaping, echo, or soft clip) shapes the mix
//! 3. **Mastering** - a 2-second fade-in/out envelope and a `tanh` soft clip
//! 4. **Encoding** - the stereo buffer becomes a canonical RIFF/WAVE byte
//!    sequence with a BLAKE3 hash of its PCM payload
//!
//! # Determinism
//!
//! All synthesis is deterministic. The only randomness (drum noise) flows
//! through PCG32 seeded from the request's seed via BLAKE3 derivation, so the
//! same request always produces a byte-identical WAV on the same platform.
//!
//! # Example
//!
//! ```
//! use trackforge_backend_track::generate::render_track;
//! use trackforge_spec::TrackRequest;
//!
//! let request = TrackRequest::new("pop", 120, 4.0);
//! let result = render_track(&request).unwrap();
//!
//! assert_eq!(&result.wav.bytes[0..4], b"RIFF");
//! ```
//!
//! # Crate Structure
//!
//! - [`compose`] - full-mix composition engine
//! - [`effects`] - genre colorizer
//! - [`generate`] - render pipeline entry points
//! - [`melody`] - fixed anthem phrase synthesizer
//! - [`mix`] - PCM mixing and float blending
//! - [`note`] - note-name to frequency resolution
//! - [`rng`] - deterministic RNG with seed derivation
//! - [`stereo`] - stereo sample buffer
//! - [`watermark`] - demo watermark tone
//! - [`wav`] - deterministic WAV encoder and header parser

pub mod compose;
pub mod effects;
pub mod error;
pub mod generate;
pub mod melody;
pub mod mix;
pub mod note;
pub mod rng;
pub mod stereo;
pub mod watermark;
pub mod wav;

// Re-export main types at crate root
pub use error::{TrackError, TrackResult};
pub use generate::{render_anthem, render_track, render_track_with, RenderOptions, RenderResult};
pub use stereo::StereoBuffer;
pub use wav::{EncodedWav, WavSpec};

#[cfg(test)]
mod integration_tests {
    use super::*;
    use trackforge_spec::{Genre, TrackRequest};

    #[test]
    fn test_render_determinism() {
        let request = TrackRequest::new("rock", 140, 2.0).with_seed(42);

        let first = render_track(&request).expect("first render");
        let second = render_track(&request).expect("second render");

        assert_eq!(first.wav.pcm_hash, second.wav.pcm_hash);
        assert_eq!(first.wav.bytes, second.wav.bytes);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = render_track(&TrackRequest::new("pop", 120, 2.0).with_seed(1)).unwrap();
        let b = render_track(&TrackRequest::new("pop", 120, 2.0).with_seed(2)).unwrap();

        // Pop has hi-hats and snares, so the seed reaches the output
        assert_ne!(a.wav.pcm_hash, b.wav.pcm_hash);
    }

    #[test]
    fn test_anthem_render_is_mono_wav() {
        let wav = render_anthem(Genre::Other, 44_100);
        assert_eq!(&wav.bytes[0..4], b"RIFF");
        assert!(!wav.is_stereo);
        assert_eq!(wav.num_samples, 5 * 44_100);
    }

    #[test]
    fn test_zero_duration_renders_empty_wav() {
        let result = render_track(&TrackRequest::new("pop", 120, 0.0)).expect("render");
        assert_eq!(result.wav.num_samples, 0);
        // Header only
        assert_eq!(result.wav.bytes.len(), 44);
    }
}
