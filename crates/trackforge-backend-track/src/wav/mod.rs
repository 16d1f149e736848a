//! Deterministic WAV encoder and header parser.
//!
//! Writes canonical 44-byte-header RIFF/WAVE files with 16-bit little-endian
//! PCM and no variable metadata, so identical samples always produce identical
//! bytes. The parser reads the header fields back out for round-trip checks
//! and for mixing externally produced files.

mod format;
mod header;
mod result;
mod writer;


// Re-export public API
pub use format::WavSpec;
pub use header::{pcm_data, WavHeader};
pub use result::EncodedWav;
pub use writer::{mono_to_pcm16, stereo_to_pcm16, write_wav, write_wav_to_vec};
