//! Encoded WAV result type.

use crate::stereo::StereoBuffer;

use super::format::WavSpec;
use super::writer::{mono_to_pcm16, stereo_to_pcm16, write_wav_to_vec};

/// A fully encoded WAV file plus the metadata callers report on.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedWav {
    /// Complete WAV file bytes.
    pub bytes: Vec<u8>,
    /// BLAKE3 hash of the PCM payload only.
    pub pcm_hash: String,
    /// Whether the stream is stereo.
    pub is_stereo: bool,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of sample frames per channel.
    pub num_samples: usize,
}

impl EncodedWav {
    /// Encodes mono samples.
    pub fn from_mono(samples: &[f64], sample_rate: u32) -> Self {
        let pcm = mono_to_pcm16(samples);
        Self::from_pcm16(pcm, WavSpec::mono(sample_rate))
    }

    /// Encodes separate left/right channels.
    pub fn from_stereo(left: &[f64], right: &[f64], sample_rate: u32) -> Self {
        let pcm = stereo_to_pcm16(left, right);
        Self::from_pcm16(pcm, WavSpec::stereo(sample_rate))
    }

    /// Encodes a [`StereoBuffer`].
    pub fn from_stereo_buffer(stereo: &StereoBuffer, sample_rate: u32) -> Self {
        Self::from_stereo(&stereo.left, &stereo.right, sample_rate)
    }

    /// Wraps already-converted 16-bit PCM bytes.
    ///
    /// This is the path the render pipeline uses after watermarking.
    pub fn from_pcm16(pcm: Vec<u8>, spec: WavSpec) -> Self {
        let pcm_hash = blake3::hash(&pcm).to_hex().to_string();
        let num_samples = pcm.len() / spec.block_align() as usize;
        let bytes = write_wav_to_vec(&spec, &pcm);

        Self {
            bytes,
            pcm_hash,
            is_stereo: spec.channels == 2,
            sample_rate: spec.sample_rate,
            num_samples,
        }
    }

    /// Stream length in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }
}
