//! WAV serialization and PCM conversion.

use std::io::{self, Write};

use super::format::WavSpec;

/// Writes a complete WAV file: RIFF header, fmt chunk, data chunk, payload.
///
/// The size fields follow the canonical layout exactly:
/// `data size == pcm_data.len()` and `RIFF size == 36 + data size`.
pub fn write_wav<W: Write>(writer: &mut W, spec: &WavSpec, pcm_data: &[u8]) -> io::Result<()> {
    let data_size = pcm_data.len() as u32;
    let riff_size = 36 + data_size;

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&riff_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk (16 bytes, PCM)
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?;
    writer.write_all(&1u16.to_le_bytes())?;
    writer.write_all(&spec.channels.to_le_bytes())?;
    writer.write_all(&spec.sample_rate.to_le_bytes())?;
    writer.write_all(&spec.byte_rate().to_le_bytes())?;
    writer.write_all(&spec.block_align().to_le_bytes())?;
    writer.write_all(&spec.bits_per_sample.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Writes a WAV file into a fresh byte vector.
pub fn write_wav_to_vec(spec: &WavSpec, pcm_data: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(44 + pcm_data.len());
    write_wav(&mut buffer, spec, pcm_data).expect("writing to Vec should not fail");
    buffer
}

/// Converts mono f64 samples to little-endian 16-bit PCM bytes.
///
/// Samples are clamped to [-1.0, 1.0] and scaled to the i16 range; there is
/// no dithering.
pub fn mono_to_pcm16(samples: &[f64]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        pcm.extend_from_slice(&to_i16(sample).to_le_bytes());
    }
    pcm
}

/// Converts separate left/right f64 channels to interleaved 16-bit PCM bytes.
pub fn stereo_to_pcm16(left: &[f64], right: &[f64]) -> Vec<u8> {
    let frames = left.len().min(right.len());
    let mut pcm = Vec::with_capacity(frames * 4);
    for i in 0..frames {
        pcm.extend_from_slice(&to_i16(left[i]).to_le_bytes());
        pcm.extend_from_slice(&to_i16(right[i]).to_le_bytes());
    }
    pcm
}

fn to_i16(sample: f64) -> i16 {
    (sample.clamp(-1.0, 1.0) * 32767.0).round() as i16
}
