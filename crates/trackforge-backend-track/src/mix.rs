//! PCM mixing and float blending.
//!
//! Two blending paths: [`mix_pcm16`] works directly on 16-bit little-endian
//! PCM payloads of possibly different lengths, [`blend_tracks`] combines
//! float buffers (instrumental under vocals) before encoding.

/// Headroom factor applied when summing two PCM streams.
pub const MIX_LEVEL: f64 = 0.7;

/// Mixes two 16-bit little-endian PCM payloads sample by sample.
///
/// The shorter stream is treated as silence past its end; the output spans
/// the longer stream. Each pair is summed, scaled by [`MIX_LEVEL`], and
/// saturated to the i16 range. A trailing odd byte is dropped.
pub fn mix_pcm16(a: &[u8], b: &[u8]) -> Vec<u8> {
    let len = a.len().max(b.len());
    let len = len - len % 2;
    let mut out = Vec::with_capacity(len);

    for i in (0..len).step_by(2) {
        let s1 = sample_at(a, i) as f64;
        let s2 = sample_at(b, i) as f64;
        let mixed = ((s1 + s2) * MIX_LEVEL).clamp(-32767.0, 32767.0) as i16;
        out.extend_from_slice(&mixed.to_le_bytes());
    }

    out
}

/// Blends an instrumental under a vocal line.
///
/// Missing samples read as silence; the instrumental sits at 0.6, the vocal
/// at 0.8, and the sum is pulled back by 0.8. The result is not clamped;
/// the encoder clamps when converting to PCM.
pub fn blend_tracks(instrumental: &[f64], vocal: &[f64]) -> Vec<f64> {
    let len = instrumental.len().max(vocal.len());
    let mut out = Vec::with_capacity(len);

    for i in 0..len {
        let inst = instrumental.get(i).copied().unwrap_or(0.0);
        let voc = vocal.get(i).copied().unwrap_or(0.0);
        out.push((inst * 0.6 + voc * 0.8) * 0.8);
    }

    out
}

fn sample_at(buf: &[u8], i: usize) -> i16 {
    if i + 1 < buf.len() {
        i16::from_le_bytes([buf[i], buf[i + 1]])
    } else {
        0
    }
}
