//! Demo watermark tone.
//!
//! Demo downloads carry an audible 1 kHz tone: one second of it at the start
//! of every ten-second span. The tone is added directly into the 16-bit PCM
//! payload with saturating arithmetic.

use std::f64::consts::PI;

/// Watermark tone frequency in Hz.
pub const WATERMARK_TONE_HZ: f64 = 1000.0;

/// Watermark tone amplitude in i16 units.
pub const WATERMARK_AMPLITUDE: f64 = 8000.0;

/// Spacing between watermark bursts in seconds.
pub const WATERMARK_INTERVAL_SECONDS: u32 = 10;

/// Adds the watermark tone to a 16-bit little-endian PCM payload in place.
///
/// Every [`WATERMARK_INTERVAL_SECONDS`] of audio gets one second of tone
/// across all channels, starting at second zero. Partial bursts at the end
/// of the stream are truncated.
pub fn apply_watermark(pcm: &mut [u8], sample_rate: u32, channels: u16) {
    if sample_rate == 0 || channels == 0 {
        return;
    }

    let frame_size = channels as usize * 2;
    let num_frames = pcm.len() / frame_size;
    let interval_frames = (sample_rate * WATERMARK_INTERVAL_SECONDS) as usize;
    let burst_frames = sample_rate as usize;

    let mut burst_start = 0;
    while burst_start < num_frames {
        for j in 0..burst_frames {
            let frame = burst_start + j;
            if frame >= num_frames {
                break;
            }
            let tone = (2.0 * PI * WATERMARK_TONE_HZ * j as f64 / sample_rate as f64).sin()
                * WATERMARK_AMPLITUDE;

            for ch in 0..channels as usize {
                let offset = frame * frame_size + ch * 2;
                let sample = i16::from_le_bytes([pcm[offset], pcm[offset + 1]]) as f64;
                let marked = (sample + tone).clamp(-32767.0, 32767.0) as i16;
                pcm[offset..offset + 2].copy_from_slice(&marked.to_le_bytes());
            }
        }
        burst_start += interval_frames;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RATE: u32 = 8_000; // small rate keeps the buffers manageable

    fn silent_pcm(seconds: u32, channels: u16) -> Vec<u8> {
        vec![0u8; (RATE * seconds) as usize * channels as usize * 2]
    }

    fn sample(pcm: &[u8], frame: usize, ch: usize, channels: u16) -> i16 {
        let offset = frame * channels as usize * 2 + ch * 2;
        i16::from_le_bytes([pcm[offset], pcm[offset + 1]])
    }

    #[test]
    fn test_tone_fills_the_first_second() {
        let mut pcm = silent_pcm(3, 1);
        apply_watermark(&mut pcm, RATE, 1);

        // A quarter of a 1 kHz cycle in: sin(π/2) * 8000
        let frame = RATE as usize / 4000;
        assert_eq!(sample(&pcm, frame, 0, 1), 8000);
    }

    #[test]
    fn test_audio_after_the_burst_is_untouched() {
        let mut pcm = silent_pcm(3, 1);
        apply_watermark(&mut pcm, RATE, 1);

        // Second 1..3 is outside the burst (next burst starts at 10s)
        let start = RATE as usize;
        let end = 3 * RATE as usize;
        assert!((start..end).all(|f| sample(&pcm, f, 0, 1) == 0));
    }

    #[test]
    fn test_burst_repeats_every_ten_seconds() {
        let mut pcm = silent_pcm(11, 1);
        apply_watermark(&mut pcm, RATE, 1);

        let frame = 10 * RATE as usize + RATE as usize / 4000;
        assert_eq!(sample(&pcm, frame, 0, 1), 8000);
    }

    #[test]
    fn test_all_channels_are_marked() {
        let mut pcm = silent_pcm(1, 2);
        apply_watermark(&mut pcm, RATE, 2);

        let frame = RATE as usize / 4000;
        assert_eq!(sample(&pcm, frame, 0, 2), 8000);
        assert_eq!(sample(&pcm, frame, 1, 2), 8000);
    }

    #[test]
    fn test_saturation() {
        let mut pcm: Vec<u8> = std::iter::repeat(32_000i16.to_le_bytes())
            .take(RATE as usize)
            .flatten()
            .collect();
        apply_watermark(&mut pcm, RATE, 1);

        let frame = RATE as usize / 4000;
        assert_eq!(sample(&pcm, frame, 0, 1), 32_767);
    }

    #[test]
    fn test_zero_rate_is_a_no_op() {
        let mut pcm = silent_pcm(1, 1);
        let before = pcm.clone();
        apply_watermark(&mut pcm, 0, 1);
        assert_eq!(pcm, before);
    }
}
