//! Render pipeline entry points.
//!
//! Glues the composition engine, the watermark, the WAV encoder, and the
//! pricing service into the two renders callers actually ask for: a full
//! instrumental track and the colorized anthem phrase.

use trackforge_spec::pricing::{calculate_price, format_file_size};
use trackforge_spec::{Genre, TrackRequest, DEFAULT_SAMPLE_RATE};

use crate::compose::compose;
use crate::effects::colorize;
use crate::error::TrackResult;
use crate::melody::render_anthem_phrase;
use crate::watermark::apply_watermark;
use crate::wav::{stereo_to_pcm16, EncodedWav, WavSpec};

/// Options for a track render.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Whether to burn the demo watermark tone into the PCM.
    pub watermark: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            watermark: false,
        }
    }
}

/// A rendered track with its download pricing.
#[derive(Debug, Clone)]
pub struct RenderResult {
    /// The encoded WAV file.
    pub wav: EncodedWav,
    /// Size-based download price in dollars.
    pub price: f64,
    /// Human-readable file size ("5.0 MB").
    pub size_display: String,
}

/// Renders a track at the default sample rate without a watermark.
pub fn render_track(request: &TrackRequest) -> TrackResult<RenderResult> {
    render_track_with(request, &RenderOptions::default())
}

/// Renders a track with explicit options.
pub fn render_track_with(
    request: &TrackRequest,
    options: &RenderOptions,
) -> TrackResult<RenderResult> {
    let stereo = compose(request, options.sample_rate)?;

    let mut pcm = stereo_to_pcm16(&stereo.left, &stereo.right);
    if options.watermark {
        apply_watermark(&mut pcm, options.sample_rate, 2);
    }

    let wav = EncodedWav::from_pcm16(pcm, WavSpec::stereo(options.sample_rate));
    let file_size = wav.bytes.len() as u64;

    Ok(RenderResult {
        price: calculate_price(file_size),
        size_display: format_file_size(file_size),
        wav,
    })
}

/// Renders the built-in anthem phrase through the genre colorizer as a mono
/// WAV.
pub fn render_anthem(genre: Genre, sample_rate: u32) -> EncodedWav {
    let melody = render_anthem_phrase(sample_rate);
    let colored = colorize(&melody, genre, sample_rate);
    EncodedWav::from_mono(&colored, sample_rate)
}
