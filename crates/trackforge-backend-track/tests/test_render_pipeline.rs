//! End-to-end render pipeline tests.

use pretty_assertions::assert_eq;
use trackforge_backend_track::compose::compose;
use trackforge_backend_track::generate::{render_track, render_track_with, RenderOptions};
use trackforge_backend_track::wav::{pcm_data, WavHeader};
use trackforge_spec::pricing::{bytes_to_mb, tier_for_size};
use trackforge_spec::TrackRequest;

/// The reference scenario: a 30-second pop demo at 120 BPM must hit exact
/// frame and byte counts.
#[test]
fn test_thirty_second_demo_dimensions() {
    let request = TrackRequest::demo("pop");
    let stereo = compose(&request, 44_100).expect("compose");

    assert_eq!(stereo.len(), 30 * 44_100);
    assert_eq!(stereo.left.len(), 1_323_000);
    assert_eq!(stereo.right.len(), 1_323_000);

    let result = render_track(&request).expect("render");
    // 44-byte header + frames * 2 channels * 2 bytes
    assert_eq!(result.wav.bytes.len(), 44 + 1_323_000 * 4);
    assert_eq!(result.wav.bytes.len(), 5_292_044);
    assert_eq!(result.wav.num_samples, 1_323_000);
    assert!(result.wav.is_stereo);
}

#[test]
fn test_rendered_wav_parses_back() {
    let result = render_track(&TrackRequest::new("jazz", 90, 5.0)).expect("render");

    let header = WavHeader::parse(&result.wav.bytes).expect("header");
    assert_eq!(header.channels, 2);
    assert_eq!(header.sample_rate, 44_100);
    assert_eq!(header.bits_per_sample, 16);
    assert_eq!(header.data_size as usize, result.wav.num_samples * 4);
    assert_eq!(header.riff_size, 36 + header.data_size);

    let payload = pcm_data(&result.wav.bytes).expect("payload");
    assert_eq!(payload.len(), header.data_size as usize);
}

#[test]
fn test_mixed_case_genre_matches_lowercase() {
    let lower = render_track(&TrackRequest::new("rock", 120, 2.0)).expect("render");
    let mixed = render_track(&TrackRequest::new("Rock", 120, 2.0)).expect("render");
    assert_eq!(lower.wav.pcm_hash, mixed.wav.pcm_hash);
}

#[test]
fn test_unknown_genre_skips_the_colorizer() {
    // "ambient" and "chillwave" both fall through to passthrough and share
    // the pop tables, so with equal seeds they render identically
    let a = render_track(&TrackRequest::new("ambient", 120, 2.0)).expect("render");
    let b = render_track(&TrackRequest::new("chillwave", 120, 2.0)).expect("render");
    assert_eq!(a.wav.pcm_hash, b.wav.pcm_hash);

    // ...but differently from pop itself, whose colorizer reshapes the mix
    let pop = render_track(&TrackRequest::new("pop", 120, 2.0)).expect("render");
    assert_ne!(a.wav.pcm_hash, pop.wav.pcm_hash);
}

#[test]
fn test_each_genre_renders_distinctly() {
    let hashes: Vec<String> = ["rock", "jazz", "electronic", "country", "pop"]
        .iter()
        .map(|g| {
            render_track(&TrackRequest::new(*g, 120, 2.0))
                .expect("render")
                .wav
                .pcm_hash
        })
        .collect();

    for i in 0..hashes.len() {
        for j in (i + 1)..hashes.len() {
            assert_ne!(hashes[i], hashes[j], "genres {} and {} collide", i, j);
        }
    }
}

#[test]
fn test_demo_pricing_lands_in_premium_tier() {
    let result = render_track(&TrackRequest::demo("pop")).expect("render");
    let size_mb = bytes_to_mb(result.wav.bytes.len() as u64);
    // 5,292,044 bytes ≈ 5.05 MB: past the Bonus cutoff, under 9 MB
    let tier = tier_for_size(size_mb);
    assert_eq!(tier.name, "Base Song");
    assert_eq!(result.price, 0.99); // per-MB pricing still floors at $0.99
}

#[test]
fn test_watermarked_demo_keeps_its_size() {
    let request = TrackRequest::new("electronic", 120, 3.0);
    let marked = render_track_with(
        &request,
        &RenderOptions {
            watermark: true,
            ..RenderOptions::default()
        },
    )
    .expect("render");

    let header = WavHeader::parse(&marked.wav.bytes).expect("header");
    assert_eq!(header.num_frames(), 3 * 44_100);
}

#[test]
fn test_half_rate_render() {
    let request = TrackRequest::new("pop", 120, 2.0);
    let result = render_track_with(
        &request,
        &RenderOptions {
            sample_rate: 22_050,
            watermark: false,
        },
    )
    .expect("render");

    assert_eq!(result.wav.num_samples, 2 * 22_050);
    assert_eq!(result.wav.sample_rate, 22_050);
}
