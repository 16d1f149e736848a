use pretty_assertions::assert_eq;
use trackforge_spec::TrackRequest;

use super::*;

const RATE: u32 = 44_100;

#[test]
fn test_buffer_length_matches_duration() {
    let stereo = compose(&TrackRequest::new("pop", 120, 2.0), RATE).unwrap();
    assert_eq!(stereo.len(), 2 * RATE as usize);
    assert_eq!(stereo.left.len(), stereo.right.len());
}

#[test]
fn test_fractional_duration_floors() {
    let stereo = compose(&TrackRequest::new("pop", 120, 0.5), RATE).unwrap();
    assert_eq!(stereo.len(), 22_050);
}

#[test]
fn test_zero_duration_is_empty_not_an_error() {
    let stereo = compose(&TrackRequest::new("pop", 120, 0.0), RATE).unwrap();
    assert!(stereo.is_empty());
}

#[test]
fn test_zero_tempo_is_rejected() {
    let err = compose(&TrackRequest::new("pop", 0, 2.0), RATE).unwrap_err();
    assert!(matches!(err, TrackError::InvalidTempo { tempo: 0 }));
}

#[test]
fn test_negative_duration_is_rejected() {
    let err = compose(&TrackRequest::new("pop", 120, -1.0), RATE).unwrap_err();
    assert!(matches!(err, TrackError::InvalidDuration { .. }));
}

#[test]
fn test_nan_duration_is_rejected() {
    let err = compose(&TrackRequest::new("pop", 120, f64::NAN), RATE).unwrap_err();
    assert!(matches!(err, TrackError::InvalidDuration { .. }));
}

#[test]
fn test_zero_sample_rate_is_rejected() {
    let err = compose(&TrackRequest::new("pop", 120, 2.0), 0).unwrap_err();
    assert!(matches!(err, TrackError::InvalidSampleRate { rate: 0 }));
}

#[test]
fn test_right_channel_is_attenuated_left() {
    let stereo = compose(&TrackRequest::new("jazz", 100, 1.0), RATE).unwrap();
    for (l, r) in stereo.left.iter().zip(stereo.right.iter()) {
        assert!((r - l * STEREO_WIDTH).abs() < 1e-12);
    }
}

#[test]
fn test_output_respects_the_soft_clip_ceiling() {
    // tanh output scaled by 0.9 cannot leave (-0.9, 0.9)
    let stereo = compose(&TrackRequest::new("rock", 160, 3.0), RATE).unwrap();
    assert!(stereo.left.iter().all(|s| s.abs() < 0.9));
}

#[test]
fn test_track_starts_and_ends_faded() {
    let stereo = compose(&TrackRequest::new("pop", 120, 6.0), RATE).unwrap();
    assert_eq!(stereo.left[0], 0.0);
    // Final sample sits one frame inside the fade-out ramp
    assert!(stereo.left[stereo.len() - 1].abs() < 1e-3);
    // The middle is not faded
    let mid = stereo.len() / 2;
    assert!(stereo.left[mid - 200..mid + 200].iter().any(|s| s.abs() > 0.05));
}

#[test]
fn test_composition_is_deterministic() {
    let request = TrackRequest::new("electronic", 128, 2.0).with_seed(9);
    let a = compose(&request, RATE).unwrap();
    let b = compose(&request, RATE).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_unknown_genre_composes_without_styling() {
    // Same seed and tables as pop, but skipping colorizer and hi-hat
    let stereo = compose(&TrackRequest::new("ambient", 120, 1.0), RATE).unwrap();
    assert_eq!(stereo.len(), RATE as usize);
    assert!(stereo.left.iter().any(|s| s.abs() > 0.0));
}

#[test]
fn test_master_envelope_plateau_and_ramps() {
    assert_eq!(master_envelope(0.0, 10.0), 0.0);
    assert_eq!(master_envelope(1.0, 10.0), 0.5);
    assert_eq!(master_envelope(2.0, 10.0), 1.0);
    assert_eq!(master_envelope(5.0, 10.0), 1.0);
    assert_eq!(master_envelope(9.0, 10.0), 0.5);
    assert_eq!(master_envelope(10.0, 10.0), 0.0);
}

#[test]
fn test_master_envelope_overlapping_fades() {
    // A 2-second track peaks at 0.5 in the middle and never goes negative
    assert_eq!(master_envelope(1.0, 2.0), 0.5);
    assert_eq!(master_envelope(0.5, 2.0), 0.25);
    assert_eq!(master_envelope(1.5, 2.0), 0.25);
    for i in 0..=20 {
        let t = i as f64 * 0.1;
        let env = master_envelope(t, 2.0);
        assert!((0.0..=1.0).contains(&env));
    }
}

#[test]
fn test_melody_drifts_across_eight_beat_cycles() {
    // First cycle walks the scale in order
    let first: Vec<usize> = (0..8).map(melody_scale_index).collect();
    assert_eq!(first, vec![0, 1, 2, 3, 4, 5, 6, 7]);
    // Later cycles start one degree higher each time instead of looping
    assert_eq!(melody_scale_index(8), 1);
    assert_eq!(melody_scale_index(16), 2);
    assert_eq!(melody_scale_index(24), 3);
}
