//! Full-mix composition engine.
//!
//! Builds a complete instrumental from four layers summed per sample:
//!
//! - a melody stepping through a genre-keyed scale, one note per beat, with
//!   a slow index drift so repeated 8-beat cycles vary
//! - a chord harmony cycling a genre-keyed 4-chord progression every 4 beats
//! - a bass line an octave below each chord root
//! - procedural drums (see [`drums`])
//!
//! The mix then runs through the genre colorizer, a 2-second fade-in/out
//! master envelope, and a `tanh` soft clip before being widened to stereo.

mod drums;
mod tables;

#[cfg(test)]
mod tests;

pub use drums::DrumKit;
pub use tables::{progression_for, scale_for, PROGRESSION_LEN, SCALE_LEN};

use std::f64::consts::PI;

use trackforge_spec::{Genre, TrackRequest};

use crate::effects::colorize;
use crate::error::{TrackError, TrackResult};
use crate::note::note_to_frequency;
use crate::stereo::StereoBuffer;

/// Length of the master fade-in and fade-out ramps, seconds.
pub const MASTER_FADE_SECONDS: f64 = 2.0;

/// Right-channel attenuation for the stereo-width illusion.
pub const STEREO_WIDTH: f64 = 0.95;

/// Layer weights in the per-sample sum.
const MELODY_LEVEL: f64 = 0.3;
const CHORD_VOICE_LEVEL: f64 = 0.15;
const BASS_LEVEL: f64 = 0.4;

/// Synthesizes a stereo track for the request.
///
/// # Errors
/// - [`TrackError::InvalidTempo`] for a tempo of zero
/// - [`TrackError::InvalidDuration`] for negative or non-finite durations
/// - [`TrackError::InvalidSampleRate`] for a sample rate of zero
///
/// A duration of zero is not an error; it produces an empty buffer.
pub fn compose(request: &TrackRequest, sample_rate: u32) -> TrackResult<StereoBuffer> {
    if request.tempo == 0 {
        return Err(TrackError::InvalidTempo {
            tempo: request.tempo,
        });
    }
    if !request.duration_seconds.is_finite() || request.duration_seconds < 0.0 {
        return Err(TrackError::InvalidDuration {
            duration: request.duration_seconds,
        });
    }
    if sample_rate == 0 {
        return Err(TrackError::InvalidSampleRate { rate: sample_rate });
    }

    let duration = request.duration_seconds;
    let rate = sample_rate as f64;
    let num_frames = (duration * rate).floor() as usize;
    if num_frames == 0 {
        return Ok(StereoBuffer::new(0));
    }

    let genre = Genre::parse(&request.genre);
    let seconds_per_beat = 60.0 / request.tempo as f64;
    let samples_per_beat = rate * seconds_per_beat;
    let scale = scale_for(genre);
    let progression = progression_for(genre);
    let mut drums = DrumKit::new(genre, request.tempo, request.seed);

    let mut mix = Vec::with_capacity(num_frames);
    for i in 0..num_frames {
        let time = i as f64 / rate;
        let beat = (i as f64 / samples_per_beat).floor() as u64;
        let beat_time = time % seconds_per_beat;

        // Melody: one scale step per beat, drifting every 8 beats
        let melody_freq = note_to_frequency(scale[melody_scale_index(beat)]);
        let note_envelope = (PI * beat_time / seconds_per_beat).sin();
        let mut sample =
            (2.0 * PI * melody_freq * time).sin() * MELODY_LEVEL * note_envelope;

        // Harmony: all chord voices summed
        let chord = progression[(beat / 4) as usize % PROGRESSION_LEN];
        for name in chord.iter() {
            sample += (2.0 * PI * note_to_frequency(name) * time).sin() * CHORD_VOICE_LEVEL;
        }

        // Bass: an octave under the chord root
        let bass_freq = note_to_frequency(chord[0]) / 2.0;
        sample += (2.0 * PI * bass_freq * time).sin() * BASS_LEVEL;

        sample += drums.sample(beat_time, beat);

        mix.push(sample);
    }

    let colored = colorize(&mix, genre, sample_rate);

    let mut left = Vec::with_capacity(num_frames);
    for (i, &sample) in colored.iter().enumerate() {
        let time = i as f64 / rate;
        let enveloped = sample * master_envelope(time, duration);
        left.push((enveloped * 0.8).tanh() * 0.9);
    }

    Ok(StereoBuffer::from_mono_widened(left, STEREO_WIDTH))
}

/// Scale degree played on a given beat.
///
/// The `beat / 8` term shifts the index one step per 8-beat cycle, so the
/// melody does not loop identically over the repeating progression.
fn melody_scale_index(beat: u64) -> usize {
    ((beat + beat / 8) % SCALE_LEN as u64) as usize
}

/// Master fade envelope: linear 2s ramps at both ends.
///
/// When the track is shorter than both ramps combined the fades overlap; the
/// envelope takes the minimum of the two ramps, clamped to [0, 1], so a
/// 2-second track is a clean triangle and the gain never goes negative.
fn master_envelope(time: f64, duration: f64) -> f64 {
    let fade_in = (time / MASTER_FADE_SECONDS).clamp(0.0, 1.0);
    let fade_out = ((duration - time) / MASTER_FADE_SECONDS).clamp(0.0, 1.0);
    fade_in.min(fade_out)
}
