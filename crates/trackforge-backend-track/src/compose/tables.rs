//! Genre-keyed scale and chord progression tables.
//!
//! Country and out-of-vocabulary genres reuse the pop material; their
//! character comes from the colorizer, not from different harmony.

use trackforge_spec::Genre;

/// Notes per melody scale.
pub const SCALE_LEN: usize = 8;

/// Chords per progression cycle.
pub const PROGRESSION_LEN: usize = 4;

const POP_SCALE: [&str; SCALE_LEN] = ["C4", "D4", "E4", "F4", "G4", "A4", "B4", "C5"];
const ROCK_SCALE: [&str; SCALE_LEN] = ["E4", "F#4", "G4", "A4", "B4", "C5", "D5", "E5"];
const JAZZ_SCALE: [&str; SCALE_LEN] = ["C4", "D4", "Eb4", "F4", "G4", "A4", "Bb4", "C5"];
const ELECTRONIC_SCALE: [&str; SCALE_LEN] = ["C4", "D4", "E4", "G4", "A4", "C5", "D5", "E5"];

// I-vi-IV-V in C major
const POP_PROGRESSION: [&[&str]; PROGRESSION_LEN] = [
    &["C4", "E4", "G4"],
    &["A3", "C4", "E4"],
    &["F3", "A3", "C4"],
    &["G3", "B3", "D4"],
];

// E-A-D-E power progression
const ROCK_PROGRESSION: [&[&str]; PROGRESSION_LEN] = [
    &["E3", "G#3", "B3"],
    &["A3", "C#4", "E4"],
    &["D3", "F#3", "A3"],
    &["E3", "G#3", "B3"],
];

// Seventh voicings: Cmaj7-Am7-Fmaj7-G7
const JAZZ_PROGRESSION: [&[&str]; PROGRESSION_LEN] = [
    &["C4", "E4", "G4", "B4"],
    &["A3", "C4", "E4", "G4"],
    &["F3", "A3", "C4", "E4"],
    &["G3", "B3", "D4", "F4"],
];

// Pop changes an octave down
const ELECTRONIC_PROGRESSION: [&[&str]; PROGRESSION_LEN] = [
    &["C3", "E3", "G3"],
    &["G2", "B2", "D3"],
    &["A2", "C3", "E3"],
    &["F2", "A2", "C3"],
];

/// Melody scale for a genre.
pub fn scale_for(genre: Genre) -> &'static [&'static str; SCALE_LEN] {
    match genre {
        Genre::Rock => &ROCK_SCALE,
        Genre::Jazz => &JAZZ_SCALE,
        Genre::Electronic => &ELECTRONIC_SCALE,
        Genre::Pop | Genre::Country | Genre::Other => &POP_SCALE,
    }
}

/// Chord progression for a genre.
pub fn progression_for(genre: Genre) -> &'static [&'static [&'static str]; PROGRESSION_LEN] {
    match genre {
        Genre::Rock => &ROCK_PROGRESSION,
        Genre::Jazz => &JAZZ_PROGRESSION,
        Genre::Electronic => &ELECTRONIC_PROGRESSION,
        Genre::Pop | Genre::Country | Genre::Other => &POP_PROGRESSION,
    }
}
