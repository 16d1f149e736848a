//! Note-name to frequency resolution.
//!
//! The melody and chord tables address pitches by name ("C4", "F#3", "Bb4").
//! Resolution goes through a fixed equal-tempered table covering C2 through
//! B5 plus the accidentals the built-in material uses, referenced to
//! A4 = 440 Hz.
//!
//! Unknown names do not fail: [`note_to_frequency`] falls back to
//! [`CONCERT_A_HZ`]. [`lookup`] exposes the same table without the fallback
//! for callers that want to detect the miss.

/// Reference pitch, and the fallback for unrecognized note names.
pub const CONCERT_A_HZ: f64 = 440.0;

/// Equal-tempered frequencies for the pitch names the built-in melodies and
/// progressions use. Values match A4 = 440 Hz twelve-tone equal temperament
/// rounded to two decimals.
const NOTE_TABLE: [(&str, f64); 34] = [
    ("C2", 65.41),
    ("D2", 73.42),
    ("E2", 82.41),
    ("F2", 87.31),
    ("G2", 98.0),
    ("A2", 110.0),
    ("B2", 123.47),
    ("C3", 130.81),
    ("D3", 146.83),
    ("E3", 164.81),
    ("F3", 174.61),
    ("G3", 196.0),
    ("A3", 220.0),
    ("B3", 246.94),
    ("C4", 261.63),
    ("D4", 293.66),
    ("E4", 329.63),
    ("F4", 349.23),
    ("G4", 392.0),
    ("A4", 440.0),
    ("B4", 493.88),
    ("C5", 523.25),
    ("D5", 587.33),
    ("E5", 659.25),
    ("F5", 698.46),
    ("G5", 783.99),
    ("A5", 880.0),
    ("B5", 987.77),
    ("Eb4", 311.13),
    ("F#3", 185.0),
    ("F#4", 369.99),
    ("G#3", 207.65),
    ("C#4", 277.18),
    ("Bb4", 466.16),
];

/// Looks up a note name in the fixed table.
///
/// Returns `None` for names outside the table; matching is exact and
/// case-sensitive, as the built-in material spells pitches canonically.
pub fn lookup(name: &str) -> Option<f64> {
    NOTE_TABLE
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, freq)| *freq)
}

/// Resolves a note name to a frequency, falling back to [`CONCERT_A_HZ`]
/// for unrecognized names.
///
/// # Examples
/// ```
/// use trackforge_backend_track::note::note_to_frequency;
///
/// assert_eq!(note_to_frequency("A4"), 440.0);
/// assert_eq!(note_to_frequency("H9"), 440.0); // fallback
/// ```
pub fn note_to_frequency(name: &str) -> f64 {
    lookup(name).unwrap_or(CONCERT_A_HZ)
}

/// Convert a MIDI note number to frequency in Hz.
///
/// Uses the standard formula: f = 440 * 2^((n-69)/12)
/// where n is the MIDI note number and 69 is A4.
pub fn midi_to_freq(midi_note: u8) -> f64 {
    440.0 * 2.0_f64.powf((midi_note as f64 - 69.0) / 12.0)
}

/// Convert a frequency in Hz to the nearest MIDI note number.
pub fn freq_to_midi(freq: f64) -> u8 {
    let note = 69.0 + 12.0 * (freq / 440.0).log2();
    note.round().clamp(0.0, 127.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_pitches() {
        assert_eq!(note_to_frequency("A4"), 440.0);
        assert!((note_to_frequency("C4") - 261.63).abs() < 0.01);
        assert!((note_to_frequency("G5") - 783.99).abs() < 0.01);
    }

    #[test]
    fn test_accidentals() {
        assert!((note_to_frequency("F#3") - 185.0).abs() < 0.01);
        assert!((note_to_frequency("Eb4") - 311.13).abs() < 0.01);
        assert!((note_to_frequency("Bb4") - 466.16).abs() < 0.01);
    }

    #[test]
    fn test_unknown_names_fall_back_to_a4() {
        assert_eq!(note_to_frequency("H9"), CONCERT_A_HZ);
        assert_eq!(note_to_frequency(""), CONCERT_A_HZ);
        assert_eq!(note_to_frequency("c4"), CONCERT_A_HZ); // case-sensitive
        assert_eq!(lookup("H9"), None);
    }

    #[test]
    fn test_table_matches_equal_temperament() {
        // Every entry should sit within rounding distance of the
        // 2^(1/12)-ratio ladder it was derived from.
        for (name, freq) in NOTE_TABLE {
            let midi = freq_to_midi(freq);
            let exact = midi_to_freq(midi);
            assert!(
                (freq - exact).abs() < 0.01,
                "{} = {} Hz deviates from equal temperament ({} Hz)",
                name,
                freq,
                exact
            );
        }
    }

    #[test]
    fn test_midi_round_trip() {
        assert_eq!(freq_to_midi(midi_to_freq(69)), 69);
        assert_eq!(freq_to_midi(midi_to_freq(60)), 60);
        assert!((midi_to_freq(69) - 440.0).abs() < 0.001);
    }
}
