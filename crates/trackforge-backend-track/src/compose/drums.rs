//! Procedural drum synthesis.
//!
//! Kick and snare hits are synthesized inside short windows at the start of
//! their beats; the hi-hat runs on eighth-note subdivisions for the genres
//! that carry one. Noise comes from the render's seeded RNG, so drum tails
//! are reproducible.

use rand::Rng;
use rand_pcg::Pcg32;
use trackforge_spec::Genre;

use crate::rng::create_component_rng;

/// Kick window length within a beat, seconds.
const KICK_WINDOW: f64 = 0.1;

/// Snare window length within a beat, seconds.
const SNARE_WINDOW: f64 = 0.05;

/// Hi-hat window length within an eighth note, seconds.
const HIHAT_WINDOW: f64 = 0.02;

/// Drum voice generator for one render.
#[derive(Debug)]
pub struct DrumKit {
    rng: Pcg32,
    hihat_enabled: bool,
    seconds_per_beat: f64,
}

impl DrumKit {
    /// Creates a drum kit for the genre and tempo.
    ///
    /// The hi-hat only plays for pop and electronic tracks.
    pub fn new(genre: Genre, tempo: u32, base_seed: u32) -> Self {
        Self {
            rng: create_component_rng(base_seed, "drums"),
            hihat_enabled: matches!(genre, Genre::Pop | Genre::Electronic),
            seconds_per_beat: 60.0 / tempo as f64,
        }
    }

    /// Returns the drum mix contribution for one sample.
    ///
    /// `beat_time` is the time elapsed within the current beat; `beat` is the
    /// absolute beat index.
    pub fn sample(&mut self, beat_time: f64, beat: u64) -> f64 {
        let mut out = 0.0;
        let beat_in_measure = beat % 4;

        // Kick on beats 1 and 3: decaying 60 Hz burst
        if (beat_in_measure == 0 || beat_in_measure == 2) && beat_time < KICK_WINDOW {
            let env = (-beat_time * 20.0).exp();
            out += (2.0 * std::f64::consts::PI * 60.0 * beat_time).sin() * env * 0.5;
        }

        // Snare on beats 2 and 4: decaying noise burst
        if (beat_in_measure == 1 || beat_in_measure == 3) && beat_time < SNARE_WINDOW {
            let env = (-beat_time * 30.0).exp();
            out += self.noise() * env * 0.3;
        }

        // Hi-hat on eighth notes
        if self.hihat_enabled {
            let eighth_time = beat_time % (self.seconds_per_beat / 2.0);
            if eighth_time < HIHAT_WINDOW {
                let env = (-eighth_time * 50.0).exp();
                out += self.noise() * env * 0.15;
            }
        }

        out
    }

    fn noise(&mut self) -> f64 {
        self.rng.gen::<f64>() * 2.0 - 1.0
    }
}
