//! Main request type.

use serde::{Deserialize, Serialize};

use crate::error::SpecError;

/// Sample rate used by the synthesis backend when none is given.
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

/// Duration of a demo render in seconds.
pub const DEMO_DURATION_SECONDS: f64 = 30.0;

/// Tempo of a demo render in BPM.
pub const DEMO_TEMPO_BPM: u32 = 120;

/// A request to synthesize one instrumental track.
///
/// Created by a caller, consumed once, never persisted. The `key` and
/// `structure` fields are accepted for forward compatibility but do not yet
/// influence synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackRequest {
    /// Styling label, resolved case-insensitively (see [`crate::Genre`]).
    pub genre: String,
    /// Tempo in beats per minute.
    pub tempo: u32,
    /// Musical key. Reserved; not used for transposition yet.
    #[serde(default)]
    pub key: String,
    /// Track length in seconds.
    pub duration_seconds: f64,
    /// Song structure hint. Reserved.
    #[serde(default)]
    pub structure: String,
    /// Seed for the deterministic percussion noise.
    #[serde(default)]
    pub seed: u32,
}

impl TrackRequest {
    /// Creates a request from the common genre/tempo/duration triple.
    pub fn new(genre: impl Into<String>, tempo: u32, duration_seconds: f64) -> Self {
        Self {
            genre: genre.into(),
            tempo,
            key: String::new(),
            duration_seconds,
            structure: String::new(),
            seed: 0,
        }
    }

    /// Creates a 30-second, 120 BPM demo request.
    pub fn demo(genre: impl Into<String>) -> Self {
        Self::new(genre, DEMO_TEMPO_BPM, DEMO_DURATION_SECONDS)
    }

    /// Sets the percussion seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the (reserved) key field.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Parses a request from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the request to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
