//! Genre colorizer.
//!
//! Applies one genre-conditioned transform over a mono buffer. Every branch
//! reads the dry input and writes a fresh output buffer; the country echo in
//! particular taps the dry signal 1000 samples back, not its own output.
//! All outputs are hard-clamped to [-1, 1].

use std::f64::consts::PI;

use trackforge_spec::Genre;

/// Delay of the country slap-back echo in samples.
pub const COUNTRY_ECHO_SAMPLES: usize = 1000;

/// Mix level of the country echo tap.
pub const COUNTRY_ECHO_MIX: f64 = 0.3;

/// Applies the genre transform to a mono buffer.
///
/// Unrecognized genres ([`Genre::Other`]) pass through unchanged, bit for
/// bit. Recognized genres each apply a single nonlinear or time-varying
/// shape:
///
/// - **Rock**: `tanh(3x)·0.8` plus an 880 Hz harmonic scaled by the sample
/// - **Jazz**: ±10% swing modulation at 2 Hz plus a 330 Hz harmonic
/// - **Electronic**: `sign(x)·|x|^0.7` under a 0.5 Hz tremolo sweep
/// - **Country**: 10% attenuation plus a 1000-sample echo at 30% mix
/// - **Pop**: `tanh(1.2x)·0.9`
pub fn colorize(input: &[f64], genre: Genre, sample_rate: u32) -> Vec<f64> {
    let rate = sample_rate as f64;

    match genre {
        Genre::Rock => process(input, rate, |x, t| {
            let driven = (x * 3.0).tanh() * 0.8;
            driven + (2.0 * PI * 880.0 * t).sin() * driven * 0.2
        }),
        Genre::Jazz => process(input, rate, |x, t| {
            let swing = 1.0 + (2.0 * PI * 2.0 * t).sin() * 0.1;
            let swung = x * swing;
            swung + (2.0 * PI * 330.0 * t).sin() * swung * 0.15
        }),
        Genre::Electronic => process(input, rate, |x, t| {
            let shaped = x.signum() * x.abs().powf(0.7);
            let sweep = 0.5 + 0.5 * (2.0 * PI * 0.5 * t).sin();
            shaped * sweep
        }),
        Genre::Country => input
            .iter()
            .enumerate()
            .map(|(i, &x)| {
                let echo = if i > COUNTRY_ECHO_SAMPLES {
                    input[i - COUNTRY_ECHO_SAMPLES] * COUNTRY_ECHO_MIX
                } else {
                    0.0
                };
                (x * 0.9 + echo).clamp(-1.0, 1.0)
            })
            .collect(),
        Genre::Pop => process(input, rate, |x, _| (x * 1.2).tanh() * 0.9),
        Genre::Other => input.to_vec(),
    }
}

/// Runs a per-sample shape over the buffer, clamping the result.
fn process(input: &[f64], rate: f64, shape: impl Fn(f64, f64) -> f64) -> Vec<f64> {
    input
        .iter()
        .enumerate()
        .map(|(i, &x)| shape(x, i as f64 / rate).clamp(-1.0, 1.0))
        .collect()
}
