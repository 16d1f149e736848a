//! Mix command implementation.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::process::ExitCode;

use trackforge_backend_track::mix::mix_pcm16;
use trackforge_backend_track::wav::{write_wav_to_vec, WavSpec};

/// Run the mix command: blend two WAV files sample by sample.
///
/// The output takes the first file's sample rate and channel count; the
/// second file is read as a raw PCM stream and summed in.
pub fn run(path_a: &str, path_b: &str, output: &str) -> Result<ExitCode> {
    let (pcm_a, spec_a) = read_pcm16(path_a)?;
    let (pcm_b, spec_b) = read_pcm16(path_b)?;

    if spec_a != spec_b {
        println!(
            "{} inputs differ ({} Hz / {} ch vs {} Hz / {} ch); output uses the first",
            "warning:".yellow().bold(),
            spec_a.sample_rate,
            spec_a.channels,
            spec_b.sample_rate,
            spec_b.channels
        );
    }

    let mixed = mix_pcm16(&pcm_a, &pcm_b);
    let spec = if spec_a.channels == 1 {
        WavSpec::mono(spec_a.sample_rate)
    } else {
        WavSpec::stereo(spec_a.sample_rate)
    };

    let wav = write_wav_to_vec(&spec, &mixed);
    std::fs::write(output, &wav)
        .with_context(|| format!("failed to write output file: {}", output))?;

    println!(
        "{} {} ({} bytes)",
        "Wrote:".green().bold(),
        output,
        wav.len()
    );

    Ok(ExitCode::SUCCESS)
}

/// Stream parameters of an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct InputSpec {
    sample_rate: u32,
    channels: u16,
}

/// Reads a WAV file as interleaved 16-bit PCM bytes.
fn read_pcm16(path: &str) -> Result<(Vec<u8>, InputSpec)> {
    let mut reader =
        hound::WavReader::open(path).with_context(|| format!("failed to open WAV: {}", path))?;
    let spec = reader.spec();

    if spec.sample_format != hound::SampleFormat::Int || spec.bits_per_sample != 16 {
        bail!(
            "unsupported WAV format in '{}': only 16-bit PCM is supported",
            path
        );
    }
    if spec.channels != 1 && spec.channels != 2 {
        bail!(
            "unsupported channel count in '{}': {} (expected 1 or 2)",
            path,
            spec.channels
        );
    }

    let samples: Result<Vec<i16>, _> = reader.samples::<i16>().collect();
    let samples = samples.with_context(|| format!("failed to read samples from '{}'", path))?;

    let pcm = samples.iter().flat_map(|s| s.to_le_bytes()).collect();
    Ok((
        pcm,
        InputSpec {
            sample_rate: spec.sample_rate,
            channels: spec.channels,
        },
    ))
}
