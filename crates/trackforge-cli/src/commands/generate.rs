//! Generate command implementation.

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::ExitCode;
use std::time::Instant;

use trackforge_backend_track::generate::{render_track_with, RenderOptions};
use trackforge_spec::{validate_request, TrackRequest, DEFAULT_SAMPLE_RATE};

/// Run the generate command.
///
/// A request file takes precedence over the individual flags. Validation
/// warnings are printed but do not block the render; errors do.
#[allow(clippy::too_many_arguments)]
pub fn run(
    request_path: Option<&str>,
    genre: &str,
    tempo: u32,
    duration: f64,
    seed: u32,
    watermark: bool,
    output: &str,
) -> Result<ExitCode> {
    let request = match request_path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read request file: {}", path))?;
            TrackRequest::from_json(&json)
                .with_context(|| format!("failed to parse request file: {}", path))?
        }
        None => TrackRequest::new(genre, tempo, duration).with_seed(seed),
    };

    let validation = validate_request(&request);
    for warning in &validation.warnings {
        println!("{} {}", "warning:".yellow().bold(), warning);
    }
    if !validation.ok {
        for error in &validation.errors {
            eprintln!("{} {}", "error:".red().bold(), error);
        }
        return Ok(ExitCode::FAILURE);
    }

    println!(
        "{} {} at {} BPM, {}s",
        "Generating:".cyan().bold(),
        request.genre,
        request.tempo,
        request.duration_seconds
    );

    let start = Instant::now();
    let options = RenderOptions {
        sample_rate: DEFAULT_SAMPLE_RATE,
        watermark,
    };
    let result = render_track_with(&request, &options)?;

    std::fs::write(output, &result.wav.bytes)
        .with_context(|| format!("failed to write output file: {}", output))?;

    println!(
        "{} {} ({}, ${:.2}) in {:.2}s",
        "Wrote:".green().bold(),
        output,
        result.size_display,
        result.price,
        start.elapsed().as_secs_f64()
    );
    println!("{} {}", "PCM hash:".dimmed(), result.wav.pcm_hash);

    Ok(ExitCode::SUCCESS)
}
