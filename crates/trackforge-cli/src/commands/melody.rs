//! Melody command implementation.

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::ExitCode;

use trackforge_backend_track::generate::render_anthem;
use trackforge_spec::{Genre, DEFAULT_SAMPLE_RATE};

/// Run the melody command: render the built-in anthem phrase, optionally
/// through a genre colorizer.
pub fn run(genre: Option<&str>, output: &str) -> Result<ExitCode> {
    let genre = match genre {
        Some(label) => {
            let parsed = Genre::parse(label);
            if !parsed.is_known() {
                println!(
                    "{} unknown genre '{}', rendering without styling",
                    "warning:".yellow().bold(),
                    label
                );
            }
            parsed
        }
        None => Genre::Other,
    };

    let wav = render_anthem(genre, DEFAULT_SAMPLE_RATE);
    std::fs::write(output, &wav.bytes)
        .with_context(|| format!("failed to write output file: {}", output))?;

    println!(
        "{} {} ({} styling, {:.2}s)",
        "Wrote:".green().bold(),
        output,
        genre.as_str(),
        wav.duration_seconds()
    );

    Ok(ExitCode::SUCCESS)
}
