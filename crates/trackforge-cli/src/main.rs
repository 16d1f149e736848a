//! Trackforge CLI - procedural instrumental track generation
//!
//! This binary renders genre-styled instrumental tracks to WAV files and
//! prices downloads by file size.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use trackforge_cli::commands;

/// Trackforge - Procedural Instrumental Track Generator
#[derive(Parser)]
#[command(name = "trackforge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a full instrumental track to a WAV file
    Generate {
        /// Path to a JSON request file (overrides the individual flags)
        #[arg(short, long)]
        request: Option<String>,

        /// Genre label (rock, jazz, electronic, country, pop, ...)
        #[arg(short, long, default_value = "pop")]
        genre: String,

        /// Tempo in beats per minute
        #[arg(short, long, default_value_t = 120)]
        tempo: u32,

        /// Track length in seconds
        #[arg(short, long, default_value_t = 30.0)]
        duration: f64,

        /// Seed for the percussion noise
        #[arg(long, default_value_t = 0)]
        seed: u32,

        /// Burn the demo watermark tone into the output
        #[arg(long)]
        watermark: bool,

        /// Output WAV path
        #[arg(short, long)]
        output: String,
    },

    /// Render the built-in anthem phrase, optionally genre-colorized
    Melody {
        /// Genre to colorize with (omit for the plain phrase)
        #[arg(short, long)]
        genre: Option<String>,

        /// Output WAV path
        #[arg(short, long)]
        output: String,
    },

    /// Estimate file size and download pricing
    Price {
        /// Track length in seconds
        #[arg(short, long)]
        duration: Option<f64>,

        /// Delivery format (mp3, wav, flac)
        #[arg(short, long, default_value = "mp3")]
        format: String,

        /// Quality label (128, 320, cd, hd, lossless)
        #[arg(short, long, default_value = "320")]
        quality: String,

        /// Price an exact byte count instead of estimating
        #[arg(short, long, conflicts_with = "duration")]
        bytes: Option<u64>,

        /// Include the full-ownership license in the total
        #[arg(long)]
        license: bool,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Mix two WAV files into one
    Mix {
        /// First input WAV
        #[arg(short, long)]
        a: String,

        /// Second input WAV
        #[arg(short, long)]
        b: String,

        /// Output WAV path
        #[arg(short, long)]
        output: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            request,
            genre,
            tempo,
            duration,
            seed,
            watermark,
            output,
        } => commands::generate::run(
            request.as_deref(),
            &genre,
            tempo,
            duration,
            seed,
            watermark,
            &output,
        ),
        Commands::Melody { genre, output } => commands::melody::run(genre.as_deref(), &output),
        Commands::Price {
            duration,
            format,
            quality,
            bytes,
            license,
            json,
        } => commands::price::run(duration, &format, &quality, bytes, license, json),
        Commands::Mix { a, b, output } => commands::mix::run(&a, &b, &output),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
