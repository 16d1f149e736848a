//! Price command implementation.

use anyhow::{bail, Result};
use colored::Colorize;
use std::process::ExitCode;

use trackforge_spec::pricing::{
    bytes_to_mb, calculate_price, estimate_file_size, format_file_size, price_for_size,
    LicenseOption,
};

/// Run the price command.
///
/// Either `--bytes` prices an exact size, or `--duration` (with format and
/// quality labels) estimates one first.
pub fn run(
    duration: Option<f64>,
    format: &str,
    quality: &str,
    bytes: Option<u64>,
    license: bool,
    json: bool,
) -> Result<ExitCode> {
    let file_size = match (bytes, duration) {
        (Some(bytes), _) => bytes,
        (None, Some(duration)) => estimate_file_size(duration, format, quality),
        (None, None) => bail!("either --duration or --bytes is required"),
    };

    let size_mb = bytes_to_mb(file_size);
    let license_option = if license {
        LicenseOption::Full
    } else {
        LicenseOption::Standard
    };
    let breakdown = price_for_size(size_mb, license_option);
    let per_mb_price = calculate_price(file_size);

    if json {
        let value = serde_json::json!({
            "bytes": file_size,
            "size_display": format_file_size(file_size),
            "size_mb": size_mb,
            "per_mb_price": per_mb_price,
            "tier": {
                "name": breakdown.tier.name,
                "quality": breakdown.tier.quality,
                "price": breakdown.download_price,
            },
            "license_price": breakdown.license_price,
            "total_price": breakdown.total_price,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{} {} ({:.2} MB)",
        "Size:".cyan().bold(),
        format_file_size(file_size),
        size_mb
    );
    println!(
        "{} {} ({}) — ${:.2}",
        "Tier:".cyan().bold(),
        breakdown.tier.name,
        breakdown.tier.quality,
        breakdown.download_price
    );
    println!("{} ${:.2}", "Per-MB price:".dimmed(), per_mb_price);
    if license {
        println!(
            "{} ${:.2}",
            "Full license:".cyan().bold(),
            breakdown.license_price
        );
    }
    println!("{} ${:.2}", "Total:".green().bold(), breakdown.total_price);

    Ok(ExitCode::SUCCESS)
}
