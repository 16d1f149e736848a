//! Size estimation, display formatting, and per-megabyte pricing.

use crate::format::{AudioFormat, AudioQuality};

/// Fallback estimation rate: 320 kbps MP3.
pub const DEFAULT_BYTES_PER_SECOND: u32 = 40_000;

/// Floor price for any download.
pub const MINIMUM_PRICE: f64 = 0.99;

/// Base price per megabyte.
pub const PRICE_PER_MB: f64 = 0.01;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Estimates the delivered file size in bytes for a duration, format, and
/// quality label.
///
/// Unknown format or quality labels silently fall back to
/// [`DEFAULT_BYTES_PER_SECOND`]; estimation never fails.
///
/// # Examples
/// ```
/// use trackforge_spec::pricing::estimate_file_size;
///
/// assert_eq!(estimate_file_size(60.0, "mp3", "320"), 2_400_000);
/// assert_eq!(estimate_file_size(60.0, "ogg", "max"), 2_400_000); // fallback
/// ```
pub fn estimate_file_size(duration_seconds: f64, format: &str, quality: &str) -> u64 {
    let rate = AudioFormat::parse(format)
        .and_then(|f| AudioQuality::parse(f, quality))
        .map(|q| q.bytes_per_second())
        .unwrap_or(DEFAULT_BYTES_PER_SECOND);

    (duration_seconds * rate as f64).round() as u64
}

/// Converts a byte count to megabytes (1024-based).
pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB
}

/// Formats a byte count for display: `B` below 1 KB, then `KB`/`MB` with one
/// decimal place.
///
/// # Examples
/// ```
/// use trackforge_spec::pricing::format_file_size;
///
/// assert_eq!(format_file_size(512), "512 B");
/// assert_eq!(format_file_size(2_400_000), "2.3 MB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if (bytes as f64) < BYTES_PER_MB {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / BYTES_PER_MB)
    }
}

/// Computes the per-megabyte price for a byte count, floored at
/// [`MINIMUM_PRICE`] and rounded to cents.
///
/// Monotone non-decreasing in `bytes` and always at least $0.99.
pub fn calculate_price(bytes: u64) -> f64 {
    let raw = bytes_to_mb(bytes) * PRICE_PER_MB;
    let cents = (raw * 100.0).round() / 100.0;
    cents.max(MINIMUM_PRICE)
}
