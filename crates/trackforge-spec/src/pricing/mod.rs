//! File-size estimation and download pricing.
//!
//! Pricing is driven entirely by output size: a fixed bytes-per-second table
//! estimates the size of a delivery format, and a step function over megabytes
//! picks the download tier. Everything here is pure and deterministic.
//!
//! The tier boundaries use deliberately asymmetric comparisons (`<=` at 5 MB
//! and 20 MB, `<` at 9 MB). They are inherited from the published pricing
//! guide and must not be "normalized"; the tests pin every edge value.

mod estimate;
mod tiers;


pub use estimate::{
    bytes_to_mb, calculate_price, estimate_file_size, format_file_size, DEFAULT_BYTES_PER_SECOND,
    MINIMUM_PRICE, PRICE_PER_MB,
};
pub use tiers::{
    price_for_size, tier_for_size, DownloadTier, LicenseOption, PriceBreakdown, DOWNLOAD_TIERS,
    FULL_LICENSE_PRICE,
};
