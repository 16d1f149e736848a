//! Download tier step function and licensing.

/// Price of the full-ownership license add-on.
pub const FULL_LICENSE_PRICE: f64 = 10.0;

/// A download tier: a size band mapped to a fixed price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DownloadTier {
    /// Display name.
    pub name: &'static str,
    /// Upper size bound in MB (infinite for the top tier).
    pub max_size_mb: f64,
    /// Fixed price in dollars.
    pub price: f64,
    /// Quality label shown alongside the tier.
    pub quality: &'static str,
}

/// The four download tiers, smallest first.
pub const DOWNLOAD_TIERS: [DownloadTier; 4] = [
    DownloadTier {
        name: "Bonus Track",
        max_size_mb: 5.0,
        price: 0.99,
        quality: "Demo Quality",
    },
    DownloadTier {
        name: "Base Song",
        max_size_mb: 9.0,
        price: 1.99,
        quality: "Standard Quality",
    },
    DownloadTier {
        name: "Premium Song",
        max_size_mb: 20.0,
        price: 4.99,
        quality: "High Quality",
    },
    DownloadTier {
        name: "Ultra Song",
        max_size_mb: f64::INFINITY,
        price: 8.99,
        quality: "Ultra Quality",
    },
];

/// Licensing add-ons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LicenseOption {
    /// Standard download rights, included in the tier price.
    Standard,
    /// Full ownership transfer.
    Full,
}

impl LicenseOption {
    /// Price of the license add-on in dollars.
    pub fn price(&self) -> f64 {
        match self {
            LicenseOption::Standard => 0.0,
            LicenseOption::Full => FULL_LICENSE_PRICE,
        }
    }
}

/// Combined download + license pricing for one track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBreakdown {
    /// The selected tier.
    pub tier: DownloadTier,
    /// Tier price.
    pub download_price: f64,
    /// License add-on price.
    pub license_price: f64,
    /// Sum of the two.
    pub total_price: f64,
}

/// Selects the download tier for a file size in MB.
///
/// The comparison operators are intentionally asymmetric and must match the
/// pricing guide exactly:
/// - `size <= 5.0` → Bonus Track
/// - `size < 9.0` → Base Song
/// - `9.0 <= size <= 20.0` → Premium Song
/// - otherwise → Ultra Song
pub fn tier_for_size(size_mb: f64) -> &'static DownloadTier {
    if size_mb <= 5.0 {
        &DOWNLOAD_TIERS[0]
    } else if size_mb < 9.0 {
        &DOWNLOAD_TIERS[1]
    } else if (9.0..=20.0).contains(&size_mb) {
        &DOWNLOAD_TIERS[2]
    } else {
        &DOWNLOAD_TIERS[3]
    }
}

/// Computes the full price breakdown for a file size and license choice.
pub fn price_for_size(size_mb: f64, license: LicenseOption) -> PriceBreakdown {
    let tier = tier_for_size(size_mb);
    let download_price = tier.price;
    let license_price = license.price();

    PriceBreakdown {
        tier: *tier,
        download_price,
        license_price,
        total_price: download_price + license_price,
    }
}
