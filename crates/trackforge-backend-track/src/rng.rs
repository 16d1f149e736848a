//! Deterministic RNG using PCG32 with BLAKE3 seed derivation.
//!
//! The only randomness in a render is percussion noise, and all of it flows
//! through this module so that a request's seed fully determines the output.
//! Component seeds are derived by hashing the base seed with a string key,
//! giving independent streams without coupling their draw order.

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The seed is duplicated into both halves of the 64-bit state PCG32
/// initializes from.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Derives an independent seed for a named component from the base seed.
///
/// Hashes the base seed (little-endian) concatenated with the key and
/// truncates the BLAKE3 digest to 32 bits.
pub fn derive_component_seed(base_seed: u32, key: &str) -> u32 {
    let mut input = Vec::with_capacity(4 + key.len());
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(key.as_bytes());

    let hash = blake3::hash(&input);
    let bytes: [u8; 4] = hash.as_bytes()[0..4].try_into().unwrap();
    u32::from_le_bytes(bytes)
}

/// Creates an RNG for a named component of a render.
pub fn create_component_rng(base_seed: u32, key: &str) -> Pcg32 {
    create_rng(derive_component_seed(base_seed, key))
}
