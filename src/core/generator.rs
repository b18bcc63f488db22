//! Random secret generation.

use crate::constants;
use rand::rngs::OsRng;
use rand::Rng;

/// Generate a random secret of exactly `length` characters, each drawn
/// uniformly from [`constants::SECRET_POOL`]. `length == 0` yields the
/// empty string.
pub fn generate(length: usize) -> String {
    let mut rng = OsRng;
    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..constants::SECRET_POOL.len());
            constants::SECRET_POOL[idx] as char
        })
        .collect()
}
