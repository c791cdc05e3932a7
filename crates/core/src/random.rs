//! Unbiased integer draws from the session's seeded stream.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

/// Uniform value in `[min, max)`. Draws that fall in the incomplete top bucket
/// are rejected so every value is equally likely.
pub(crate) fn rand_range(rng: &mut ChaCha8Rng, min: usize, max: usize) -> usize {
    debug_assert!(min < max, "rand_range needs a non-empty range");
    let range = (max - min) as u64;
    let zone = u64::MAX - (u64::MAX % range);
    loop {
        let value = rng.next_u64();
        if value < zone {
            return min + (value % range) as usize;
        }
    }
}
