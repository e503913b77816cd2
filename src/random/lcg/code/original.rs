use crate::random::{INCREMENT, MULTIPLIER, SEED};

/// `seed = seed * 179 + 239`, left to wrap around at 2^64.
pub fn lcg_original(iterations: u32) -> u64 {
    let mut seed = SEED;
    for _ in 0..iterations {
        seed = seed.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
    }
    seed
}
