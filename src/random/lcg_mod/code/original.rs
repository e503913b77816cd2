//! Pure Rust modular LCG loops.
//!
//! All six step the same generator, `seed = (seed * A + B) % MOD`, with the
//! multiply-add wrapping in the integer width before the reduction. They
//! differ in how the running sum is kept:
//!
//! - overflow: `sum += seed`, wrapping
//! - division: `sum = (sum + seed) % MOD`
//! - if: `sum += seed`, then subtract `MOD` once if it went over

use crate::random::{INCREMENT, MOD32, MOD64, MULTIPLIER, SEED};

const SEED32: u32 = SEED as u32;
const A32: u32 = MULTIPLIER as u32;
const B32: u32 = INCREMENT as u32;

#[inline(always)]
fn step32(seed: u32) -> u32 {
    seed.wrapping_mul(A32).wrapping_add(B32) % MOD32
}

#[inline(always)]
fn step64(seed: u64) -> u64 {
    seed.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT) % MOD64
}

pub fn u32_overflow(iterations: u32) -> u32 {
    let mut seed = SEED32;
    let mut sum: u32 = 0;
    for _ in 0..iterations {
        seed = step32(seed);
        sum = sum.wrapping_add(seed);
    }
    sum
}

pub fn u64_overflow(iterations: u32) -> u64 {
    let mut seed = SEED;
    let mut sum: u64 = 0;
    for _ in 0..iterations {
        seed = step64(seed);
        sum = sum.wrapping_add(seed);
    }
    sum
}

pub fn u32_division(iterations: u32) -> u32 {
    let mut seed = SEED32;
    let mut sum: u32 = 0;
    for _ in 0..iterations {
        seed = step32(seed);
        // both operands are below MOD32, so the add cannot overflow
        sum = (sum + seed) % MOD32;
    }
    sum
}

pub fn u64_division(iterations: u32) -> u64 {
    let mut seed = SEED;
    let mut sum: u64 = 0;
    for _ in 0..iterations {
        seed = step64(seed);
        sum = (sum + seed) % MOD64;
    }
    sum
}

pub fn u32_if(iterations: u32) -> u32 {
    let mut seed = SEED32;
    let mut sum: u32 = 0;
    for _ in 0..iterations {
        seed = step32(seed);
        sum += seed;
        if sum >= MOD32 {
            sum -= MOD32;
        }
    }
    sum
}

pub fn u64_if(iterations: u32) -> u64 {
    let mut seed = SEED;
    let mut sum: u64 = 0;
    for _ in 0..iterations {
        seed = step64(seed);
        sum += seed;
        if sum >= MOD64 {
            sum -= MOD64;
        }
    }
    sum
}
