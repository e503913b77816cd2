//! Linear congruential generator micro-benchmarks.
//!
//! Each generator starts from [`SEED`] and steps `seed = seed * A + B`,
//! optionally reduced modulo a prime. They exist to exercise the measurement
//! harness on tight integer loops.

pub mod lcg;
pub mod lcg_mod;

/// Starting state of every generator
pub const SEED: u64 = 57;
/// Multiplier `A`
pub const MULTIPLIER: u64 = 179;
/// Increment `B`
pub const INCREMENT: u64 = 239;
/// 32-bit modulus (prime)
pub const MOD32: u32 = 1_000_000_007;
/// 64-bit modulus (prime)
pub const MOD64: u64 = 1_000_000_000_000_000_009;
/// Loop count used by the benchmark programs
pub const DEFAULT_ITERATIONS: u32 = 1_000_000;
