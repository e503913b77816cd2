//! # Modular LCG
//!
//! `seed = (seed * 179 + 239) % MOD` summed over every step, in 32-bit and
//! 64-bit integers. The variants differ only in how the running sum is kept,
//! which is the cost being compared:
//!
//! - `overflow`: plain wrapping add, no reduction
//! - `division`: `%` after every add
//! - `if`: one conditional subtract after every add
//!
//! `division` and `if` compute the same value for a given width.

pub mod code;
#[cfg(test)]
pub mod test;

use crate::registry::{rust_counterpart, AlgorithmRunner, BenchFn};
use crate::utils::VariantInfo;

const VERIFY_ITERATIONS: [u32; 4] = [0, 1, 1_000, 100_000];

pub struct LcgModRunner;

impl AlgorithmRunner for LcgModRunner {
    fn name(&self) -> &'static str {
        "lcg_mod"
    }

    fn description(&self) -> &'static str {
        "Linear congruential generator reduced modulo a prime, summed"
    }

    fn category(&self) -> &'static str {
        "random"
    }

    fn variants(&self) -> Vec<VariantInfo<BenchFn>> {
        code::available_variants()
    }

    /// C variants match their Rust variant, `if` matches `division` of the same width.
    fn reference_of(&self, variant: &str) -> Option<&'static str> {
        match variant {
            "u32-if" => Some("u32-division"),
            "u64-if" => Some("u64-division"),
            _ => rust_counterpart(&self.available_variants(), variant),
        }
    }

    fn verify(&self) -> Result<(), String> {
        let variants = code::available_variants();
        let find = |name: &str| {
            variants
                .iter()
                .find(|v| v.name == name)
                .ok_or_else(|| format!("No '{}' variant found for reference", name))
        };

        for &iterations in &VERIFY_ITERATIONS {
            for variant in &variants {
                let Some(reference) = self.reference_of(variant.name) else {
                    continue;
                };
                let expected = (find(reference)?.function)(iterations);
                let result = (variant.function)(iterations);
                if result != expected {
                    return Err(format!(
                        "Variant '{}' disagrees with '{}' at {} iterations. Expected {}, got {}",
                        variant.name, reference, iterations, expected, result
                    ));
                }
            }
        }

        Ok(())
    }
}
