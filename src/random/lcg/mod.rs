//! # Wrapping LCG
//!
//! `seed = seed * 179 + 239` over `u64`, no modulus: the multiply and add wrap
//! at 2^64. The cheapest possible generator step, so the loop is bound by the
//! multiply latency.

pub mod code;
#[cfg(test)]
pub mod test;

use crate::registry::{AlgorithmRunner, BenchFn};
use crate::utils::VariantInfo;

/// Iteration counts every variant is checked at
const VERIFY_ITERATIONS: [u32; 4] = [0, 1, 1_000, 100_000];

pub struct LcgRunner;

impl AlgorithmRunner for LcgRunner {
    fn name(&self) -> &'static str {
        "lcg"
    }

    fn description(&self) -> &'static str {
        "Linear congruential generator with 64-bit wrap-around"
    }

    fn category(&self) -> &'static str {
        "random"
    }

    fn variants(&self) -> Vec<VariantInfo<BenchFn>> {
        code::available_variants()
    }

    fn verify(&self) -> Result<(), String> {
        let variants = code::available_variants();

        let original_variant = variants
            .iter()
            .find(|v| v.name == "original")
            .ok_or("No 'original' variant found for reference")?;

        for &iterations in &VERIFY_ITERATIONS {
            let expected = (original_variant.function)(iterations);

            for variant in &variants {
                if variant.name == "original" {
                    continue;
                }

                let result = (variant.function)(iterations);
                if result != expected {
                    return Err(format!(
                        "Variant '{}' failed verification at {} iterations. Expected {}, got {}",
                        variant.name, iterations, expected, result
                    ));
                }
            }
        }

        Ok(())
    }
}
