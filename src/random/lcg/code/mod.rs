mod original;

pub use original::lcg_original;

pub mod c_impl;

use crate::registry::BenchFn;
use crate::utils::VariantInfo;

pub fn available_variants() -> Vec<VariantInfo<BenchFn>> {
    let mut variants: Vec<VariantInfo<BenchFn>> = vec![VariantInfo {
        name: "original",
        function: original::lcg_original,
        description: "Original pure Rust implementation",
    }];

    if c_impl::C_IMPL_AVAILABLE {
        variants.push(VariantInfo {
            name: "c-original",
            function: c_impl::lcg_c_wrapper,
            description: "C implementation of the wrapping LCG",
        });
    }

    variants
}
