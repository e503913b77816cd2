mod original;

pub use original::{u32_division, u32_if, u32_overflow, u64_division, u64_if, u64_overflow};

pub mod c_impl;

use crate::registry::BenchFn;
use crate::utils::VariantInfo;

fn variant(name: &'static str, description: &'static str, function: BenchFn) -> VariantInfo<BenchFn> {
    VariantInfo {
        name,
        description,
        function,
    }
}

pub fn available_variants() -> Vec<VariantInfo<BenchFn>> {
    let mut variants = vec![
        variant("u32-overflow", "32-bit integers, overflow", |n| {
            original::u32_overflow(n) as u64
        }),
        variant("u64-overflow", "64-bit integers, overflow", original::u64_overflow),
        variant("u32-division", "32-bit integers, division", |n| {
            original::u32_division(n) as u64
        }),
        variant("u64-division", "64-bit integers, division", original::u64_division),
        variant("u32-if", "32-bit integers, if", |n| original::u32_if(n) as u64),
        variant("u64-if", "64-bit integers, if", original::u64_if),
    ];

    if c_impl::C_IMPL_AVAILABLE {
        variants.extend([
            variant("c-u32-overflow", "C, 32-bit integers, overflow", |n| {
                c_impl::u32_overflow_c(n) as u64
            }),
            variant("c-u64-overflow", "C, 64-bit integers, overflow", c_impl::u64_overflow_c),
            variant("c-u32-division", "C, 32-bit integers, division", |n| {
                c_impl::u32_division_c(n) as u64
            }),
            variant("c-u64-division", "C, 64-bit integers, division", c_impl::u64_division_c),
            variant("c-u32-if", "C, 32-bit integers, if", |n| c_impl::u32_if_c(n) as u64),
            variant("c-u64-if", "C, 64-bit integers, if", c_impl::u64_if_c),
        ]);
    }

    variants
}
