use super::code;
use super::LcgModRunner;
use crate::random::{DEFAULT_ITERATIONS, MOD32, MOD64};
use crate::registry::AlgorithmRunner;

const ITERATIONS: [u32; 4] = [1, 3, 10, DEFAULT_ITERATIONS];

#[test]
fn test_overflow_known_values() {
    let u32_expected = [10_442, 336_494_941, 2_286_588_476, 4_069_574_048];
    let u64_expected = [
        10_442,
        336_494_941,
        1_893_679_753_211_599_733,
        9_357_552_152_207_047_944,
    ];

    for (i, &n) in ITERATIONS.iter().enumerate() {
        assert_eq!(code::u32_overflow(n), u32_expected[i], "u32 at {}", n);
        assert_eq!(code::u64_overflow(n), u64_expected[i], "u64 at {}", n);
    }
}

#[test]
fn test_reduced_known_values() {
    let u32_expected = [10_442, 336_494_941, 286_588_462, 727_460_381];
    let u64_expected = [10_442, 336_494_941, 893_679_753_211_599_724, 740_827_219_322_371_763];

    for (i, &n) in ITERATIONS.iter().enumerate() {
        assert_eq!(code::u32_division(n), u32_expected[i], "u32 division at {}", n);
        assert_eq!(code::u32_if(n), u32_expected[i], "u32 if at {}", n);
        assert_eq!(code::u64_division(n), u64_expected[i], "u64 division at {}", n);
        assert_eq!(code::u64_if(n), u64_expected[i], "u64 if at {}", n);
    }
}

#[test]
fn test_zero_iterations() {
    for variant in code::available_variants() {
        assert_eq!((variant.function)(0), 0, "{} should sum nothing", variant.name);
    }
}

#[test]
fn test_reduced_sums_stay_below_modulus() {
    for n in [17, 1_000, 12_345] {
        assert!(code::u32_if(n) < MOD32);
        assert!(code::u64_if(n) < MOD64);
    }
}

#[test]
fn test_c_variants_match_rust() {
    let variants = code::available_variants();
    for variant in variants.iter().filter(|v| v.name.starts_with("c-")) {
        let rust = variants
            .iter()
            .find(|v| v.name == &variant.name[2..])
            .unwrap();
        for n in [0, 5, 50_000] {
            assert_eq!(
                (variant.function)(n),
                (rust.function)(n),
                "Variant {} mismatch at {} iterations",
                variant.name,
                n
            );
        }
    }
}

#[test]
fn test_reference_pairs() {
    assert_eq!(LcgModRunner.reference_of("u32-if"), Some("u32-division"));
    assert_eq!(LcgModRunner.reference_of("u64-if"), Some("u64-division"));
    assert_eq!(LcgModRunner.reference_of("u32-overflow"), None);
    assert_eq!(LcgModRunner.reference_of("u64-division"), None);
    if code::c_impl::C_IMPL_AVAILABLE {
        assert_eq!(LcgModRunner.reference_of("c-u64-if"), Some("u64-if"));
    }
}

#[test]
fn test_runner_verify() {
    assert_eq!(LcgModRunner.verify(), Ok(()));
    let names = LcgModRunner.available_variants();
    assert_eq!(
        &names[..6],
        &["u32-overflow", "u64-overflow", "u32-division", "u64-division", "u32-if", "u64-if"]
    );
}
