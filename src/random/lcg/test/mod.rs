use super::code;
use super::LcgRunner;
use crate::random::{DEFAULT_ITERATIONS, SEED};
use crate::registry::AlgorithmRunner;

#[test]
fn test_lcg_known_values() {
    // 57 * 179 + 239 = 10442
    assert_eq!(code::lcg_original(0), SEED);
    assert_eq!(code::lcg_original(1), 10_442);
    assert_eq!(code::lcg_original(2), 1_869_357);
    assert_eq!(code::lcg_original(3), 334_615_142);
}

#[test]
fn test_lcg_wraps_at_2_64() {
    assert_eq!(code::lcg_original(DEFAULT_ITERATIONS), 4_859_897_876_924_391_609);
}

#[test]
fn test_all_variants_match_original() {
    let variants = code::available_variants();
    for variant in &variants {
        for iterations in [0, 7, 10_000] {
            assert_eq!(
                (variant.function)(iterations),
                code::lcg_original(iterations),
                "Variant {} mismatch at {} iterations",
                variant.name,
                iterations
            );
        }
    }
}

#[test]
fn test_runner_verify() {
    assert_eq!(LcgRunner.verify(), Ok(()));
    assert_eq!(LcgRunner.available_variants()[0], "original");
}
